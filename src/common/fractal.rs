//! フラクタルの種類

use ndarray::Array2;
use num_complex::Complex64;

use super::colors::{julia_colors, mandelbrot_colors};
use super::constants::{DEFAULT_JULIA_CONSTANT, MAX_ITER};
use super::error::Result;
use super::grid::Viewport;
use super::mandelbrot::{escape_time, julia_escape_time, EscapeTime};

/// 描画するフラクタル
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Fractal {
    /// サンプル点を c とする z = z^2 + c
    #[default]
    Mandelbrot,
    /// サンプル点を z0 とする z = z^2 + constant
    Julia { constant: Complex64 },
}

impl std::fmt::Display for Fractal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fractal::Mandelbrot => write!(f, "マンデルブロ集合"),
            Fractal::Julia { constant } => write!(f, "ジュリア集合 (c = {})", constant),
        }
    }
}

impl Fractal {
    /// 既定の定数を使うジュリア集合
    pub fn julia_default() -> Self {
        Fractal::Julia {
            constant: DEFAULT_JULIA_CONSTANT,
        }
    }

    /// 1点の発散回数
    pub fn escape_time(&self, point: Complex64, max_iter: u32) -> EscapeTime {
        match *self {
            Fractal::Mandelbrot => escape_time(point, max_iter),
            Fractal::Julia { constant } => julia_escape_time(point, constant, max_iter),
        }
    }

    /// グリッド全体の輝度配列
    pub fn colors(&self, grid: &Array2<Complex64>, max_iter: u32) -> Result<Array2<f64>> {
        match *self {
            Fractal::Mandelbrot => Ok(mandelbrot_colors(grid, max_iter)),
            Fractal::Julia { constant } => julia_colors(grid, constant, max_iter),
        }
    }

    /// 既定の最大反復回数 `MAX_ITER` で領域全体を描画
    pub fn render(&self, viewport: &Viewport) -> Result<Array2<f64>> {
        self.colors(&viewport.grid()?, MAX_ITER)
    }
}
