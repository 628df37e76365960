//! エスケープタイム法によるフラクタル計算ライブラリ
//!
//! 複素平面上の矩形領域をサンプリングし、各点について漸化式を反復して
//! 発散までの回数を [0, 1] の輝度値に変換する。
//!
//!   - `complex_grid`: 左上・右下の角と刻み幅からサンプル点の2次元配列を作る
//!   - `escape_time`: マンデルブロ漸化式 z = z^2 + c の発散回数
//!   - `mandelbrot_colors`: マンデルブロ集合の輝度配列
//!   - `julia_colors`: ジュリア集合の輝度配列
//!
//! 各点の計算は独立しているため、配色処理は ndarray の Zip と Rayon で全セルを並列に評価する。

pub mod common;

pub use common::{
    colors::{escape_intensity, julia_colors, mandelbrot_colors, to_gray_buffer},
    error::{FractalError, Result},
    fractal::Fractal,
    grid::{complex_grid, Viewport},
    mandelbrot::{escape_time, julia_escape_time, EscapeTime},
};
pub use ndarray::Array2;
pub use num_complex::Complex64;
