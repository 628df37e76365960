//! 発散回数から輝度への変換と配色処理

use log::{debug, log_enabled, Level};
use ndarray::{Array2, Zip};
use num_complex::Complex64;
use rayon::prelude::*;

use super::error::{FractalError, Result};
use super::mandelbrot::{escape_time, julia_escape_time, EscapeTime};

/// 発散回数を [0, 1] の輝度に変換
///
/// 早く発散した点ほど 1 に近く、`max_iter` 回目で発散した点は `1 / (max_iter + 1)`。
/// 発散しなかった点は 0.0。
pub fn escape_intensity(result: EscapeTime, max_iter: u32) -> f64 {
    match result {
        EscapeTime::Escaped(n) => {
            (f64::from(max_iter) - f64::from(n) + 1.0) / (f64::from(max_iter) + 1.0)
        }
        EscapeTime::DidNotEscape => 0.0,
    }
}

/// 輝度をグレースケールの色に変換（u32形式: 0xRRGGBB）
pub fn intensity_to_gray_u32(value: f64) -> u32 {
    let v = (value.clamp(0.0, 1.0) * 255.0) as u32;
    (v << 16) | (v << 8) | v
}

/// 輝度配列をグレースケールのピクセルバッファ（行優先）に変換
pub fn to_gray_buffer(colors: &Array2<f64>) -> Vec<u32> {
    let colors = colors.as_standard_layout();
    match colors.as_slice() {
        Some(cells) => cells.par_iter().map(|&v| intensity_to_gray_u32(v)).collect(),
        None => colors.iter().map(|&v| intensity_to_gray_u32(v)).collect(),
    }
}

/// 各点に色を付ける（全セルを並列に評価）
///
/// 各セルは対応する1点の計算だけで決まる。
fn colorize<F>(grid: &Array2<Complex64>, color_of: F) -> Array2<f64>
where
    F: Fn(Complex64) -> f64 + Sync,
{
    Zip::from(grid).par_map_collect(|&point| color_of(point))
}

fn log_pass(name: &str, colors: &Array2<f64>, max_iter: u32) {
    if log_enabled!(Level::Debug) {
        let escaped = colors.iter().filter(|&&v| v > 0.0).count();
        debug!(
            "{}: {}x{} 最大反復 {} 発散 {}/{}",
            name,
            colors.nrows(),
            colors.ncols(),
            max_iter,
            escaped,
            colors.len()
        );
    }
}

/// マンデルブロ集合の輝度配列を計算
///
/// 各点を c として `escape_time` を評価する。出力はグリッドと同じ形状。
pub fn mandelbrot_colors(grid: &Array2<Complex64>, max_iter: u32) -> Array2<f64> {
    let colors = colorize(grid, |c| escape_intensity(escape_time(c, max_iter), max_iter));
    log_pass("マンデルブロ", &colors, max_iter);
    colors
}

/// ジュリア集合の輝度配列を計算
///
/// 各点を漸化式の初期値 z0 とし、`constant` を毎回加える。発散しなかった点は 0.0。
/// `max_iter` は1以上、`constant` は有限値である必要がある。
pub fn julia_colors(
    grid: &Array2<Complex64>,
    constant: Complex64,
    max_iter: u32,
) -> Result<Array2<f64>> {
    if max_iter == 0 {
        return Err(FractalError::ZeroIterations);
    }
    if !constant.is_finite() {
        return Err(FractalError::NonFiniteCoordinate(constant));
    }

    let colors = colorize(grid, |z0| {
        escape_intensity(julia_escape_time(z0, constant, max_iter), max_iter)
    });
    log_pass("ジュリア", &colors, max_iter);
    Ok(colors)
}
