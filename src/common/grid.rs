//! 複素平面のサンプリンググリッド

use log::{debug, trace};
use ndarray::Array2;
use num_complex::Complex64;

use super::constants::{DEFAULT_BOTTOM_RIGHT, DEFAULT_STEP, DEFAULT_TOP_LEFT, MAX_GRID_CELLS};
use super::error::{FractalError, Result};

/// 描画領域（左上の角、右下の角、刻み幅）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top_left: Complex64,
    pub bottom_right: Complex64,
    pub step: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_LEFT, DEFAULT_BOTTOM_RIGHT, DEFAULT_STEP)
    }
}

impl Viewport {
    pub fn new(top_left: Complex64, bottom_right: Complex64, step: f64) -> Self {
        Self {
            top_left,
            bottom_right,
            step,
        }
    }

    /// 中心と半幅・半高さから領域を作る
    pub fn centered(center: Complex64, half_width: f64, half_height: f64, step: f64) -> Self {
        Self::new(
            Complex64::new(center.re - half_width, center.im + half_height),
            Complex64::new(center.re + half_width, center.im - half_height),
            step,
        )
    }

    /// この領域のサンプル点グリッド
    pub fn grid(&self) -> Result<Array2<Complex64>> {
        complex_grid(self.top_left, self.bottom_right, self.step)
    }
}

/// arange と同じ規則で [0, span) を step 刻みにした点の個数
fn axis_len(span: f64, step: f64) -> usize {
    let n = (span / step).ceil();
    if n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// 左上から右下（右下は含まない）までを step 刻みでサンプリングしたグリッドを作る
///
/// 列が右に進むほど実部が増え、行が下に進むほど虚部が減る。
/// `grid[[r, c]] = top_left + c * step - i * r * step`
///
/// 角の位置関係が逆の軸は長さ0になる（エラーにはしない）。
/// 刻み幅が正の有限値でない場合や、角が有限値でない場合はエラー。
pub fn complex_grid(
    top_left: Complex64,
    bottom_right: Complex64,
    step: f64,
) -> Result<Array2<Complex64>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(FractalError::InvalidStep(step));
    }
    for corner in [top_left, bottom_right] {
        if !corner.is_finite() {
            return Err(FractalError::NonFiniteCoordinate(corner));
        }
    }

    let cols = axis_len(bottom_right.re - top_left.re, step);
    let rows = axis_len(top_left.im - bottom_right.im, step);
    let too_large = rows > MAX_GRID_CELLS
        || cols > MAX_GRID_CELLS
        || rows.checked_mul(cols).map_or(true, |n| n > MAX_GRID_CELLS);
    if too_large {
        return Err(FractalError::GridTooLarge {
            rows,
            cols,
            max: MAX_GRID_CELLS,
        });
    }
    if rows == 0 || cols == 0 {
        trace!("空の軸を含むグリッド: {}x{}", rows, cols);
    }

    let grid = Array2::from_shape_fn((rows, cols), |(r, c)| {
        Complex64::new(top_left.re + c as f64 * step, top_left.im - r as f64 * step)
    });

    debug!(
        "グリッド生成: {}x{} 刻み {} 左上 {} 右下 {}",
        rows, cols, step, top_left, bottom_right
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn three_by_three_grid() {
        init_logger();
        let grid =
            complex_grid(Complex64::new(0.0, 2.0), Complex64::new(3.0, -1.0), 1.0).unwrap();

        assert_eq!(grid.dim(), (3, 3));
        assert_eq!(
            grid.row(0),
            arr1(&[
                Complex64::new(0.0, 2.0),
                Complex64::new(1.0, 2.0),
                Complex64::new(2.0, 2.0)
            ])
        );
        assert_eq!(
            grid.row(2),
            arr1(&[
                Complex64::new(0.0, 0.0),
                Complex64::new(1.0, 0.0),
                Complex64::new(2.0, 0.0)
            ])
        );
        assert_eq!(grid.get((3, 0)), None);
    }

    #[test]
    fn cells_follow_affine_layout() {
        let top_left = Complex64::new(-1.25, 0.75);
        let step = 0.25;
        let grid = complex_grid(top_left, Complex64::new(0.5, -0.5), step).unwrap();

        assert_eq!(grid.dim(), (5, 7));
        for ((r, c), &z) in grid.indexed_iter() {
            let expected = Complex64::new(
                top_left.re + c as f64 * step,
                top_left.im - r as f64 * step,
            );
            assert_eq!(z, expected);
        }
    }

    #[test]
    fn bottom_right_is_excluded() {
        let grid =
            complex_grid(Complex64::new(0.0, 0.0), Complex64::new(1.0, -1.0), 0.5).unwrap();
        assert_eq!(grid.dim(), (2, 2));
        assert!(grid.iter().all(|z| z.re < 1.0 && z.im > -1.0));
    }

    #[test]
    fn partial_step_rounds_up() {
        // 0, 0.4, 0.8
        let grid =
            complex_grid(Complex64::new(0.0, 0.0), Complex64::new(1.0, -0.4), 0.4).unwrap();
        assert_eq!(grid.dim(), (1, 3));
    }

    #[test]
    fn inverted_corners_give_empty_axis() {
        init_logger();
        // 虚部が上下逆
        let grid =
            complex_grid(Complex64::new(-2.0, -1.5), Complex64::new(1.0, 1.5), 0.5).unwrap();
        assert_eq!(grid.dim(), (0, 6));
        assert!(grid.is_empty());
        assert_eq!(grid.rows().into_iter().count(), 0);

        // 実部が左右逆
        let grid =
            complex_grid(Complex64::new(1.0, 1.0), Complex64::new(-1.0, -1.0), 0.5).unwrap();
        assert_eq!(grid.dim(), (4, 0));
        assert!(grid.rows().into_iter().all(|row| row.is_empty()));

        // 同じ点
        let z = Complex64::new(0.5, 0.5);
        assert_eq!(complex_grid(z, z, 0.1).unwrap().dim(), (0, 0));
    }

    #[test]
    fn rejects_bad_step() {
        let a = Complex64::new(0.0, 1.0);
        let b = Complex64::new(1.0, 0.0);
        for step in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            match complex_grid(a, b, step) {
                Err(FractalError::InvalidStep(_)) => {}
                other => panic!("step {step}: {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_non_finite_corner() {
        let bad = Complex64::new(f64::NAN, 0.0);
        let err = complex_grid(Complex64::new(0.0, 1.0), bad, 0.5).unwrap_err();
        assert!(matches!(err, FractalError::NonFiniteCoordinate(_)));
    }

    #[test]
    fn rejects_huge_grid() {
        let err = complex_grid(Complex64::new(-2.0, 1.5), Complex64::new(1.0, -1.5), 1e-6)
            .unwrap_err();
        assert!(matches!(err, FractalError::GridTooLarge { .. }));

        let err = complex_grid(Complex64::new(-1e308, 0.0), Complex64::new(1e308, -1.0), 1.0)
            .unwrap_err();
        assert!(matches!(err, FractalError::GridTooLarge { .. }));
    }

    #[test]
    fn viewport_builds_same_grid() {
        let view = Viewport::default();
        let expected = complex_grid(view.top_left, view.bottom_right, view.step).unwrap();
        assert_eq!(view.grid().unwrap(), expected);
        assert_eq!(view.grid().unwrap().dim(), (6, 6));

        let centered = Viewport::centered(Complex64::new(0.0, 0.0), 1.5, 1.5, 0.5);
        assert_eq!(centered.top_left, Complex64::new(-1.5, 1.5));
        assert_eq!(centered.bottom_right, Complex64::new(1.5, -1.5));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let tl = Complex64::new(-0.3, 0.7);
        let br = Complex64::new(0.9, -0.1);
        let a = complex_grid(tl, br, 0.07).unwrap();
        let b = complex_grid(tl, br, 0.07).unwrap();
        assert_eq!(a.dim(), b.dim());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.re.to_bits(), y.re.to_bits());
            assert_eq!(x.im.to_bits(), y.im.to_bits());
        }
    }
}
