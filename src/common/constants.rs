//! 共通定数

use num_complex::Complex64;

/// 発散判定の半径（|z| > 2 となった点は必ず発散する）
pub const ESCAPE_RADIUS: f64 = 2.0;

/// 最大反復回数
pub const MAX_ITER: u32 = 256;

/// 1つのグリッドに許すセル数の上限
pub const MAX_GRID_CELLS: usize = 1 << 26;

/// ジュリア集合の既定の定数
pub const DEFAULT_JULIA_CONSTANT: Complex64 = Complex64::new(-0.8, 0.156);

/// 初期表示の左上の角
pub const DEFAULT_TOP_LEFT: Complex64 = Complex64::new(-2.0, 1.5);
/// 初期表示の右下の角（この点自体は含まない）
pub const DEFAULT_BOTTOM_RIGHT: Complex64 = Complex64::new(1.0, -1.5);
/// 初期表示の刻み幅
pub const DEFAULT_STEP: f64 = 0.5;
