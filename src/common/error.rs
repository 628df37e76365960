//! エラー型

use num_complex::Complex64;

/// 入力値の検証エラー
///
/// 発散しなかった点はエラーではなく `EscapeTime::DidNotEscape` として扱う。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FractalError {
    #[error("刻み幅は正の有限値である必要があります: {0}")]
    InvalidStep(f64),
    #[error("座標が有限値ではありません: {0}")]
    NonFiniteCoordinate(Complex64),
    #[error("ジュリア集合の最大反復回数は1以上である必要があります")]
    ZeroIterations,
    #[error("グリッドが大きすぎます: {rows} x {cols} (上限 {max} セル)")]
    GridTooLarge { rows: usize, cols: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, FractalError>;
