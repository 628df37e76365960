//! エスケープタイム計算関数

use num_complex::Complex64;

use super::constants::ESCAPE_RADIUS;

/// 1点の発散判定の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeTime {
    /// 指定の反復回数で |z| > 2 となった
    Escaped(u32),
    /// 最大反復回数まで発散しなかった
    DidNotEscape,
}

impl EscapeTime {
    /// 発散した場合はその反復回数
    pub fn count(self) -> Option<u32> {
        match self {
            EscapeTime::Escaped(n) => Some(n),
            EscapeTime::DidNotEscape => None,
        }
    }

    pub fn escaped(self) -> bool {
        matches!(self, EscapeTime::Escaped(_))
    }
}

impl From<EscapeTime> for Option<u32> {
    fn from(value: EscapeTime) -> Self {
        value.count()
    }
}

/// マンデルブロ漸化式 z = z^2 + c の発散回数を計算
///
/// z は c から始め、更新の前に |z| を判定する。判定は `max_iter + 1` 回行うので、
/// `max_iter = 0` のときは c 自体を1回だけ判定する。
pub fn escape_time(c: Complex64, max_iter: u32) -> EscapeTime {
    let mut z = c;

    for i in 0..=max_iter {
        if z.norm() > ESCAPE_RADIUS {
            return EscapeTime::Escaped(i);
        }
        z = z * z + c;
    }
    EscapeTime::DidNotEscape
}

/// ジュリア漸化式 z = z^2 + constant の発散回数を計算
///
/// z0 がサンプル点、constant は画像全体で共通の定数。
/// カウンタは1から始まるので、|z0| > 2 でも結果は `Escaped(1)` になる。
pub fn julia_escape_time(z0: Complex64, constant: Complex64, max_iter: u32) -> EscapeTime {
    let mut z = z0;

    for i in 1..=max_iter {
        if z.norm() > ESCAPE_RADIUS {
            return EscapeTime::Escaped(i);
        }
        z = z * z + constant;
    }
    EscapeTime::DidNotEscape
}
