// 週グリッド定数

/// 1年あたりの週数（固定値。うるう年や端数週は考慮しない）
pub const WEEKS_PER_YEAR: i64 = 52;

/// グリッド1行あたりのセル数
/// 「1行 ＝ 1年」に見えるよう WEEKS_PER_YEAR と同じ値を流用する
pub const ROW_WIDTH: usize = WEEKS_PER_YEAR as usize;
