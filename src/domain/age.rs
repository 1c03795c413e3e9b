// 年齢入力のValue Object

use anyhow::{anyhow, Context, Result};

use crate::constants::WEEKS_PER_YEAR;

/// 週数換算（年齢差の換算を含む）が i64 に収まる年齢の絶対値上限
const MAX_ABS_AGE: i64 = i64::MAX / WEEKS_PER_YEAR / 2;

/// 検証済みの年齢ペア
/// 構築時に 現在年齢 < 目標年齢 と週数換算可能な範囲を保証する
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgeInput {
    current: i64,
    target: i64,
}

impl AgeInput {
    /// 整数ペアから作成（順序と換算可能な範囲のみ検証）
    /// 負の年齢は弾かない（元アプリ互換。パース失敗と順序違反だけがエラー）
    pub fn new(current: i64, target: i64) -> Result<Self> {
        let range = -MAX_ABS_AGE..=MAX_ABS_AGE;
        if !range.contains(&current) || !range.contains(&target) {
            return Err(anyhow!(
                "年齢の絶対値が大きすぎます（上限 {}）",
                MAX_ABS_AGE
            ));
        }
        if current >= target {
            return Err(anyhow!(
                "現在の年齢は目標の年齢より小さい必要があります: {} >= {}",
                current,
                target
            ));
        }
        Ok(Self { current, target })
    }

    /// 生テキストから作成（10進整数パース + 順序検証）
    pub fn parse(current: &str, target: &str) -> Result<Self> {
        let cur: i64 = current
            .trim()
            .parse()
            .with_context(|| format!("現在の年齢が数値ではありません: {current:?}"))?;
        let tgt: i64 = target
            .trim()
            .parse()
            .with_context(|| format!("目標の年齢が数値ではありません: {target:?}"))?;
        Self::new(cur, tgt)
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}
