// 週数計算サービス

use anyhow::Result;

use crate::domain::{AgeInput, WeeksResult};

/// 入力検証と週数計算を束ねるサービス
/// UIに依存せず、生テキスト2つ（または整数2つ）だけで呼び出せる
#[derive(Clone, Copy, Debug, Default)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// 生テキストの年齢ペアから週数を計算する
    pub fn calculate(&self, current: &str, target: &str) -> Result<WeeksResult> {
        let ages = AgeInput::parse(current, target)?;
        Ok(WeeksResult::from_ages(&ages))
    }

    /// 整数の年齢ペアから週数を計算する
    pub fn calculate_ages(&self, current: i64, target: i64) -> Result<WeeksResult> {
        let ages = AgeInput::new(current, target)?;
        Ok(WeeksResult::from_ages(&ages))
    }
}
