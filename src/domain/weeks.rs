// 週数計算のValue Object

use serde::{Deserialize, Serialize};

use super::age::AgeInput;
use crate::constants::WEEKS_PER_YEAR;

/// 計算結果の週数
/// 不変条件: passed_weeks + remaining_weeks == 目標年齢 * 52
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeksResult {
    passed_weeks: i64,
    remaining_weeks: i64,
}

impl WeeksResult {
    /// 検証済みの年齢ペアから計算する
    pub fn from_ages(ages: &AgeInput) -> Self {
        let passed_weeks = ages.current() * WEEKS_PER_YEAR;
        let remaining_weeks = (ages.target() - ages.current()) * WEEKS_PER_YEAR;
        Self {
            passed_weeks,
            remaining_weeks,
        }
    }

    pub fn passed_weeks(&self) -> i64 {
        self.passed_weeks
    }

    pub fn remaining_weeks(&self) -> i64 {
        self.remaining_weeks
    }

    /// 合計週数（= 目標年齢 * 52）
    pub fn total_weeks(&self) -> i64 {
        self.passed_weeks + self.remaining_weeks
    }
}
