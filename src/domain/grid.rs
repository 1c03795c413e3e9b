// 週グリッドのレイアウト

use super::weeks::WeeksResult;
use crate::constants::ROW_WIDTH;

/// グリッド上の1セル
/// 保存はせず、描画のたびに WeekGrid::rows から再生成する
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekCell {
    /// 経過済みの週かどうか
    pub is_passed: bool,
}

/// 週セルを行単位に並べるレイアウト
/// 週数だけを保持し、セル列は毎回同じ内容を決定的に再生成する
#[derive(Clone, Copy, Debug)]
pub struct WeekGrid {
    passed_weeks: i64,
    total_weeks: i64,
}

impl WeekGrid {
    pub fn new(result: &WeeksResult) -> Self {
        Self {
            passed_weeks: result.passed_weeks(),
            total_weeks: result.total_weeks(),
        }
    }

    /// 行のイテレータ。各行は最大 ROW_WIDTH 個のセル（最終行のみ短くなりうる）
    /// 通し番号 i のセルは i < passed_weeks のとき経過済み
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = WeekCell>> {
        let passed = self.passed_weeks;
        let total = self.total_weeks;
        (0..total.max(0)).step_by(ROW_WIDTH).map(move |start| {
            let end = (start + ROW_WIDTH as i64).min(total);
            (start..end).map(move |i| WeekCell {
                is_passed: i < passed,
            })
        })
    }

    pub fn total_weeks(&self) -> i64 {
        self.total_weeks
    }

    /// 行数（合計が0以下なら0行）
    pub fn row_count(&self) -> usize {
        if self.total_weeks <= 0 {
            0
        } else {
            (self.total_weeks as u64).div_ceil(ROW_WIDTH as u64) as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::age::AgeInput;

    fn grid(current: i64, target: i64) -> WeekGrid {
        let ages = AgeInput::new(current, target).unwrap();
        WeekGrid::new(&WeeksResult::from_ages(&ages))
    }

    #[test]
    fn one_year_is_one_full_row() {
        let g = grid(0, 1);
        assert_eq!(g.row_count(), 1);

        let rows: Vec<Vec<WeekCell>> = g.rows().map(|r| r.collect()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 52);
        assert!(rows[0].iter().all(|c| !c.is_passed));
    }

    #[test]
    fn two_years_split_passed_and_remaining_by_row() {
        let g = grid(1, 2);
        let rows: Vec<Vec<WeekCell>> = g.rows().map(|r| r.collect()).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].iter().all(|c| c.is_passed));
        assert!(rows[1].iter().all(|c| !c.is_passed));
    }

    #[test]
    fn boundary_cell_follows_linear_index() {
        // 経過26週: 1行目の前半だけが経過済み
        let ages = AgeInput::new(0, 1).unwrap();
        let result = WeeksResult::from_ages(&ages);
        let g = WeekGrid {
            passed_weeks: 26,
            total_weeks: result.total_weeks(),
        };
        let row: Vec<WeekCell> = g.rows().next().unwrap().collect();
        assert!(row[25].is_passed);
        assert!(!row[26].is_passed);
    }

    #[test]
    fn large_target_is_unbounded() {
        let g = grid(20, 120);
        assert_eq!(g.total_weeks(), 120 * 52);
        assert_eq!(g.row_count(), 120);
        assert_eq!(g.rows().count(), 120);
    }

    #[test]
    fn twenty_one_rows_for_target_21() {
        let g = grid(20, 21);
        assert_eq!(g.total_weeks(), 1092);
        assert_eq!(g.row_count(), 21);
        // 最終行より前はすべて経過済み（1040 = 20行分）
        let rows: Vec<Vec<WeekCell>> = g.rows().map(|r| r.collect()).collect();
        assert!(rows[19].iter().all(|c| c.is_passed));
        assert!(rows[20].iter().all(|c| !c.is_passed));
    }

    #[test]
    fn rows_are_restartable() {
        let g = grid(3, 7);
        let first: Vec<Vec<bool>> = g
            .rows()
            .map(|r| r.map(|c| c.is_passed).collect())
            .collect();
        let second: Vec<Vec<bool>> = g
            .rows()
            .map(|r| r.map(|c| c.is_passed).collect())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn non_positive_total_yields_no_rows() {
        let g = WeekGrid {
            passed_weeks: 0,
            total_weeks: 0,
        };
        assert_eq!(g.row_count(), 0);
        assert_eq!(g.rows().count(), 0);

        let g = WeekGrid {
            passed_weeks: -52,
            total_weeks: -52,
        };
        assert_eq!(g.row_count(), 0);
        assert_eq!(g.rows().count(), 0);
    }
}
