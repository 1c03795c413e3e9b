// 人生週数計算機 - ライブラリモジュール

pub mod constants;
pub mod domain;      // ドメイン層
pub mod application; // アプリケーション層
pub mod app;         // UI層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use app::App;
pub use application::CalculatorService;
pub use constants::{ROW_WIDTH, WEEKS_PER_YEAR};
pub use domain::{AgeInput, WeekCell, WeekGrid, WeeksResult};
