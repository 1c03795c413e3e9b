// ドメイン層 - 週数計算の中核

pub mod age;
pub mod grid;
pub mod weeks;

pub use age::AgeInput;
pub use grid::{WeekCell, WeekGrid};
pub use weeks::WeeksResult;
