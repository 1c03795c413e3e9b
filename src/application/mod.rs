// アプリケーション層 - ドメインを束ねるサービス

pub mod calculator;

pub use calculator::CalculatorService;
