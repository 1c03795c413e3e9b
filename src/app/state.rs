// アプリケーション状態

use crate::application::CalculatorService;
use crate::domain::WeeksResult;
use crate::vlog;

/// アプリケーション状態
/// 観測可能な状態は2つ: 入力待ち（result = None）と結果表示中（result = Some）
pub struct App {
    /// 現在の年齢（生テキスト）
    pub current_age: String,
    /// 目標の年齢（生テキスト）
    pub target_age: String,
    /// 直近の計算結果。次の成功まで前回の結果を保持する
    pub result: Option<WeeksResult>,
    /// 入力エラーの通知。OKで閉じるまで操作をブロックする
    pub notice: Option<String>,
    pub log_lines: Vec<String>,
    pub verbose_logging: bool,
    pub calculator: CalculatorService,
}

impl Default for App {
    fn default() -> Self {
        Self {
            current_age: String::new(),
            target_age: String::new(),
            result: None,
            notice: None,
            log_lines: vec!["待機中".into()],
            verbose_logging: false,
            calculator: CalculatorService::new(),
        }
    }
}

impl App {
    /// 詳細ログの切り替えをグローバルフラグへ反映する
    pub fn apply_verbose_logging(&mut self, enabled: bool) {
        self.verbose_logging = enabled;
        crate::logging::set_verbose_logging(enabled);
    }

    pub fn push_log(&mut self, s: String) {
        self.log_lines.push(s);
        if self.log_lines.len() > 500 {
            let cut = self.log_lines.len() - 500;
            self.log_lines.drain(0..cut);
        }
    }

    /// 計算ボタンのハンドラ
    /// 失敗時は通知を出すだけで、前回の結果には触れない
    pub fn run_calculate(&mut self) {
        match self
            .calculator
            .calculate(&self.current_age, &self.target_age)
        {
            Ok(result) => {
                vlog!(
                    "計算成功: 経過={} 残り={}",
                    result.passed_weeks(),
                    result.remaining_weeks()
                );
                self.push_log(format!(
                    "経過 {} 週 / 残り {} 週",
                    result.passed_weeks(),
                    result.remaining_weeks()
                ));
                self.result = Some(result);
            }
            Err(e) => {
                vlog!("入力エラー: {e:#}");
                self.push_log(format!("エラー: {e}"));
                self.notice = Some(format!("{e}"));
            }
        }
    }
}
