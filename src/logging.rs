// ファイル出力の詳細ログ

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// グローバルな詳細ログフラグ
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

/// ログファイルのグローバルハンドル
static LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// ログファイルを初期化する（既存の内容は破棄）
pub fn init_log_file(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut log_file = LOG_FILE.lock().unwrap();
    *log_file = Some(file);
    Ok(())
}

/// 1行書き込んで即フラッシュする
pub fn write_log(message: &str) {
    if let Ok(mut log_file) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_file {
            let _ = writeln!(file, "{}", message);
            let _ = file.flush();
        }
    }
}

/// 詳細ログの有効・無効を切り替える
pub fn set_verbose_logging(enabled: bool) {
    VERBOSE_LOGGING.store(enabled, Ordering::Relaxed);
}

/// 詳細ログが有効かチェック
pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// 詳細ログ出力マクロ（有効時のみフォーマットしてファイルへ）
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            let message = format!($($arg)*);
            $crate::logging::write_log(&message);
        }
    };
}
