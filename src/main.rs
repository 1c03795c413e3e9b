// 人生週数計算機 - エントリポイント

use anyhow::{anyhow, Result};
use eframe::egui;

use lifeweeks::app::ui::helpers::install_japanese_fonts;
use lifeweeks::App;

// ====== eframe エントリ ======
fn main() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(680.0, 760.0)),
        ..Default::default()
    };

    eframe::run_native(
        "人生週数計算機 — Rust GUI",
        options,
        Box::new(|cc| {
            install_japanese_fonts(&cc.egui_ctx);
            Box::new(App::default())
        }),
    )
    .map_err(|e| anyhow!("GUI起動に失敗: {e}"))
}
