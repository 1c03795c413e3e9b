// UI描画用のヘルパー関数

use egui::Color32;

use crate::constants::ROW_WIDTH;
use crate::domain::{WeekCell, WeekGrid};

/// 経過週の塗りつぶし色
pub const PASSED_FILL: Color32 = Color32::from_rgb(0, 122, 255);
/// 未来週の塗りつぶし色
pub const REMAINING_FILL: Color32 = Color32::from_rgb(224, 224, 224);

/// セルの塗りつぶし色を取得
pub fn week_fill(cell: WeekCell) -> Color32 {
    if cell.is_passed {
        PASSED_FILL
    } else {
        REMAINING_FILL
    }
}

/// 週グリッドの描画（1行 = ROW_WIDTH セル、最終行のみ短くなりうる）
pub fn draw_week_grid(ui: &mut egui::Ui, grid: &WeekGrid) {
    let cell = 8.0_f32;
    let gap = 2.0_f32;

    let rows = grid.row_count();
    if rows == 0 {
        return;
    }

    let width = ROW_WIDTH as f32 * cell + (ROW_WIDTH - 1) as f32 * gap;
    let height = rows as f32 * cell + (rows - 1) as f32 * gap;

    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    for (y, row) in grid.rows().enumerate() {
        for (x, week) in row.enumerate() {
            let x0 = rect.min.x + x as f32 * (cell + gap);
            let y0 = rect.min.y + y as f32 * (cell + gap);
            let r = egui::Rect::from_min_size(egui::pos2(x0, y0), egui::vec2(cell, cell));

            painter.rect_filled(r, 2.0, week_fill(week));
            // グリッド線（境界）
            painter.rect_stroke(r, 2.0, egui::Stroke::new(0.5, Color32::from_gray(200)));
        }
    }
}

/// 日本語フォントのインストール（Windows用）
pub fn install_japanese_fonts(ctx: &egui::Context) {
    use egui::{FontData, FontDefinitions, FontFamily};

    let mut fonts = FontDefinitions::default();

    let windir = std::env::var("WINDIR").unwrap_or_else(|_| "C:\\Windows".to_string());
    let fontdir = std::path::Path::new(&windir).join("Fonts");
    let candidates = ["meiryo.ttc", "YuGothR.ttc", "YuGothM.ttc", "msgothic.ttc"];

    let mut loaded = false;
    for name in candidates.iter() {
        let path = fontdir.join(name);
        if let Ok(bytes) = std::fs::read(&path) {
            let key = format!("jp-{}", name.to_lowercase());
            fonts
                .font_data
                .insert(key.clone(), FontData::from_owned(bytes));
            fonts
                .families
                .get_mut(&FontFamily::Proportional)
                .unwrap()
                .insert(0, key.clone());
            fonts
                .families
                .get_mut(&FontFamily::Monospace)
                .unwrap()
                .insert(0, key);
            loaded = true;
            break;
        }
    }

    if loaded {
        ctx.set_fonts(fonts);
    }
}
