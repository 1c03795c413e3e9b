// UIモジュールのエントリポイント

pub mod helpers;

use egui::{Color32, RichText};

use crate::app::App;
use crate::domain::WeekGrid;

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 初回フレームでログファイルとverboseフラグを同期
        static INITIALIZED: std::sync::atomic::AtomicBool =
            std::sync::atomic::AtomicBool::new(false);
        if !INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            let log_path = std::path::Path::new("lifeweeks_log.txt");
            if let Err(e) = crate::logging::init_log_file(log_path) {
                eprintln!("ログファイルの初期化に失敗: {}", e);
            }
            crate::logging::set_verbose_logging(self.verbose_logging);
        }

        // 入力エラーの通知（OKで閉じるまで入力をブロック）
        let mut close_notice = false;
        if let Some(message) = self.notice.clone() {
            egui::Window::new("入力エラー")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.label("現在の年齢 < 目標の年齢 となる数値を入力してください");
                    if ui.button("OK").clicked() {
                        close_notice = true;
                    }
                });
        }
        if close_notice {
            self.notice = None;
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.heading("人生週数計算機 — 残り時間を週で見る");
        });

        egui::SidePanel::left("left").min_width(260.0).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = egui::Vec2::new(8.0, 8.0);

                    ui.add_enabled_ui(self.notice.is_none(), |ui| {
                        ui.group(|ui| {
                            ui.label("入力");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.current_age)
                                    .hint_text("現在の年齢"),
                            );
                            ui.add(
                                egui::TextEdit::singleline(&mut self.target_age)
                                    .hint_text("目標の年齢"),
                            );
                            if ui.button("計算").clicked() {
                                self.run_calculate();
                            }
                        });

                        ui.horizontal(|ui| {
                            let mut verbose = self.verbose_logging;
                            ui.checkbox(&mut verbose, "詳細ログ出力");
                            if verbose != self.verbose_logging {
                                self.apply_verbose_logging(verbose);
                            }
                            if self.verbose_logging {
                                ui.label(
                                    RichText::new("（lifeweeks_log.txt に出力）")
                                        .small()
                                        .color(Color32::GRAY),
                                );
                            }
                        });
                    });

                    ui.separator();

                    if let Some(result) = &self.result {
                        ui.group(|ui| {
                            ui.label("結果");
                            ui.monospace(format!("経過週数: {}", result.passed_weeks()));
                            ui.monospace(format!("残り週数: {}", result.remaining_weeks()));
                        });
                    } else {
                        ui.label(
                            RichText::new("（計算するとここに結果が出ます）")
                                .italics()
                                .color(Color32::GRAY),
                        );
                    }

                    ui.separator();

                    ui.label("ログ");
                    for line in &self.log_lines {
                        ui.monospace(line);
                    }
                });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let Some(result) = &self.result {
                        ui.label("週グリッド（青 = 経過 / 灰 = 残り）");
                        ui.add_space(4.0);
                        let grid = WeekGrid::new(result);
                        helpers::draw_week_grid(ui, &grid);
                    } else {
                        ui.label(
                            RichText::new("年齢を入力して「計算」を押してください")
                                .italics()
                                .color(Color32::GRAY),
                        );
                    }
                });
        });
    }
}
