//! # Summary Panel
//!
//! Right side panel with one row per tracked process: sample count, last and
//! highest queue level, and how many samples were spent in each queue level.
//! Rows use the same color as the process' chart series.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use super::{QueuePlotApp, color_for_process};
use crate::analyzer::QUEUE_COUNT;

fn level_text(level: Option<i64>) -> String {
    level.map_or_else(|| "-".to_string(), |level| level.to_string())
}

/// Render the summary panel.
pub fn render(ctx: &egui::Context, state: &QueuePlotApp) {
    egui::SidePanel::right("summary_right").resizable(true).default_width(420.0).show(ctx, |ui| {
        ui.heading("Processes");
        ui.separator();

        let row_height = ui.text_style_height(&egui::TextStyle::Body) * 1.3;
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(40.0).at_least(30.0)) // PID
            .column(Column::initial(60.0).at_least(40.0)) // Samples
            .column(Column::initial(40.0).at_least(30.0)) // Last
            .column(Column::initial(40.0).at_least(30.0)); // Max
        for _ in 0..QUEUE_COUNT {
            table = table.column(Column::initial(40.0).at_least(30.0));
        }

        table
            .header(row_height, |mut header| {
                header.col(|ui| {
                    ui.strong("PID");
                });
                header.col(|ui| {
                    ui.strong("Samples");
                });
                header.col(|ui| {
                    ui.strong("Last");
                });
                header.col(|ui| {
                    ui.strong("Max");
                });
                for level in 0..QUEUE_COUNT {
                    header.col(|ui| {
                        ui.strong(format!("q{level}"));
                    });
                }
            })
            .body(|mut body| {
                for summary in &state.summaries {
                    body.row(row_height, |mut row| {
                        row.col(|ui| {
                            ui.colored_label(color_for_process(summary.pid), summary.pid.to_string());
                        });
                        row.col(|ui| {
                            ui.label(summary.samples.to_string());
                        });
                        row.col(|ui| {
                            ui.label(level_text(summary.last_queue));
                        });
                        row.col(|ui| {
                            ui.label(level_text(summary.max_queue));
                        });
                        for ticks in summary.ticks_in_queue {
                            row.col(|ui| {
                                ui.label(ticks.to_string());
                            });
                        }
                    });
                }
            });
    });
}
