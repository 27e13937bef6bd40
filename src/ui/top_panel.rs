//! # Top Panel - Log Source and Controls
//!
//! Shows which log is on screen and how many samples it holds, with buttons to
//! reload it, open another one, and toggle the summary panel.

use eframe::egui;

use super::QueuePlotApp;

/// Render the top panel.
pub fn render(ctx: &egui::Context, state: &mut QueuePlotApp) {
    egui::TopBottomPanel::top("top_controls").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Log:");
            ui.label(egui::RichText::new(state.log_path.display().to_string()).monospace().strong());
            ui.separator();
            ui.label("Samples:");
            ui.label(egui::RichText::new(state.queue_log.sample_count().to_string()).strong());
            if state.console_capture {
                ui.separator();
                ui.label(egui::RichText::new("console capture").italics());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut state.show_summary, "Summary");
                if ui.button("Open log…").clicked() {
                    if let Some(path) = state.open_log_file_picker() {
                        log::debug!("Opening {}", path.display());
                        state.load(path);
                    }
                }
                if ui.button("Reload").clicked() {
                    log::debug!("Reload clicked");
                    state.reload();
                }
            });
        });
        ui.add_space(4.0);
    });
}
