//! # Application State
//!
//! `QueuePlotApp` owns the aggregated log and everything the window needs between
//! frames. It implements `eframe::App` and delegates drawing to the panel modules.
//!
//! Loading is synchronous. A failed reload or open keeps the previous data on
//! screen and raises an alert instead of closing the window.

use eframe::egui;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{chart, summary_panel, top_panel};
use crate::analyzer::{ProcessSummary, QueueLog, load_queue_log, summarize};
use crate::config::PlotConfig;

/// Central application state.
pub struct QueuePlotApp {
    /// Optional alert message to display in a modal dialog.
    pub alert: Option<String>,
    /// Path of the log currently on screen.
    pub log_path: PathBuf,
    /// Whether logs are read as raw console capture.
    pub console_capture: bool,
    pub queue_log: QueueLog,
    /// Cached per-process statistics for `queue_log`.
    pub summaries: Vec<ProcessSummary>,
    pub show_summary: bool,
    /// Last directory used by the file picker.
    pub last_open_dir: Option<String>,
}

/// Settings persisted across application sessions.
#[derive(Default, Serialize, Deserialize)]
struct PersistedSettings {
    last_open_dir: Option<String>,
    show_summary: Option<bool>,
}

impl QueuePlotApp {
    /// Create the app around an already loaded log, applying persisted settings if available.
    pub fn new(config: PlotConfig, queue_log: QueueLog, storage: Option<&dyn eframe::Storage>) -> Self {
        let persisted: PersistedSettings = storage.and_then(|s| eframe::get_value(s, "app_settings")).unwrap_or_default();

        Self {
            alert: None,
            log_path: config.log_path,
            console_capture: config.console_capture,
            summaries: summarize(&queue_log),
            queue_log,
            show_summary: persisted.show_summary.unwrap_or(config.show_summary),
            last_open_dir: persisted.last_open_dir,
        }
    }

    /// Load `path` and make it the current log.
    ///
    /// On failure the current log is left untouched and the error is shown as an alert.
    pub fn load(&mut self, path: PathBuf) {
        match load_queue_log(&path, self.console_capture) {
            Ok(queue_log) => {
                self.summaries = summarize(&queue_log);
                self.queue_log = queue_log;
                self.log_path = path;
            }
            Err(e) => {
                let message = format!("{:#}", anyhow::Error::from(e));
                log::error!("{}", message);
                self.alert = Some(message);
            }
        }
    }

    /// Re-read the current log file, picking up anything appended since the last load.
    pub fn reload(&mut self) {
        self.load(self.log_path.clone());
    }

    /// Open a native file picker for selecting a log file.
    /// Returns the selected path or None if cancelled.
    pub fn open_log_file_picker(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().add_filter("Log files", &["log", "txt", "*"]);
        if let Some(dir) = &self.last_open_dir {
            dialog = dialog.set_directory(dir);
        }
        let file = dialog.pick_file()?;
        if let Some(parent) = file.parent() {
            self.last_open_dir = Some(parent.to_string_lossy().to_string());
        }
        Some(file)
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.alert.clone() else {
            return;
        };

        egui::Window::new("Alert")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(alert);
                    ui.add_space(20.0);

                    if ui.button("OK").clicked() {
                        self.alert = None;
                    }
                    ui.add_space(10.0);
                });
            });
    }
}

impl eframe::App for QueuePlotApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings {
            last_open_dir: self.last_open_dir.clone(),
            show_summary: Some(self.show_summary),
        };
        eframe::set_value(storage, "app_settings", &settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_alert(ctx);

        // Panels layout: top (controls), right (summary, optional), chart fills the rest
        top_panel::render(ctx, self);
        if self.show_summary {
            summary_panel::render(ctx, self);
        }
        chart::render(ctx, self);
    }
}
