// UI module for the MLFQ queue plot
//
// This module organizes the window into separate components:
// - `top_panel`: Log source, sample count, reload/open controls
// - `summary_panel`: Per-process statistics table
// - `chart`: Central queue level chart
// - `app_state`: Application state and main update loop

pub mod app_state;
pub mod chart;
pub mod summary_panel;
pub mod top_panel;

use egui::Color32;

use crate::analyzer::ProcessId;

pub use app_state::QueuePlotApp;

/// Series color for a process, shared by the chart and the summary table.
///
/// # Process Color Mapping
///
/// Index 0-9 (pid 4-13) follow the usual ten-color categorical palette:
/// blue, orange, green, red, purple, brown, pink, gray, olive, cyan.
pub fn color_for_process(pid: ProcessId) -> Color32 {
    match pid.index() {
        0 => Color32::from_rgb(31, 119, 180),  // Blue
        1 => Color32::from_rgb(255, 127, 14),  // Orange
        2 => Color32::from_rgb(44, 160, 44),   // Green
        3 => Color32::from_rgb(214, 39, 40),   // Red
        4 => Color32::from_rgb(148, 103, 189), // Purple
        5 => Color32::from_rgb(140, 86, 75),   // Brown
        6 => Color32::from_rgb(227, 119, 194), // Pink
        7 => Color32::from_rgb(127, 127, 127), // Gray
        8 => Color32::from_rgb(188, 189, 34),  // Olive
        _ => Color32::from_rgb(23, 190, 207),  // Cyan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_process_colors_are_distinct() {
        let colors: HashSet<Color32> = ProcessId::all().map(color_for_process).collect();
        assert_eq!(colors.len(), ProcessId::all().count());
    }
}
