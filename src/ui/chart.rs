//! # Queue Chart
//!
//! Central panel plotting one series per process: queue level against sample
//! position. Each series is a solid line with circle markers in the process color,
//! named by its pid so the legend can toggle it.

use eframe::egui;
use egui_plot::{GridMark, Legend, Line, LineStyle, MarkerShape, Plot, Points};

use super::{QueuePlotApp, color_for_process};
use crate::analyzer::{ProcessId, ProcessSeries, QUEUE_COUNT};

/// Plot coordinates for a series: x is the position in first-seen tick order, y the queue level.
pub fn series_points(series: &ProcessSeries) -> Vec<[f64; 2]> {
    series.values().enumerate().map(|(i, queue)| [i as f64, queue as f64]).collect()
}

/// Legend label for a process.
pub fn series_label(pid: ProcessId) -> String {
    pid.pid().to_string()
}

/// Fixed y-axis marks, one per queue level.
pub fn queue_grid_marks() -> Vec<GridMark> {
    (0..QUEUE_COUNT)
        .map(|level| GridMark {
            value: level as f64,
            step_size: 1.0,
        })
        .collect()
}

/// Render the chart into the central panel.
pub fn render(ctx: &egui::Context, state: &QueuePlotApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if state.queue_log.is_empty() {
            ui.label(egui::RichText::new("The log contains no samples.").color(ui.visuals().weak_text_color()));
        }

        Plot::new("queue_plot")
            .legend(Legend::default())
            .x_axis_label("ticks")
            .y_axis_label("queue")
            .y_grid_spacer(|_input| queue_grid_marks())
            .include_y(0.0)
            .include_y((QUEUE_COUNT - 1) as f64)
            .show(ui, |plot_ui| {
                for (pid, series) in state.queue_log.iter() {
                    let points = series_points(series);
                    let color = color_for_process(pid);
                    let label = series_label(pid);

                    plot_ui.line(
                        Line::new(label.clone(), points.clone())
                            .color(color)
                            .width(1.5)
                            .style(LineStyle::Solid),
                    );
                    plot_ui.points(
                        Points::new(label, points)
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(3.0)
                            .color(color),
                    );
                }
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::aggregate;

    #[test]
    fn test_series_points_follow_insertion_order() {
        let queue_log = aggregate(&["10 4 3", "2 4 1", "10 4 2", "1 4 0"]).unwrap();
        let series = queue_log.series(ProcessId::new(4, 0).unwrap());

        assert_eq!(series_points(series), vec![[0.0, 2.0], [1.0, 1.0], [2.0, 0.0]]);
    }

    #[test]
    fn test_series_points_empty() {
        assert!(series_points(&ProcessSeries::new()).is_empty());
    }

    #[test]
    fn test_series_label_is_pid() {
        let labels: Vec<String> = ProcessId::all().map(series_label).collect();
        assert_eq!(labels.first().map(String::as_str), Some("4"));
        assert_eq!(labels.last().map(String::as_str), Some("13"));
    }

    #[test]
    fn test_queue_grid_marks() {
        let values: Vec<f64> = queue_grid_marks().iter().map(|mark| mark.value).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
