//! Group parsed samples into per-process series.

use std::path::Path;

use super::error::{LoadError, ParseError};
use super::log_loader::{extract_scheduler_lines, read_log_lines};
use super::log_parser::parse_sample;
use super::types::QueueLog;

/// Aggregate log lines into a [`QueueLog`].
///
/// Lines are processed in order. The first line that fails to parse aborts the
/// whole aggregation; no partial log is returned.
pub fn aggregate<S: AsRef<str>>(lines: &[S]) -> Result<QueueLog, ParseError> {
    let mut queue_log = QueueLog::new();
    for (i, line) in lines.iter().enumerate() {
        let sample = parse_sample(line.as_ref(), i + 1)?;
        queue_log.record(sample);
    }
    Ok(queue_log)
}

/// Read and aggregate the log at `path`.
///
/// With `console_capture` set, the file is treated as raw kernel console output and
/// only marked scheduler lines are aggregated.
pub fn load_queue_log(path: &Path, console_capture: bool) -> Result<QueueLog, LoadError> {
    let mut lines = read_log_lines(path)?;
    if console_capture {
        lines = extract_scheduler_lines(&lines);
    }

    let queue_log = aggregate(&lines)?;
    log::info!(
        "Loaded {} samples for {} processes from {}",
        queue_log.sample_count(),
        queue_log.iter().filter(|(_, series)| !series.is_empty()).count(),
        path.display()
    );
    Ok(queue_log)
}
