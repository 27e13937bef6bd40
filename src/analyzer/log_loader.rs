//! File I/O for scheduler logs.
//!
//! Two input shapes are supported:
//! - A pre-filtered sample log: every line is `<tick> <pid> <queue>`
//! - Raw kernel console capture: sample lines are printed as `<tick> <pid> <queue>::=`
//!   and interleaved with unrelated console output

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::LoadError;

/// Buffer size for reading log files (8KB).
const BUFFER_SIZE: usize = 8 * 1024;

/// Suffix the scheduler appends to every queue sample it prints on the console.
pub const SAMPLE_MARKER: &str = "::=";

/// Read every line of the log file at `path`, in file order.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Blank lines are kept so that
/// line numbers in parse errors match the file.
///
/// # Returns
///
/// `Ok(lines)` if the file could be read, `Err(LoadError::Io)` otherwise.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let io_error = |source| LoadError::Io { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(io_error)?;
    let reader = BufReader::with_capacity(BUFFER_SIZE, file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line.map_err(io_error)?);
    }

    log::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Pull scheduler samples out of raw console output.
///
/// Keeps only lines containing [`SAMPLE_MARKER`] and cuts each one at the marker.
/// Everything else (boot messages, shell output, scheduler debug prints) is dropped.
pub fn extract_scheduler_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let extracted: Vec<String> = lines
        .iter()
        .filter_map(|line| {
            let line = line.as_ref();
            line.find(SAMPLE_MARKER).map(|end| line[..end].trim().to_string())
        })
        .collect();

    let skipped = lines.len() - extracted.len();
    if skipped > 0 {
        log::debug!("Skipped {} console lines without sample marker", skipped);
    }
    extracted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_log(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mlfq-queue-plot-loader-{}-{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_log_lines_in_order() {
        let path = temp_log("order", "0 4 1\r\n1 4 2\n\n0 5 0\n");
        let lines = read_log_lines(&path).unwrap();
        assert_eq!(lines, vec!["0 4 1", "1 4 2", "", "0 5 0"]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("mlfq-queue-plot-loader-does-not-exist");
        let err = read_log_lines(&path).unwrap_err();
        match err {
            LoadError::Io { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_scheduler_lines() {
        let console = [
            "xv6...",
            "cpu0: starting 0",
            "212 4 0::=",
            "Proc: task (4) queue inc: 1",
            "  215 4 1::=",
            "proc: task(5) aged to q: 0",
            "218 5 0::=",
            "$ ",
        ];
        let lines = extract_scheduler_lines(&console);
        assert_eq!(lines, vec!["212 4 0", "215 4 1", "218 5 0"]);
    }

    #[test]
    fn test_extract_without_markers() {
        let lines = extract_scheduler_lines(&["0 4 1", "1 4 2"]);
        assert!(lines.is_empty());
    }
}
