//! Parse individual log lines into [`Sample`]s.
//!
//! Line format:
//!
//! ```text
//! <tick> <pid> <queue>
//! 212 4 0
//! ```
//!
//! Fields are separated by any amount of whitespace. The tick is an opaque label,
//! pid and queue are integers.

use super::error::ParseError;
use super::types::{ProcessId, Sample};

/// Parse one log line.
///
/// # Parameters
///
/// * `line` - The raw line, without terminator
/// * `line_number` - 1-based line number, reported in errors
///
/// # Returns
///
/// The parsed sample, or the first problem found with the line.
pub fn parse_sample(line: &str, line_number: usize) -> Result<Sample, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[tick, pid, queue] = &fields[..] else {
        return Err(ParseError::FieldCount {
            line: line_number,
            found: fields.len(),
        });
    };

    let pid = parse_integer(pid, "pid", line_number)?;
    let queue = parse_integer(queue, "queue", line_number)?;
    let pid = ProcessId::new(pid, line_number)?;

    Ok(Sample {
        tick: tick.to_string(),
        pid,
        queue,
    })
}

fn parse_integer(value: &str, field: &'static str, line_number: usize) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line: line_number,
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample() {
        let sample = parse_sample("212 4 0", 1).unwrap();
        assert_eq!(sample.tick, "212");
        assert_eq!(sample.pid.pid(), 4);
        assert_eq!(sample.pid.index(), 0);
        assert_eq!(sample.queue, 0);
    }

    #[test]
    fn test_parse_sample_extra_whitespace() {
        let sample = parse_sample("  7\t13   3 ", 1).unwrap();
        assert_eq!(sample.tick, "7");
        assert_eq!(sample.pid.index(), 9);
        assert_eq!(sample.queue, 3);
    }

    #[test]
    fn test_tick_is_opaque() {
        let sample = parse_sample("t-00a 6 2", 1).unwrap();
        assert_eq!(sample.tick, "t-00a");
    }

    #[test]
    fn test_negative_queue_accepted() {
        let sample = parse_sample("5 8 -1", 1).unwrap();
        assert_eq!(sample.queue, -1);
    }

    #[test]
    fn test_large_queue_accepted() {
        let sample = parse_sample("5 8 3000000000", 1).unwrap();
        assert_eq!(sample.queue, 3_000_000_000);
    }

    #[test]
    fn test_extreme_pid_out_of_range() {
        let err = parse_sample("0 -9223372036854775808 1", 2).unwrap_err();
        assert!(matches!(err, ParseError::PidOutOfRange { line: 2, pid: i64::MIN }));

        let err = parse_sample("0 9223372036854775807 1", 3).unwrap_err();
        assert!(matches!(err, ParseError::PidOutOfRange { line: 3, pid: i64::MAX }));
    }

    #[test]
    fn test_two_fields() {
        let err = parse_sample("0 4", 3).unwrap_err();
        assert!(matches!(err, ParseError::FieldCount { line: 3, found: 2 }));
    }

    #[test]
    fn test_four_fields_and_blank() {
        assert!(matches!(parse_sample("0 4 1 1", 1), Err(ParseError::FieldCount { found: 4, .. })));
        assert!(matches!(parse_sample("", 2), Err(ParseError::FieldCount { found: 0, .. })));
    }

    #[test]
    fn test_non_numeric_fields() {
        let err = parse_sample("0 four 1", 5).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { line: 5, field: "pid", .. }));

        let err = parse_sample("0 4 high", 6).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { line: 6, field: "queue", .. }));
    }

    #[test]
    fn test_pid_out_of_range() {
        assert!(matches!(parse_sample("0 3 1", 1), Err(ParseError::PidOutOfRange { pid: 3, .. })));
        assert!(matches!(parse_sample("0 14 1", 1), Err(ParseError::PidOutOfRange { pid: 14, .. })));
    }
}
