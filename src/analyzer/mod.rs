//! Analyzer module for scheduler queue logs.
//!
//! Provides functionality for:
//! - Reading sample logs and raw console captures
//! - Parsing `<tick> <pid> <queue>` lines
//! - Aggregating samples into per-process, insertion-ordered series
//! - Summarizing time spent per queue level

pub mod aggregate;
pub mod error;
pub mod log_loader;
pub mod log_parser;
pub mod summary;
pub mod types;

pub use aggregate::{aggregate, load_queue_log};
pub use summary::{ProcessSummary, summarize};
pub use types::{ProcessId, ProcessSeries, QUEUE_COUNT, QueueLog};
