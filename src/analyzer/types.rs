//! Type definitions specific to the analyzer module.

use std::collections::HashMap;

use super::error::ParseError;

/// Lowest process identifier tracked by the scheduler log.
pub const PID_BASE: i64 = 4;

/// Number of tracked processes (identifiers `PID_BASE..PID_BASE + PROCESS_COUNT`).
pub const PROCESS_COUNT: usize = 10;

/// Number of MLFQ queue levels; levels run from 0 (highest priority) to `QUEUE_COUNT - 1`.
pub const QUEUE_COUNT: usize = 5;

/// A process identifier validated to fall inside the tracked range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(u8);

impl ProcessId {
    /// Validate a raw identifier read from line `line` of the log.
    pub fn new(pid: i64, line: usize) -> Result<Self, ParseError> {
        if (PID_BASE..PID_BASE + PROCESS_COUNT as i64).contains(&pid) {
            Ok(Self((pid - PID_BASE) as u8))
        } else {
            Err(ParseError::PidOutOfRange { line, pid })
        }
    }

    /// Build the identifier for a zero-based process index.
    ///
    /// Returns `None` when `index >= PROCESS_COUNT`.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < PROCESS_COUNT).then_some(Self(index as u8))
    }

    /// Zero-based position of this process in a [`QueueLog`].
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The identifier as printed by the scheduler.
    pub fn pid(self) -> i64 {
        self.0 as i64 + PID_BASE
    }

    /// Iterate over every tracked process in index order.
    pub fn all() -> impl Iterator<Item = ProcessId> {
        (0..PROCESS_COUNT as u8).map(ProcessId)
    }
}

impl std::fmt::Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pid())
    }
}

/// One parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Tick label, kept verbatim. Never interpreted as a number.
    pub tick: String,
    pub pid: ProcessId,
    /// Queue level reported by the scheduler (`-1` outside MLFQ scheduling).
    pub queue: i64,
}

/// Insertion-ordered mapping from tick label to queue level for one process.
///
/// Re-inserting a known tick overwrites its value in place, so iteration order is
/// the order in which ticks were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSeries {
    entries: Vec<(String, i64)>,
    positions: HashMap<String, usize>,
}

impl ProcessSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `queue` for `tick`. Last write wins.
    pub fn insert(&mut self, tick: String, queue: i64) {
        match self.positions.get(&tick) {
            Some(&position) => self.entries[position].1 = queue,
            None => {
                self.positions.insert(tick.clone(), self.entries.len());
                self.entries.push((tick, queue));
            }
        }
    }

    pub fn get(&self, tick: &str) -> Option<i64> {
        self.positions.get(tick).map(|&position| self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tick labels in first-seen order.
    pub fn ticks(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(tick, _)| tick.as_str())
    }

    /// Queue levels in first-seen tick order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|(_, queue)| *queue)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(tick, queue)| (tick.as_str(), *queue))
    }
}

/// Aggregated samples: one [`ProcessSeries`] per tracked process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueLog {
    series: [ProcessSeries; PROCESS_COUNT],
}

impl QueueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample to its process series.
    pub fn record(&mut self, sample: Sample) {
        self.series[sample.pid.index()].insert(sample.tick, sample.queue);
    }

    pub fn series(&self, pid: ProcessId) -> &ProcessSeries {
        &self.series[pid.index()]
    }

    /// All series paired with their process, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (ProcessId, &ProcessSeries)> {
        ProcessId::all().zip(self.series.iter())
    }

    /// Total number of distinct (process, tick) entries.
    pub fn sample_count(&self) -> usize {
        self.series.iter().map(ProcessSeries::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(ProcessSeries::is_empty)
    }
}
