//! Per-process statistics derived from an aggregated log.

use super::types::{ProcessId, QUEUE_COUNT, QueueLog};

/// Summary of one process' queue history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub pid: ProcessId,
    /// Number of distinct ticks recorded.
    pub samples: usize,
    /// Queue level at the last first-seen tick.
    pub last_queue: Option<i64>,
    /// Lowest-priority (highest numbered) level reached.
    pub max_queue: Option<i64>,
    /// Samples observed at each queue level `0..QUEUE_COUNT`.
    pub ticks_in_queue: [usize; QUEUE_COUNT],
}

/// Summarize every tracked process, in pid order.
pub fn summarize(queue_log: &QueueLog) -> Vec<ProcessSummary> {
    queue_log
        .iter()
        .map(|(pid, series)| {
            let mut ticks_in_queue = [0; QUEUE_COUNT];
            for queue in series.values() {
                if let Some(count) = usize::try_from(queue).ok().and_then(|level| ticks_in_queue.get_mut(level)) {
                    *count += 1;
                }
            }

            ProcessSummary {
                pid,
                samples: series.len(),
                last_queue: series.values().last(),
                max_queue: series.values().max(),
                ticks_in_queue,
            }
        })
        .collect()
}
