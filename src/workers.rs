//! Resource-aware worker budget calculation.
//!
//! The framework never guesses a worker count: every entry point takes one
//! explicitly. This module is the helper callers use to pick that number:
//! percentage of available cores, an optional hard cap, and a clamp so a
//! workload never gets more workers than it has items.

use serde::{Deserialize, Serialize};

/// User-facing knobs for worker calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Hard upper limit on workers (0 = no limit).
    pub max_threads: usize,
    /// Percentage of CPU cores to use (1-100).
    pub thread_percentage: u8,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            max_threads: 0,
            thread_percentage: 75,
        }
    }
}

/// Calculate the maximum number of workers for this system and configuration.
///
/// Applies `thread_percentage` to the detected core count, then the
/// `max_threads` cap if one is set. Always returns at least 1.
pub fn optimal_workers(config: &WorkerConfig) -> usize {
    let available_cores = num_cpus::get();

    let by_percentage = std::cmp::max(
        1,
        (available_cores * config.thread_percentage as usize) / 100,
    );

    if config.max_threads > 0 {
        std::cmp::min(config.max_threads, by_percentage)
    } else {
        by_percentage
    }
}

/// Never run more workers than there are items to process.
pub fn clamp_to_workload(workers: usize, item_count: usize) -> usize {
    std::cmp::min(workers, item_count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_at_least_one_worker() {
        let config = WorkerConfig {
            max_threads: 0,
            thread_percentage: 1,
        };
        assert!(optimal_workers(&config) >= 1);
    }

    #[test]
    fn respects_hard_cap() {
        let config = WorkerConfig {
            max_threads: 2,
            thread_percentage: 100,
        };
        assert!(optimal_workers(&config) <= 2);
    }

    #[test]
    fn clamp_never_exceeds_items() {
        assert_eq!(clamp_to_workload(8, 3), 3);
        assert_eq!(clamp_to_workload(2, 100), 2);
        // An empty workload still gets one worker slot.
        assert_eq!(clamp_to_workload(8, 0), 1);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: WorkerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_threads, 0);
        assert_eq!(config.thread_percentage, 75);

        let config: WorkerConfig =
            serde_json::from_str(r#"{"max_threads": 4}"#).unwrap();
        assert_eq!(config.max_threads, 4);
        assert_eq!(config.thread_percentage, 75);
    }
}
