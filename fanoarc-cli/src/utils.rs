//! Utility functions for the CLI.

use std::time::{Duration, Instant};

/// Run `f` and return its result together with the elapsed wall time.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Format an execution time line.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Execution time: {}s", elapsed.as_secs_f64())
}

/// Archive size as a percentage of the original, `-` for empty input.
pub fn format_ratio(original: u64, archive: u64) -> String {
    if original == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", archive as f64 / original as f64 * 100.0)
}
