//! Performance monitoring utilities.
//!
//! Figures are rebuilt on every control change with no caching, so the only
//! instrumentation needed is a timer around each recompute that reports
//! through `tracing` when it runs longer than expected.
//!
//! ```ignore
//! use avocado_board::perf::ScopedTimer;
//!
//! fn recompute() {
//!     let _timer = ScopedTimer::new("bar-chart", 50.0);
//!     // ... work ...
//! }
//! ```

use std::time::Instant;
use tracing::{trace, warn};

/// A scoped timer that logs duration on drop.
///
/// Durations above the threshold are logged at `warn`, everything else at
/// `trace`.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow recompute"
            );
        } else {
            trace!(operation = self.name, elapsed_ms, "Recomputed");
        }
    }
}

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}
