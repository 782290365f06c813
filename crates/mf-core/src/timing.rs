//! Lightweight per-stage timing.
//!
//! Measurements are always taken (they are a handful of `Instant` reads per
//! solve); whether they are shown is up to the caller.

use std::time::Instant;

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Stop the timer and return elapsed time in seconds.
    pub fn stop(self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Wall-clock breakdown of one solve request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveTiming {
    pub transform_time_s: f64,
    pub solve_time_s: f64,
    pub attribute_time_s: f64,
}

impl SolveTiming {
    pub fn total_s(&self) -> f64 {
        self.transform_time_s + self.solve_time_s + self.attribute_time_s
    }

    /// Render a short multi-line summary.
    pub fn summary(&self) -> String {
        format!(
            "Transform time:   {:.6}s\nSolve time:       {:.6}s\nAttribute time:   {:.6}s\nTotal:            {:.6}s",
            self.transform_time_s,
            self.solve_time_s,
            self.attribute_time_s,
            self.total_s()
        )
    }
}
