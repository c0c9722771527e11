use crate::runner::{DEFAULT_ITERATIONS, WARMUP_ITERATIONS};

/// Parameters of a benchmark run.
///
/// There is no file or environment source, the defaults are the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub warmup_iterations: u32,
    /// Iterations for inputs up to `long_input_threshold` bytes
    pub short_iterations: u32,
    /// Iterations for inputs longer than `long_input_threshold` bytes
    pub long_iterations: u32,
    pub long_input_threshold: usize,
    pub probe_iterations: u32,
    pub probe_text: &'static str,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            warmup_iterations: WARMUP_ITERATIONS,
            short_iterations: DEFAULT_ITERATIONS,
            long_iterations: 1_000,
            long_input_threshold: 100,
            probe_iterations: DEFAULT_ITERATIONS,
            probe_text: "Hello 👋 World 🌍!",
        }
    }
}

impl BenchConfig {
    /// Iteration count for an input of `len` code units
    pub fn iterations_for(&self, len: usize) -> u32 {
        if len > self.long_input_threshold {
            self.long_iterations
        } else {
            self.short_iterations
        }
    }
}
