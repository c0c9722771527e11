use std::hint::black_box;

use crate::clock::Clock;

/// Measured iterations when the caller has no reason to pick another count
pub const DEFAULT_ITERATIONS: u32 = 10_000;

/// Calls made before the measurement starts, their timing is discarded
pub const WARMUP_ITERATIONS: u32 = 100;

/// Outcome of a single measurement
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub name: String,
    pub duration_ms: f64,
    pub ops_per_sec: f64,
    pub iterations: u32,
}

impl BenchmarkResult {
    pub fn new(name: impl Into<String>, duration_ms: f64, iterations: u32) -> BenchmarkResult {
        BenchmarkResult {
            name: name.into(),
            duration_ms,
            ops_per_sec: ops_per_sec(iterations, duration_ms),
            iterations,
        }
    }
}

/// Throughput of `iterations` calls that took `duration_ms`.
///
/// Zero iterations yield `0.0`. A zero duration with at least one iteration
/// yields `f64::INFINITY`.
pub fn ops_per_sec(iterations: u32, duration_ms: f64) -> f64 {
    if iterations == 0 {
        return 0.0;
    }

    if duration_ms == 0.0 {
        return f64::INFINITY;
    }

    (iterations as f64 / duration_ms) * 1000.0
}

/// Times repeated calls of an operation.
///
/// The runner does not guard the operation in any way. A panic inside it
/// unwinds through `measure` and nothing is recorded.
#[derive(Debug)]
pub struct Runner<C: Clock> {
    clock: C,
    warmup: u32,
}

impl<C: Clock> Runner<C> {
    pub fn new(clock: C) -> Runner<C> {
        Runner::with_warmup(clock, WARMUP_ITERATIONS)
    }

    pub fn with_warmup(clock: C, warmup: u32) -> Runner<C> {
        Runner { clock, warmup }
    }

    pub fn warmup(&self) -> u32 {
        self.warmup
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Call `op` `warmup + iterations` times, timing only the last
    /// `iterations` calls.
    pub fn measure<F, R>(
        &mut self,
        name: impl Into<String>,
        iterations: u32,
        mut op: F,
    ) -> BenchmarkResult
    where
        F: FnMut() -> R,
    {
        for _ in 0..self.warmup {
            black_box(op());
        }

        let start = self.clock.now_ns();
        for _ in 0..iterations {
            black_box(op());
        }
        let end = self.clock.now_ns();

        let duration_ms = end.saturating_sub(start) as f64 / 1e6;
        let result = BenchmarkResult::new(name, duration_ms, iterations);
        log::debug!(
            "{}: {} iterations in {:.3}ms",
            result.name,
            iterations,
            result.duration_ms
        );
        result
    }
}
