use std::io::{self, Write};

use gbench_graphemes::Segmenter;

use crate::{clock::Clock, config::BenchConfig, orchestrator::Session, runner::BenchmarkResult};

pub const FIRST_RUN: &str = "First run";
pub const SECOND_RUN: &str = "Second run";

/// Ratio of the first run duration to the second.
///
/// A zero second duration yields `f64::INFINITY`, or `1.0` if the first one
/// is zero as well.
pub fn speedup(first_ms: f64, second_ms: f64) -> f64 {
    if second_ms == 0.0 {
        if first_ms == 0.0 {
            return 1.0;
        }
        return f64::INFINITY;
    }

    first_ms / second_ms
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub first: BenchmarkResult,
    pub second: BenchmarkResult,
    pub speedup: f64,
}

impl ProbeOutcome {
    pub fn new(first: BenchmarkResult, second: BenchmarkResult) -> ProbeOutcome {
        let speedup = speedup(first.duration_ms, second.duration_ms);
        ProbeOutcome {
            first,
            second,
            speedup,
        }
    }
}

/// Measures the same split twice in a row to expose reuse inside the
/// segmenter.
///
/// Segmenter state is left as is before and between the runs. In a full run
/// the segmenter has already seen the whole corpus, so the first run is not a
/// cold start, it is only the earlier of two identical measurements.
#[derive(Debug, Clone, Copy)]
pub struct CacheProbe<'t> {
    text: &'t str,
    iterations: u32,
}

impl<'t> CacheProbe<'t> {
    pub fn new(text: &'t str, iterations: u32) -> CacheProbe<'t> {
        CacheProbe { text, iterations }
    }

    pub fn from_config(config: &BenchConfig) -> CacheProbe<'static> {
        CacheProbe::new(config.probe_text, config.probe_iterations)
    }

    pub fn run<S, C, W>(
        &self,
        session: &mut Session<C, W>,
        subject: &mut S,
    ) -> io::Result<ProbeOutcome>
    where
        S: Segmenter,
        C: Clock,
        W: Write,
    {
        let text = self.text;
        let first = session.measure(FIRST_RUN, self.iterations, || {
            subject.split_graphemes(text)
        })?;
        let second = session.measure(SECOND_RUN, self.iterations, || {
            subject.split_graphemes(text)
        })?;

        log::info!(
            "Cache probe: {:.3}ms then {:.3}ms",
            first.duration_ms,
            second.duration_ms
        );
        Ok(ProbeOutcome::new(first, second))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn speedup_ratio() {
        assert_eq!(2.0, speedup(10.0, 5.0));
        assert_eq!(0.5, speedup(5.0, 10.0));
        assert_eq!(f64::INFINITY, speedup(1.0, 0.0));
        assert_eq!(1.0, speedup(0.0, 0.0));
        assert_eq!(0.0, speedup(0.0, 3.0));
    }

    #[test]
    fn outcome_uses_reported_durations() {
        let first = BenchmarkResult::new(FIRST_RUN, 12.0, 10_000);
        let second = BenchmarkResult::new(SECOND_RUN, 8.0, 10_000);
        let outcome = ProbeOutcome::new(first, second);
        assert_eq!(1.5, outcome.speedup);
    }

    #[test]
    fn from_config() {
        let config = BenchConfig::default();
        let probe = CacheProbe::from_config(&config);
        assert_eq!(config.probe_text, probe.text);
        assert_eq!(10_000, probe.iterations);
    }
}
