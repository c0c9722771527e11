use std::{
    fmt,
    hint::black_box,
    io::{self, Write},
};

use gbench_graphemes::Segmenter;

use crate::{
    clock::Clock,
    config::BenchConfig,
    corpus::{corpus, CorpusEntry},
    probe::{CacheProbe, ProbeOutcome},
    report::Reporter,
    runner::{BenchmarkResult, Runner},
};

pub const TITLE: &str = "Grapheme Segmentation Benchmark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Split,
    Count,
    Iterate,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Split, Operation::Count, Operation::Iterate];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Split => "split",
            Operation::Count => "count",
            Operation::Iterate => "iterate",
        }
    }

    /// Run the operation once, returns the number of clusters seen
    pub fn invoke<S: Segmenter>(&self, subject: &mut S, text: &str) -> usize {
        match self {
            Operation::Split => subject.split_graphemes(text).len(),
            Operation::Count => subject.count_graphemes(text),
            Operation::Iterate => {
                let mut n = 0;
                for grapheme in subject.iterate_graphemes(text) {
                    black_box(grapheme);
                    n += 1;
                }
                n
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One cell of the corpus x operation matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub entry: &'static CorpusEntry,
    pub operation: Operation,
    pub iterations: u32,
}

impl Job {
    pub fn label(&self) -> String {
        format!(
            "{}: {} ({} bytes)",
            self.entry.name,
            self.operation,
            self.entry.len()
        )
    }
}

/// Every benchmark to run, grouped by corpus entry in declared order
pub fn plan(config: &BenchConfig) -> Vec<Job> {
    corpus()
        .iter()
        .flat_map(|entry| {
            let iterations = config.iterations_for(entry.len());
            Operation::ALL.into_iter().map(move |operation| Job {
                entry,
                operation,
                iterations,
            })
        })
        .collect()
}

/// A runner paired with the reporter its results are written to
#[derive(Debug)]
pub struct Session<C: Clock, W: Write> {
    runner: Runner<C>,
    reporter: Reporter<W>,
}

impl<C: Clock, W: Write> Session<C, W> {
    pub fn new(runner: Runner<C>, reporter: Reporter<W>) -> Session<C, W> {
        Session { runner, reporter }
    }

    pub fn reporter(&mut self) -> &mut Reporter<W> {
        &mut self.reporter
    }

    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }

    /// Measure `op`, write its row and return the result
    pub fn measure<F, R>(
        &mut self,
        name: impl Into<String>,
        iterations: u32,
        op: F,
    ) -> io::Result<BenchmarkResult>
    where
        F: FnMut() -> R,
    {
        let result = self.runner.measure(name, iterations, op);
        self.reporter.row(&result)?;
        Ok(result)
    }

    /// Measure `op`, write its row and return the measured duration in
    /// milliseconds
    pub fn benchmark<F, R>(
        &mut self,
        name: impl Into<String>,
        iterations: u32,
        op: F,
    ) -> io::Result<f64>
    where
        F: FnMut() -> R,
    {
        self.measure(name, iterations, op)
            .map(|result| result.duration_ms)
    }
}

/// Run the whole benchmark against `subject`, writing the table to `out`.
///
/// The same subject serves every job and the cache probe. Its state is never
/// reset, so the probe sees a subject that has already processed the corpus.
pub fn run<S, C, W>(
    subject: &mut S,
    clock: C,
    out: W,
    config: &BenchConfig,
) -> io::Result<ProbeOutcome>
where
    S: Segmenter,
    C: Clock,
    W: Write,
{
    let runner = Runner::with_warmup(clock, config.warmup_iterations);
    let mut session = Session::new(runner, Reporter::new(out));

    session.reporter().banner(TITLE)?;
    session.reporter().header()?;

    let jobs = plan(config);
    log::info!("Running {} benchmarks", jobs.len());

    for job in &jobs {
        let text = job.entry.text;
        let operation = job.operation;
        session.benchmark(job.label(), job.iterations, || {
            operation.invoke(subject, text)
        })?;
    }
    session.reporter().separator()?;

    log::info!("Running cache probe");
    session.reporter().title("Cache Effectiveness Test")?;
    session.reporter().separator()?;
    let outcome = CacheProbe::from_config(config).run(&mut session, subject)?;

    session.reporter().speedup(outcome.speedup)?;
    session.reporter().optimizations(subject.optimizations())?;

    Ok(outcome)
}

#[cfg(test)]
mod test {
    use gbench_graphemes::{Graphemer, Uncached};

    use super::*;
    use crate::{clock::ManualClock, corpus::find};

    #[test]
    fn plan_matrix() {
        let jobs = plan(&BenchConfig::default());
        assert_eq!(21, jobs.len());

        let first: Vec<Operation> = jobs.iter().take(3).map(|j| j.operation).collect();
        assert_eq!(Operation::ALL.to_vec(), first);

        let names: Vec<&str> = jobs.iter().step_by(3).map(|j| j.entry.name).collect();
        let declared: Vec<&str> = corpus().iter().map(|e| e.name).collect();
        assert_eq!(declared, names);
    }

    #[test]
    fn plan_iteration_policy() {
        let jobs = plan(&BenchConfig::default());
        for job in &jobs {
            let expected = if job.entry.len() > 100 { 1_000 } else { 10_000 };
            assert_eq!(expected, job.iterations, "{}", job.label());
        }

        let ascii = jobs.iter().find(|j| j.entry.name == "ascii").unwrap();
        assert_eq!(1_000, ascii.iterations);
        let korean = jobs.iter().find(|j| j.entry.name == "korean").unwrap();
        assert_eq!(10_000, korean.iterations);
    }

    #[test]
    fn job_label() {
        let job = Job {
            entry: find("longEmoji").unwrap(),
            operation: Operation::Iterate,
            iterations: 1_000,
        };
        assert_eq!("longEmoji: iterate (4000 bytes)", job.label());
    }

    #[test]
    fn operations_agree() {
        let mut graphemer = Graphemer::new();
        let mut uncached = Uncached;
        for entry in corpus() {
            let expected = uncached.count_graphemes(entry.text);
            for op in Operation::ALL {
                assert_eq!(expected, op.invoke(&mut graphemer, entry.text));
                assert_eq!(expected, op.invoke(&mut uncached, entry.text));
            }
        }
    }

    #[test]
    fn session_benchmark_returns_duration() {
        let clock = ManualClock::new();
        let ticker = clock.clone();
        let mut session = Session::new(Runner::new(clock), Reporter::new(Vec::new()));

        let duration = session
            .benchmark("ticks", 2_000, || ticker.advance(500))
            .unwrap();
        assert_eq!(1.0, duration);

        let out = session.into_reporter().into_inner();
        assert_eq!(1, String::from_utf8(out).unwrap().lines().count());
    }

    #[test]
    fn panic_writes_no_row() {
        let mut session = Session::new(Runner::new(ManualClock::new()), Reporter::new(Vec::new()));
        let mut calls = 0;

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            session.benchmark("faulty", 10, || {
                calls += 1;
                if calls > 100 {
                    panic!("segmenter fault");
                }
            })
        }));

        assert!(outcome.is_err());
        assert!(session.reporter().get_ref().is_empty());
    }

    #[test]
    fn run_with_fake_clock() {
        let config = BenchConfig {
            warmup_iterations: 1,
            short_iterations: 3,
            long_iterations: 2,
            probe_iterations: 4,
            ..Default::default()
        };

        let mut subject = Graphemer::new();
        let mut out = Vec::new();
        let outcome = run(&mut subject, ManualClock::new(), &mut out, &config).unwrap();

        // Clock never moves
        assert_eq!(0.0, outcome.first.duration_ms);
        assert_eq!(1.0, outcome.speedup);
        assert_eq!(4, outcome.second.iterations);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(TITLE));
        assert_eq!(23, text.lines().filter(|l| l.ends_with(" ops/sec")).count());
        assert!(text.contains("Optimizations Applied:"));
    }

    #[test]
    fn uncached_has_no_footer() {
        let config = BenchConfig {
            warmup_iterations: 0,
            short_iterations: 1,
            long_iterations: 1,
            probe_iterations: 1,
            ..Default::default()
        };

        let mut out = Vec::new();
        run(&mut Uncached, ManualClock::new(), &mut out, &config).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Optimizations Applied:"));
    }
}
