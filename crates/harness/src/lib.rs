//! Throughput benchmarks for grapheme segmentation.
//!
//! A fixed corpus is run through split, count and iterate of a single
//! [`Segmenter`](gbench_graphemes::Segmenter). Each measurement warms the
//! operation up, times a fixed number of calls and reports one table row.
//! Finally the same call is measured twice in a row to see whether the
//! segmenter gets faster on repeated input.

#[macro_use]
extern crate lazy_static;

pub mod clock;
mod config;
pub mod corpus;
mod orchestrator;
mod probe;
pub mod report;
mod runner;

pub use config::BenchConfig;
pub use orchestrator::{plan, run, Job, Operation, Session, TITLE};
pub use probe::{speedup, CacheProbe, ProbeOutcome, FIRST_RUN, SECOND_RUN};
pub use runner::{ops_per_sec, BenchmarkResult, Runner, DEFAULT_ITERATIONS, WARMUP_ITERATIONS};
