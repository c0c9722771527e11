mod logging;

use std::io;

use gbench_graphemes::Graphemer;
use gbench_harness::{clock::MonotonicClock, BenchConfig};

fn main() -> anyhow::Result<()> {
    logging::setup();

    let config = BenchConfig::default();
    // One segmenter for the whole run, its cache is never reset
    let mut graphemer = Graphemer::new();

    let stdout = io::stdout();
    let outcome = gbench_harness::run(
        &mut graphemer,
        MonotonicClock::new(),
        stdout.lock(),
        &config,
    )?;

    let stats = graphemer.stats();
    log::info!(
        "Cache: {} hits, {} misses ({:.1}% hit ratio), {} evictions, {} ASCII fast path calls",
        stats.hits,
        stats.misses,
        stats.hit_ratio() * 100.0,
        stats.evictions,
        stats.ascii_fast_path,
    );
    log::info!("Cache probe speedup {:.2}", outcome.speedup);

    Ok(())
}
