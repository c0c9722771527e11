//! Fixed width text rendering of benchmark results.

use std::io::{self, Write};

use crate::runner::BenchmarkResult;

/// Width of the test case column, longer names are cut
pub const NAME_WIDTH: usize = 40;

/// Width of separator and banner lines
pub const RULE_WIDTH: usize = 70;

pub fn format_row(result: &BenchmarkResult) -> String {
    format!(
        "{:<w$.w$} | {:>10.2}ms | {:>12.0} ops/sec",
        result.name,
        result.duration_ms,
        result.ops_per_sec,
        w = NAME_WIDTH,
    )
}

pub fn format_header() -> String {
    format!(
        "{:<w$} | {:>12} | {:>20}",
        "Test Case",
        "Time",
        "Operations/sec",
        w = NAME_WIDTH,
    )
}

pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

/// Writes the benchmark table.
///
/// Only formats what it is given, results are never changed.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Reporter<W> {
        Reporter { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule('='))?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{}", rule('='))
    }

    /// Column titles followed by a separator, once per section
    pub fn header(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", format_header())?;
        self.separator()
    }

    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", rule('-'))
    }

    pub fn title(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{title}:")
    }

    pub fn row(&mut self, result: &BenchmarkResult) -> io::Result<()> {
        writeln!(self.out, "{}", format_row(result))
    }

    pub fn speedup(&mut self, speedup: f64) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Cache speedup: {speedup:.2}x faster")
    }

    /// Numbered list of the optimizations the measured segmenter declares.
    /// Nothing is written if the list is empty.
    pub fn optimizations(&mut self, items: &[&str]) -> io::Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        writeln!(self.out)?;
        writeln!(self.out, "{}", rule('='))?;
        writeln!(self.out, "Optimizations Applied:")?;
        writeln!(self.out, "{}", rule('='))?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.out, "{}. {item}", i + 1)?;
        }
        writeln!(self.out, "{}", rule('='))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn result(name: &str, duration_ms: f64, iterations: u32) -> BenchmarkResult {
        BenchmarkResult::new(name, duration_ms, iterations)
    }

    #[test]
    fn row_layout() {
        let row = format_row(&result("ascii: split (121 bytes)", 12.5, 1000));
        assert_eq!(
            "ascii: split (121 bytes)                 |      12.50ms |        80000 ops/sec",
            row
        );
    }

    #[test]
    fn long_names_are_cut() {
        let name = "x".repeat(60);
        let row = format_row(&result(&name, 1.0, 10));
        let (cell, _) = row.split_once(" | ").unwrap();
        assert_eq!(NAME_WIDTH, cell.len());
    }

    #[test]
    fn header_lines_up_with_rows() {
        let header = format_header();
        let row = format_row(&result("korean: count (53 bytes)", 3.2, 10_000));
        assert_eq!(header.len(), row.len());
        assert_eq!(header.find('|'), row.find('|'));
        assert_eq!(header.rfind('|'), row.rfind('|'));
    }

    #[test]
    fn infinite_throughput() {
        let row = format_row(&result("instant", 0.0, 10));
        assert!(row.ends_with("inf ops/sec"));
    }

    #[test]
    fn row_does_not_touch_result() {
        let before = result("mixed: iterate (67 bytes)", 5.5, 10_000);
        let after = before.clone();
        let mut reporter = Reporter::new(Vec::new());
        reporter.row(&after).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn section_output() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.header().unwrap();
        reporter.row(&result("a", 1.0, 1)).unwrap();
        reporter.row(&result("b", 1.0, 1)).unwrap();
        reporter.separator().unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!("", lines[0]);
        assert_eq!(format_header(), lines[1]);
        assert_eq!(rule('-'), lines[2]);
        assert_eq!(rule('-'), lines[5]);
        assert_eq!(6, lines.len());
    }

    #[test]
    fn optimizations_list() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.optimizations(&[]).unwrap();
        assert!(reporter.get_ref().is_empty());

        reporter.optimizations(&["one", "two"]).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.contains("1. one\n2. two\n"));
    }
}
