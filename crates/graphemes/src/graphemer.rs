use std::{iter, rc::Rc};

use gbench_utils::lru::Lru;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    iter::{ascii_count, GraphemeIter},
    Segmenter,
};

const OPTIMIZATIONS: &[&str] = &[
    "Break position caching for repeated strings (LRU)",
    "Fast path for ASCII text",
    "Iteration over cached break positions",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphemerOptions {
    /// How many texts to keep break positions for
    pub capacity: usize,
    /// Texts longer than this in bytes are never cached
    pub max_cached_len: usize,
}

impl Default for GraphemerOptions {
    fn default() -> Self {
        GraphemerOptions {
            capacity: 256,
            max_cached_len: 16 * 1024,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub ascii_fast_path: u64,
    pub evictions: u64,
}

impl CacheStats {
    /// Share of break cache lookups that were hits, 0 if no lookups were made
    pub fn hit_ratio(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            return 0.0;
        }

        self.hits as f64 / lookups as f64
    }
}

/// Segmenter that remembers the cluster boundaries of texts it has seen.
///
/// The cache persists for the lifetime of the value. Nothing resets it
/// implicitly, so repeated calls on the same text are answered from the
/// cache until the entry is evicted.
#[derive(Debug)]
pub struct Graphemer {
    options: GraphemerOptions,
    breaks: Lru<Box<str>, Rc<[usize]>>,
    stats: CacheStats,
}

impl Graphemer {
    pub fn new() -> Graphemer {
        Graphemer::with_options(GraphemerOptions::default())
    }

    pub fn with_options(options: GraphemerOptions) -> Graphemer {
        Graphemer {
            options,
            breaks: Lru::new(options.capacity),
            stats: CacheStats::default(),
        }
    }

    pub fn options(&self) -> &GraphemerOptions {
        &self.options
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn cached_texts(&self) -> usize {
        self.breaks.len()
    }

    /// Drop all cached break positions. Statistics are kept.
    pub fn clear(&mut self) {
        self.breaks.clear();
    }

    /// Break positions of text, including 0 and text.len()
    fn breaks(&mut self, text: &str) -> Rc<[usize]> {
        if let Some(breaks) = self.breaks.get(text) {
            let breaks = breaks.clone();
            self.stats.hits += 1;
            return breaks;
        }

        self.stats.misses += 1;
        let breaks = find_breaks(text);

        if text.len() > self.options.max_cached_len {
            log::trace!("Not caching breaks of a {} byte text", text.len());
            return breaks;
        }

        if self.breaks.insert(text.into(), breaks.clone()).is_some() {
            self.stats.evictions += 1;
        }

        breaks
    }
}

impl Default for Graphemer {
    fn default() -> Self {
        Graphemer::new()
    }
}

impl Segmenter for Graphemer {
    type Iter<'a> = GraphemeIter<'a>;

    fn split_graphemes<'a>(&mut self, text: &'a str) -> Vec<&'a str> {
        if text.is_ascii() {
            self.stats.ascii_fast_path += 1;
            return GraphemeIter::ascii(text).collect();
        }

        let breaks = self.breaks(text);
        breaks.windows(2).map(|w| &text[w[0]..w[1]]).collect()
    }

    fn count_graphemes(&mut self, text: &str) -> usize {
        if text.is_ascii() {
            self.stats.ascii_fast_path += 1;
            return ascii_count(text.as_bytes());
        }

        self.breaks(text).len() - 1
    }

    fn iterate_graphemes<'a>(&mut self, text: &'a str) -> GraphemeIter<'a> {
        if text.is_ascii() {
            self.stats.ascii_fast_path += 1;
            return GraphemeIter::ascii(text);
        }

        // Do not compute breaks eagerly here, a miss stays lazy
        match self.breaks.get(text) {
            Some(breaks) => {
                let breaks = breaks.clone();
                self.stats.hits += 1;
                GraphemeIter::cached(text, breaks)
            }
            None => {
                self.stats.misses += 1;
                GraphemeIter::Lazy(text.graphemes(true))
            }
        }
    }

    fn optimizations(&self) -> &[&'static str] {
        OPTIMIZATIONS
    }
}

fn find_breaks(text: &str) -> Rc<[usize]> {
    text.grapheme_indices(true)
        .map(|(pos, _)| pos)
        .chain(iter::once(text.len()))
        .collect()
}
