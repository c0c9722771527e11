use unicode_segmentation::{Graphemes, UnicodeSegmentation};

use crate::Segmenter;

/// Calls straight into `unicode-segmentation` on every operation, keeps no
/// state.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uncached;

impl Segmenter for Uncached {
    type Iter<'a> = Graphemes<'a>;

    fn split_graphemes<'a>(&mut self, text: &'a str) -> Vec<&'a str> {
        text.graphemes(true).collect()
    }

    fn count_graphemes(&mut self, text: &str) -> usize {
        text.graphemes(true).count()
    }

    fn iterate_graphemes<'a>(&mut self, text: &'a str) -> Graphemes<'a> {
        text.graphemes(true)
    }
}
