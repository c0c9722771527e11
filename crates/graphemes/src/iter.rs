use std::rc::Rc;

use unicode_segmentation::Graphemes;

/// Iterator over the grapheme clusters of a text.
///
/// Which variant is used depends on what [`crate::Graphemer`] knew about the
/// text when the iterator was created.
#[derive(Clone)]
pub enum GraphemeIter<'a> {
    /// Text is pure ASCII, every byte is a cluster except CR LF
    Ascii { text: &'a str, pos: usize },
    /// Boundaries were found in the break cache
    Cached {
        text: &'a str,
        breaks: Rc<[usize]>,
        pos: usize,
    },
    /// Nothing known, segment while iterating
    Lazy(Graphemes<'a>),
}

impl<'a> GraphemeIter<'a> {
    pub(crate) fn ascii(text: &'a str) -> GraphemeIter<'a> {
        debug_assert!(text.is_ascii());
        GraphemeIter::Ascii { text, pos: 0 }
    }

    pub(crate) fn cached(text: &'a str, breaks: Rc<[usize]>) -> GraphemeIter<'a> {
        debug_assert_eq!(breaks.last().copied(), Some(text.len()));
        GraphemeIter::Cached {
            text,
            breaks,
            pos: 0,
        }
    }
}

impl<'a> Iterator for GraphemeIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        match self {
            GraphemeIter::Ascii { text, pos } => {
                let text: &'a str = *text;
                let start = *pos;
                let end = ascii_cluster_end(text.as_bytes(), start)?;
                *pos = end;
                Some(&text[start..end])
            }
            GraphemeIter::Cached { text, breaks, pos } => {
                let text: &'a str = *text;
                let start = *breaks.get(*pos)?;
                let end = *breaks.get(*pos + 1)?;
                *pos += 1;
                Some(&text[start..end])
            }
            GraphemeIter::Lazy(graphemes) => graphemes.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            GraphemeIter::Ascii { text, pos } => {
                let rest = text.len() - *pos;
                (rest.div_ceil(2), Some(rest))
            }
            GraphemeIter::Cached { breaks, pos, .. } => {
                let rest = breaks.len().saturating_sub(*pos + 1);
                (rest, Some(rest))
            }
            GraphemeIter::Lazy(graphemes) => graphemes.size_hint(),
        }
    }
}

/// End of the ASCII cluster starting at `start`, None if at the end
#[inline]
pub(crate) fn ascii_cluster_end(bytes: &[u8], start: usize) -> Option<usize> {
    let first = *bytes.get(start)?;
    if first == b'\r' && bytes.get(start + 1) == Some(&b'\n') {
        Some(start + 2)
    } else {
        Some(start + 1)
    }
}

/// Number of clusters in an ASCII text
#[inline]
pub(crate) fn ascii_count(bytes: &[u8]) -> usize {
    let crlf = bytes.windows(2).filter(|w| w[0] == b'\r' && w[1] == b'\n').count();
    bytes.len() - crlf
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ascii_crlf_is_one_cluster() {
        let iter = GraphemeIter::ascii("a\r\nb\n\r");
        let clusters: Vec<&str> = iter.collect();
        assert_eq!(vec!["a", "\r\n", "b", "\n", "\r"], clusters);
        assert_eq!(5, ascii_count(b"a\r\nb\n\r"));
    }

    #[test]
    fn ascii_consecutive_crlf() {
        assert_eq!(2, ascii_count(b"\r\n\r\n"));
        assert_eq!(2, GraphemeIter::ascii("\r\n\r\n").count());
    }

    #[test]
    fn cached_uses_breaks() {
        let text = "ae\u{301}b";
        let breaks: Rc<[usize]> = Rc::from(vec![0, 1, 4, 5]);
        let iter = GraphemeIter::cached(text, breaks);
        assert_eq!((3, Some(3)), iter.size_hint());
        let clusters: Vec<&str> = iter.collect();
        assert_eq!(vec!["a", "e\u{301}", "b"], clusters);
    }

    #[test]
    fn clones_are_independent() {
        let mut iter = GraphemeIter::ascii("abc");
        iter.next();
        let copy = iter.clone();
        assert_eq!(2, iter.count());
        assert_eq!(2, copy.count());
    }
}
