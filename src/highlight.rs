//! The highlight renderer: original text in, flagged segments out.
//!
//! The renderer re-walks the source text as alternating whitespace and word
//! chunks, carrying a word-ordinal counter that only advances on word chunks.
//! A word chunk is matched iff its ordinal is in the index set; whitespace is
//! always plain. Every character of the input appears in exactly one segment,
//! so concatenating the segments is the identity - the round trip the tests
//! lean on.
//!
//! Rendering is lazy: [`segments`] returns an iterator, [`render`] collects
//! it for callers that want the whole document at once.

use crate::types::{HighlightSegment, MatchedIndices};

/// Maximal same-kind chunks of a text: `(chunk, is_word)`.
///
/// Word chunks here are exactly the tokenizer's tokens, in the same order -
/// both split on `char::is_whitespace`. That shared definition is what keeps
/// the renderer's ordinal counter aligned with the match finder's ordinals.
struct Chunks<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Chunks<'t> {
    type Item = (&'t str, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let first = rest.chars().next()?;
        let is_word = !first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|&(_, c)| c.is_whitespace() == is_word)
            .map_or(rest.len(), |(idx, _)| idx);
        self.pos += end;
        Some((&rest[..end], is_word))
    }
}

/// Lazily yields the highlight segments of one document.
///
/// Out-of-range ordinals in the set are harmless; the counter simply never
/// reaches them.
pub struct Segments<'t, 'm> {
    chunks: Chunks<'t>,
    matched: &'m MatchedIndices,
    next_ordinal: usize,
}

impl<'t, 'm> Iterator for Segments<'t, 'm> {
    type Item = HighlightSegment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let (text, is_word) = self.chunks.next()?;
        let matched = if is_word {
            let ordinal = self.next_ordinal;
            self.next_ordinal += 1;
            self.matched.contains(ordinal)
        } else {
            false
        };
        Some(HighlightSegment { text, matched })
    }
}

/// Walk `text` as a lazy sequence of plain and matched segments.
pub fn segments<'t, 'm>(text: &'t str, matched: &'m MatchedIndices) -> Segments<'t, 'm> {
    Segments {
        chunks: Chunks { text, pos: 0 },
        matched,
        next_ordinal: 0,
    }
}

/// Collect the full segment sequence for one document.
pub fn render<'t>(text: &'t str, matched: &MatchedIndices) -> Vec<HighlightSegment<'t>> {
    segments(text, matched).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(segments: &[HighlightSegment<'_>]) -> String {
        segments.iter().map(|s| s.text).collect()
    }

    #[test]
    fn concatenation_reproduces_the_source() {
        let text = "  the quick\t\tbrown fox\n";
        let matched: MatchedIndices = [1, 2].into_iter().collect();
        let rendered = render(text, &matched);
        assert_eq!(reassemble(&rendered), text);
    }

    #[test]
    fn word_ordinals_drive_the_flags() {
        let matched: MatchedIndices = [0, 1].into_iter().collect();
        let rendered = render("one two three", &matched);
        // one | " " | two | " " | three
        assert_eq!(rendered.len(), 5);
        assert!(rendered[0].matched);
        assert!(!rendered[1].matched); // whitespace is always plain
        assert!(rendered[2].matched);
        assert!(!rendered[4].matched);
    }

    #[test]
    fn leading_whitespace_is_a_plain_segment() {
        let matched: MatchedIndices = [0].into_iter().collect();
        let rendered = render("  word", &matched);
        assert_eq!(rendered[0].text, "  ");
        assert!(!rendered[0].matched);
        assert_eq!(rendered[1].text, "word");
        assert!(rendered[1].matched);
    }

    #[test]
    fn empty_text_yields_no_segments() {
        let rendered = render("", &MatchedIndices::new());
        assert!(rendered.is_empty());
    }

    #[test]
    fn out_of_range_ordinals_are_ignored() {
        let matched: MatchedIndices = [7, 99].into_iter().collect();
        let rendered = render("just two", &matched);
        assert!(rendered.iter().all(|s| !s.matched));
        assert_eq!(reassemble(&rendered), "just two");
    }

    #[test]
    fn empty_index_set_renders_all_plain() {
        let rendered = render("a few plain words", &MatchedIndices::new());
        assert!(rendered.iter().all(|s| !s.matched));
    }

    #[test]
    fn rendering_is_lazy() {
        let matched = MatchedIndices::new();
        let mut iter = segments("alpha beta", &matched);
        assert_eq!(iter.next().map(|s| s.text), Some("alpha"));
        assert_eq!(iter.next().map(|s| s.text), Some(" "));
        assert_eq!(iter.next().map(|s| s.text), Some("beta"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn multibyte_whitespace_and_words_round_trip() {
        let text = "héllo\u{00A0}wörld\u{2003}ok";
        let matched: MatchedIndices = [1].into_iter().collect();
        let rendered = render(text, &matched);
        assert_eq!(reassemble(&rendered), text);
        let words: Vec<_> = rendered.iter().filter(|s| s.matched).collect();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "wörld");
    }
}
