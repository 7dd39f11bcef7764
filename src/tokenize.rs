//! Word tokenization.
//!
//! Splitting is on runs of Unicode whitespace and nothing else. Punctuation
//! stays glued to its word, so "fox." only ever matches "fox." - this is the
//! documented matching behavior, not an accident. Case is folded into a
//! separate field so the original casing survives for rendering.

use crate::types::Token;

/// Split a document into its ordered word tokens.
///
/// The ordinal of each token is its index in the returned vector. Byte
/// offsets point into `text`, so the orchestrator can slice matched phrases
/// back out with their interior whitespace intact.
///
/// Empty and all-whitespace inputs yield an empty vector; there are no error
/// conditions.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        let mut end = start + c.len_utf8();
        chars.next();
        while let Some(&(idx, next)) = chars.peek() {
            if next.is_whitespace() {
                break;
            }
            end = idx + next.len_utf8();
            chars.next();
        }
        let word = &text[start..end];
        tokens.push(Token {
            text: word,
            offset: start,
            folded: word.to_lowercase(),
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(words("the quick  brown\tfox\n jumps"), vec!["the", "quick", "brown", "fox", "jumps"]);
    }

    #[test]
    fn empty_and_blank_inputs_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n  ").is_empty());
    }

    #[test]
    fn punctuation_stays_attached() {
        assert_eq!(words("Hello, world!"), vec!["Hello,", "world!"]);
    }

    #[test]
    fn offsets_slice_back_to_the_source() {
        let text = "  The quick\tbrown ";
        for token in tokenize(text) {
            assert_eq!(&text[token.offset..token.end_offset()], token.text);
        }
    }

    #[test]
    fn folding_preserves_original_casing() {
        let tokens = tokenize("The QUICK Fox");
        assert_eq!(tokens[1].text, "QUICK");
        assert_eq!(tokens[1].folded, "quick");
    }

    #[test]
    fn multibyte_words_tokenize_cleanly() {
        let tokens = tokenize("café Straße 東京");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "café");
        assert_eq!(tokens[0].folded, "café");
        assert_eq!(tokens[1].folded, "straße");
        assert_eq!(tokens[2].text, "東京");
    }

    #[test]
    fn case_insensitive_token_equality() {
        let a = tokenize("Fox");
        let b = tokenize("fOX");
        assert!(a[0].matches(&b[0]));
    }
}
