//! Token model tying a `TokenKind` to its text and source span.
//!
//! A `Token` carries its classification (`kind`), the exact source substring
//! (`text`), and byte offsets (`start`, `end`) into the original SQL string.
//!
//! Rationale:
//! - Owning `text` makes the lossless contract direct: concatenating the
//!   `text` of every token, in order, reproduces the input byte for byte.
//! - Offsets let higher‑level logic (cursor-aware editing surfaces) do range
//!   checks against the original buffer without re-scanning.
//! - Tokens are immutable; manipulating the stream means constructing new
//!   ones, not mutating existing ones.
//!
//! See sibling modules:
//! - `keyword.rs`    for the `Keyword` enum.
//! - `token_kind.rs` for `TokenKind` classification.
//! - `tokenizer.rs`  for producing `Vec<Token>` from raw SQL input.
use crate::sql::{keyword::Keyword, token_kind::TokenKind};

/// A lexical token with its text and inclusive-start / exclusive-end byte
/// offsets.
///
/// Invariants:
/// - `end >= start`
/// - `[start, end)` is a valid slice range for the original input
/// - `text == &input[start..end]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
            end,
        }
    }

    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the token's length is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the parameter name if this token is a parameter reference.
    pub fn param_name(&self) -> Option<&str> {
        self.kind.param_name()
    }

    /// Returns true if this token represents a given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    /// Returns true if the cursor (byte offset) lies within this token's span.
    ///
    /// NOTE: End is exclusive, so `cursor == end` returns false.
    pub fn contains(&self, cursor: usize) -> bool {
        cursor >= self.start && cursor < self.end
    }

    /// Convenience: convert to a `(start, end)` tuple.
    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{keyword::Keyword, token_kind::TokenKind};

    #[test]
    fn length_and_empty() {
        let t = Token::new(TokenKind::Other, ",", 5, 6);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
    }

    #[test]
    fn param_access() {
        let t = Token::new(TokenKind::Parameter("id".into()), ":id", 0, 3);
        assert_eq!(t.param_name(), Some("id"));
        assert!(t.contains(2));
        assert!(!t.contains(3)); // end exclusive
    }

    #[test]
    fn keyword_detection() {
        let t = Token::new(TokenKind::Keyword(Keyword::Select), "SELECT", 0, 6);
        assert!(t.is_keyword(Keyword::Select));
        assert!(!t.is_keyword(Keyword::From));
    }

    #[test]
    fn span_matches_text_length() {
        let t = Token::new(TokenKind::Number, "3.14", 10, 14);
        assert_eq!(t.span(), (10, 14));
        assert_eq!(t.len(), t.text.len());
    }
}
