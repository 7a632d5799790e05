//! Token kind definitions for the lossless SQL tokenizer.
//!
//! Each `TokenKind` variant represents a lexical atom discovered during the
//! lenient scanning phase. The tokenizer avoids strict SQL rules; anything
//! unrecognized becomes a single-character `Other` token, so the stream is
//! total over arbitrary input.
//!
//! Design goals:
//! - Closed set: downstream styling matches exhaustively, no catch-all
//!   string tags.
//! - `Parameter` carries the parameter name (without the leading colon) so
//!   renderers and binding state never re-parse the lexeme.
//! - Ergonomic helpers (`is_keyword`, `param_name`) to avoid verbose pattern
//!   matches at call sites.
//!
//! See `keyword.rs` for the `Keyword` enum and `tokenizer.rs` for scanning.

use crate::sql::keyword::Keyword;

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Recognized SQL keyword.
    Keyword(Keyword),
    /// `'...'` literal, including both quotes; `\'` does not terminate.
    SingleQuotedString,
    /// `"..."` quoted identifier, including both quotes.
    DoubleQuotedIdentifier,
    /// `--` comment running to end of line.
    LineComment,
    /// `/* ... */` comment (non-nesting).
    BlockComment,
    /// `:name` placeholder; payload is the name without the colon.
    Parameter(String),
    /// Digit run, optionally containing `.`.
    Number,
    /// Table / alias / column / generic identifier.
    Ident,
    /// Exactly one source character we do not specially classify
    /// (whitespace, punctuation, operators).
    Other,
}

impl TokenKind {
    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// Returns the parameter name if this token is a `Parameter`.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            TokenKind::Parameter(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Convenience: returns true if this token represents any identifier.
    pub fn is_ident(&self) -> bool {
        matches!(self, TokenKind::Ident)
    }

    /// True if the highlighter leaves this kind unstyled (escape only).
    pub fn is_plain(&self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Other)
    }

    /// True for both comment flavors.
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::keyword::Keyword;

    #[test]
    fn keyword_detection() {
        let tk = TokenKind::Keyword(Keyword::Select);
        assert!(tk.is_keyword(Keyword::Select));
        assert!(!tk.is_keyword(Keyword::From));
        assert!(tk.param_name().is_none());
    }

    #[test]
    fn parameter_name_access() {
        let tk = TokenKind::Parameter("customer_id".into());
        assert_eq!(tk.param_name(), Some("customer_id"));
        assert!(!tk.is_plain());
    }

    #[test]
    fn plain_classification() {
        assert!(TokenKind::Ident.is_plain());
        assert!(TokenKind::Other.is_plain());
        assert!(!TokenKind::Number.is_plain());
        assert!(!TokenKind::SingleQuotedString.is_plain());
        assert!(!TokenKind::Keyword(Keyword::From).is_plain());
    }

    #[test]
    fn comment_classification() {
        assert!(TokenKind::LineComment.is_comment());
        assert!(TokenKind::BlockComment.is_comment());
        assert!(!TokenKind::Other.is_comment());
    }
}
