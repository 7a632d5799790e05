//! Lossless, lenient SQL tokenization module.
//!
//! This module groups the building blocks the highlighter, formatter and
//! parameter machinery use to reason about raw SQL text without requiring a
//! full parser. The components are intentionally pragmatic:
//!
//! Modules:
//! - `keyword`    : Fixed keyword set (~60 words) with case-insensitive lookup.
//! - `token_kind` : Classification of lexical atoms (strings, comments,
//!   parameters, numbers, identifiers, keywords).
//! - `token`      : Token struct pairing a `TokenKind` with its text and span.
//! - `tokenizer`  : Single pass O(n) scanner producing a `Vec<Token>`.
//!
//! Design Principles:
//! 1. Accept incomplete / syntactically invalid SQL (robust for live editing);
//!    unterminated strings and comments absorb to end of input.
//! 2. Lossless: the token stream concatenates back to the original input
//!    exactly, whitespace and all.
//! 3. Keep the keyword set fixed and closed; extend only when an editing
//!    surface demands it.
//!
//! Public Re‑exports:
//! You can `use sqlpane::sql::{tokenize, Token, TokenKind, Keyword};`
//! directly, or pull everything via the `prelude` submodule.
//!
//! Example:
//! ```rust
//! use sqlpane::sql::prelude::*;
//!
//! let tokens = tokenize("SELECT name FROM customers WHERE id = :id");
//! assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
//! assert!(tokens.iter().any(|t| t.param_name() == Some("id")));
//! ```
//!
//! NOTE: This is **not** a SQL parser and performs no validation; it exists
//! to drive presentation and parameter discovery only.

pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;

/// Convenience prelude re‑exporting the most commonly used items.
///
/// Import with:
/// `use sqlpane::sql::prelude::*;`
pub mod prelude {
    pub use super::{Keyword, Token, TokenKind, tokenize};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_and_access() {
        let sql = "SELECT col FROM tbl WHERE x = :p";
        let tokens = tokenize(sql);
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(tokens.iter().any(|t| t.param_name() == Some("p")));
        assert!(
            tokens
                .iter()
                .any(|t| t.kind == TokenKind::Ident && t.text == "tbl")
        );
    }

    #[test]
    fn prelude_import_works() {
        use super::prelude::*;
        let toks = tokenize("FROM X");
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(
            toks.iter()
                .any(|t| t.kind == TokenKind::Ident && t.text == "X")
        );
    }
}
