use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};

/// Lenient, lossless SQL tokenizer producing a flat stream of `Token`s.
///
/// Scope / Intent:
/// - Designed for editor highlighting and named-parameter discovery.
/// - Accepts incomplete / syntactically invalid SQL (e.g. `SELECT FROM`,
///   an unterminated `'literal`), which is routine during live editing.
/// - Classifies against the fixed keyword set defined in `keyword.rs`.
///
/// Scanning rules, in priority order at each position:
/// 1. `'...'` single-quoted string (`\'` does not terminate).
/// 2. `"..."` double-quoted identifier (same escape rule).
/// 3. `--` line comment to end of line.
/// 4. `/* ... */` block comment (non-nesting).
/// 5. `:` + identifier → parameter; a bare `:` falls through to rule 8.
/// 6. Digit run (may contain `.`) → number, unless immediately followed by
///    `"` or `'`: then the run is an identifier. This supports a dialect
///    where a numeric prefix abuts a quoted column reference (`300"COL"`)
///    and must not read as a number.
/// 7. `[A-Za-z_][A-Za-z0-9_]*` → keyword (case-insensitive lookup) or
///    identifier.
/// 8. Anything else: exactly one character as `Other`, whitespace included.
///
/// Guarantees:
/// - Never panics, never returns an error; unterminated strings and comments
///   absorb to end of input and still yield tokens.
/// - Lossless: concatenating every token's `text` in order reproduces the
///   input exactly.
///
/// Complexity:
/// - O(n) time, O(t) space where `t` is number of tokens.
pub fn tokenize(sql: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = sql.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let c = bytes[i];

        // Rules 1 & 2: quoted string / quoted identifier
        if c == b'\'' || c == b'"' {
            i = scan_quoted(bytes, i, c);
            let kind = if c == b'\'' {
                TokenKind::SingleQuotedString
            } else {
                TokenKind::DoubleQuotedIdentifier
            };
            out.push(Token::new(kind, &sql[start..i], start, i));
            continue;
        }

        // Rule 3: line comment
        if c == b'-' && bytes.get(i + 1) == Some(&b'-') {
            i += 2;
            while i < bytes.len() && bytes[i] != b'\n' {
                i += 1;
            }
            out.push(Token::new(TokenKind::LineComment, &sql[start..i], start, i));
            continue;
        }

        // Rule 4: block comment, absorbed to end of input when unterminated
        if c == b'/' && bytes.get(i + 1) == Some(&b'*') {
            i += 2;
            while i < bytes.len() {
                if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    i += 2;
                    break;
                }
                i += 1;
            }
            out.push(Token::new(TokenKind::BlockComment, &sql[start..i], start, i));
            continue;
        }

        // Rule 5: named parameter
        if c == b':'
            && let Some(&next) = bytes.get(i + 1)
            && is_ident_start(next)
        {
            i += 2;
            while i < bytes.len() && is_ident_continue(bytes[i]) {
                i += 1;
            }
            let name = &sql[start + 1..i];
            out.push(Token::new(
                TokenKind::Parameter(name.to_string()),
                &sql[start..i],
                start,
                i,
            ));
            continue;
        }

        // Rule 6: number, reclassified when a quote abuts the digit run
        if c.is_ascii_digit() {
            i += 1;
            while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                i += 1;
            }
            let kind = match bytes.get(i) {
                Some(&b'"') | Some(&b'\'') => TokenKind::Ident,
                _ => TokenKind::Number,
            };
            out.push(Token::new(kind, &sql[start..i], start, i));
            continue;
        }

        // Rule 7: identifier / keyword run
        if is_ident_start(c) {
            i += 1;
            while i < bytes.len() && is_ident_continue(bytes[i]) {
                i += 1;
            }
            let text = &sql[start..i];
            let lower = text.to_ascii_lowercase();
            let kind = Keyword::from_lower(&lower)
                .map(TokenKind::Keyword)
                .unwrap_or(TokenKind::Ident);
            out.push(Token::new(kind, text, start, i));
            continue;
        }

        // Rule 8: exactly one character (a full UTF-8 scalar, not a byte)
        let ch_len = sql[i..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);
        i += ch_len;
        out.push(Token::new(TokenKind::Other, &sql[start..i], start, i));
    }

    out
}

/// Consume a quoted region starting at `open` (which holds `quote`).
/// Returns the index one past the closing quote, or `bytes.len()` when the
/// region is unterminated. A backslash escapes the following character.
fn scan_quoted(bytes: &[u8], open: usize, quote: u8) -> usize {
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i = (i + 2).min(bytes.len()),
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

const fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
