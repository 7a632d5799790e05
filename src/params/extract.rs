//! Named-parameter extraction from raw SQL text.

use itertools::Itertools;
use regex::Regex;
use std::sync::LazyLock;

/// Same shape the tokenizer's parameter rule accepts: `:` then an
/// identifier.
static PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("parameter pattern is valid")
});

/// Collect the named parameters referenced in `sql`, ordered by first
/// appearance, duplicates removed.
///
/// This is a direct textual scan, independent of the tokenizer, so it stays
/// cheap enough to run on every keystroke. The trade-off: parameter-shaped
/// sequences inside string literals or comments are extracted too, where the
/// tokenizer would classify them as literal text. Everywhere else the two
/// views agree (see the agreement test).
pub fn extract(sql: &str) -> Vec<String> {
    PARAM
        .captures_iter(sql)
        .map(|caps| caps[1].to_string())
        .unique()
        .collect()
}
