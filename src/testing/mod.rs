#![cfg(test)]
//! Shared test plumbing: tracing init, the sample-query corpus the
//! property-style tests run over, and small markup helpers.

use regex::Regex;
use std::sync::LazyLock;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// Realistic queries from the console's editing surfaces. Kept free of
/// parameter-shaped text inside literals so the tokenizer and the raw-text
/// extractor agree on every entry.
pub(crate) const SAMPLE_QUERIES: &[&str] = &[
    "SELECT * FROM companies",
    "select id, name from users where company_id = :company_id",
    "SELECT c.id, c.name, u.email FROM companies c INNER JOIN users u ON u.company_id = c.id WHERE c.active = 1 ORDER BY c.name",
    "SELECT COUNT(*) AS total FROM certificates WHERE valid_until < :cutoff AND status = 'ACTIVE'",
    "SELECT 300\"COL\" FROM legacy_view",
    "-- monthly report\nSELECT t.name, SUM(t.amount)   FROM transactions t GROUP BY t.name HAVING SUM(t.amount) > :threshold",
    "SELECT a FROM t /* keep in\n   sync with template */ WHERE a BETWEEN :low AND :high",
    "UPDATE users SET locked = 1 WHERE last_login < :cutoff OR failed_logins > 5",
    "SELECT 'it''s' FROM dual",
    "SELECT x FROM t WHERE x > 1 AND y < 2 LIMIT 10",
    "SELECT a FROM t1 UNION ALL SELECT a FROM t2",
];

static TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?span[^>]*>").expect("tag pattern is valid"));

/// Strip the renderer's span tags, leaving only text nodes.
pub(crate) fn detag(html: &str) -> String {
    TAGS.replace_all(html, "").into_owned()
}

/// Concatenate the token texts back together (the lossless property).
pub(crate) fn roundtrip(sql: &str) -> String {
    crate::sql::tokenize(sql)
        .iter()
        .map(|t| t.text.as_str())
        .collect()
}

mod corpus_checks {
    use super::*;

    #[test]
    fn corpus_is_lossless_and_parameter_consistent() {
        common_init();
        for sql in SAMPLE_QUERIES {
            assert_eq!(roundtrip(sql), *sql);
        }
    }

    #[test]
    fn detag_strips_only_markup() {
        assert_eq!(detag("<span style=\"color:#fff\">SELECT</span> x"), "SELECT x");
        assert_eq!(detag("no tags"), "no tags");
    }
}
