//! Per-session parameter binding state and cursor-mediated text edits.
//!
//! Each editing surface owns exactly one [`ParamBindings`] for the lifetime
//! of its editor. The state is two small pieces: the ordered list of
//! parameters currently declared in the text, and a name → test-value map.
//! [`ParamBindings::sync`] reconciles both on every text change: declared
//! names are recomputed via [`extract`] and test values whose parameter
//! disappeared are pruned. Values for surviving names are never touched and
//! no defaults are invented for new names (hosts may seed from the catalog).
//!
//! Insert/remove edits go through the [`EditorBuffer`] trait rather than a
//! text snapshot. Rapid repeated clicks can arrive before the host
//! framework has re-rendered with the previous update, so both the
//! existence check and the mutation must read the buffer's authoritative
//! text at the moment of the call; a captured copy can double-insert or
//! silently drop an edit.

use crate::params::extract::extract;
use crate::{debug, trace};
use regex::Regex;
use std::collections::HashMap;

/// The three capabilities the engine needs from a host editor: current
/// text, current cursor offset (bytes), and applying a programmatic edit.
pub trait EditorBuffer {
    fn text(&self) -> String;
    fn cursor(&self) -> usize;
    fn apply(&mut self, text: String, cursor: usize);
}

/// Outcome of a programmatic edit: the new text and caret position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("caret {cursor} after edit to {text:?}")]
pub struct Edit {
    pub text: String,
    pub cursor: usize,
}

/// Binding state for one editing session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParamBindings {
    declared: Vec<String>,
    test_values: HashMap<String, String>,
}

impl ParamBindings {
    /// State for a surface opening with `sql` as its initial text.
    pub fn new(sql: &str) -> Self {
        Self {
            declared: extract(sql),
            test_values: HashMap::new(),
        }
    }

    /// Parameters currently declared in the text, in order of appearance.
    pub fn declared(&self) -> &[String] {
        &self.declared
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.iter().any(|n| n.as_str() == name)
    }

    /// Current test value for `name`, if one has been entered.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.test_values.get(name).map(String::as_str)
    }

    /// The full name → test-value map, e.g. for the highlighter's
    /// substitution rendering.
    pub fn test_values(&self) -> &HashMap<String, String> {
        &self.test_values
    }

    /// Record a test value. Accepted even for undeclared names; the next
    /// `sync` prunes it if the parameter still isn't in the text.
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.test_values.insert(name.into(), value.into());
    }

    /// Reconcile with changed text: recompute declared parameters and prune
    /// test values whose parameter no longer appears. Surviving entries are
    /// left untouched.
    pub fn sync(&mut self, sql: &str) {
        self.declared = extract(sql);
        let before = self.test_values.len();
        let declared = &self.declared;
        self.test_values.retain(|name, _| declared.contains(name));
        let pruned = before - self.test_values.len();
        if pruned > 0 {
            debug!(pruned, "dropped test values for parameters no longer in the text");
        }
    }

    /// Insert `:name` at the buffer's cursor, unless the parameter already
    /// appears (word-bounded) in the buffer's *current* text. Reads text and
    /// cursor at call time; see the module docs for why a snapshot is not
    /// acceptable here. Returns the applied edit, or `None` for the no-op.
    pub fn insert_param(&mut self, buffer: &mut impl EditorBuffer, name: &str) -> Option<Edit> {
        let edit = insertion(&buffer.text(), buffer.cursor(), name)?;
        buffer.apply(edit.text.clone(), edit.cursor);
        self.sync(&edit.text);
        trace!(%name, cursor = edit.cursor, "inserted parameter reference");
        Some(edit)
    }

    /// Remove every word-bounded `:name` occurrence from the buffer's
    /// current text; `:name_extended` is left alone. Returns the new text.
    pub fn remove_param(&mut self, buffer: &mut impl EditorBuffer, name: &str) -> String {
        let next = removal(&buffer.text(), name);
        let cursor = clamp_to_char_boundary(&next, buffer.cursor());
        buffer.apply(next.clone(), cursor);
        self.sync(&next);
        trace!(%name, "removed parameter references");
        next
    }
}

/// Pure insertion step backing [`ParamBindings::insert_param`]. `None` when
/// a word-bounded `:name` already appears in `text`.
pub fn insertion(text: &str, cursor: usize, name: &str) -> Option<Edit> {
    if reference_pattern(name).is_match(text) {
        return None;
    }
    let at = clamp_to_char_boundary(text, cursor);
    let reference = format!(":{name}");
    let mut out = String::with_capacity(text.len() + reference.len());
    out.push_str(&text[..at]);
    out.push_str(&reference);
    out.push_str(&text[at..]);
    Some(Edit {
        text: out,
        cursor: at + reference.len(),
    })
}

/// Pure removal step backing [`ParamBindings::remove_param`]: delete every
/// word-bounded `:name` occurrence.
pub fn removal(text: &str, name: &str) -> String {
    reference_pattern(name)
        .replace_all(text, "")
        .into_owned()
}

/// Word-bounded `:name` matcher, so `:id` never matches inside
/// `:id_extended`.
fn reference_pattern(name: &str) -> Regex {
    Regex::new(&format!(":{}\\b", regex::escape(name)))
        .expect("parameter reference pattern is valid")
}

/// Largest char boundary at or below `offset`, capped at `text.len()`.
fn clamp_to_char_boundary(text: &str, offset: usize) -> usize {
    let mut at = offset.min(text.len());
    while at > 0 && !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal host stand-in: a plain text buffer with a cursor.
    #[derive(Debug, Default)]
    struct FakeBuffer {
        text: String,
        cursor: usize,
    }

    impl FakeBuffer {
        fn new(text: &str, cursor: usize) -> Self {
            Self {
                text: text.to_string(),
                cursor,
            }
        }
    }

    impl EditorBuffer for FakeBuffer {
        fn text(&self) -> String {
            self.text.clone()
        }

        fn cursor(&self) -> usize {
            self.cursor
        }

        fn apply(&mut self, text: String, cursor: usize) {
            self.text = text;
            self.cursor = cursor;
        }
    }

    #[test]
    fn new_seeds_declared_but_not_values() {
        let state = ParamBindings::new("WHERE a = :x AND b = :y");
        assert_eq!(state.declared(), ["x", "y"]);
        assert!(state.test_values().is_empty());
    }

    #[test]
    fn sync_prunes_orphans_and_preserves_survivors() {
        let mut state = ParamBindings::new("WHERE a = :id AND b = :old");
        state.set_value("id", "1");
        state.set_value("old", "x");

        state.sync("WHERE a = :id");
        assert_eq!(state.declared(), ["id"]);
        assert_eq!(state.value("id"), Some("1"));
        assert_eq!(state.value("old"), None);
    }

    #[test]
    fn sync_invents_no_defaults_for_new_names() {
        let mut state = ParamBindings::new("SELECT 1");
        state.sync("SELECT :fresh");
        assert_eq!(state.declared(), ["fresh"]);
        assert_eq!(state.value("fresh"), None);
    }

    #[test]
    fn insert_is_noop_when_already_present() {
        let mut state = ParamBindings::new("SELECT :id");
        let mut buffer = FakeBuffer::new("SELECT :id", 10);
        assert!(state.insert_param(&mut buffer, "id").is_none());
        assert_eq!(buffer.text, "SELECT :id");
    }

    #[test]
    fn insert_appends_at_cursor_and_moves_caret() {
        let mut state = ParamBindings::new("SELECT :id");
        let mut buffer = FakeBuffer::new("SELECT :id", 10);
        let edit = state.insert_param(&mut buffer, "name").unwrap();
        assert_eq!(edit.text, "SELECT :id:name");
        assert_eq!(edit.cursor, 15);
        assert_eq!(buffer.text, edit.text);
        assert!(state.is_declared("name"));
    }

    #[test]
    fn insert_mid_text() {
        let mut state = ParamBindings::new("WHERE  = 1");
        let mut buffer = FakeBuffer::new("WHERE  = 1", 6);
        let edit = state.insert_param(&mut buffer, "id").unwrap();
        assert_eq!(edit.text, "WHERE :id = 1");
        assert_eq!(edit.cursor, 9);
    }

    #[test]
    fn rapid_double_click_cannot_double_insert() {
        // Both calls read the buffer's authoritative text; the second sees
        // the first edit and backs off.
        let mut state = ParamBindings::new("");
        let mut buffer = FakeBuffer::new("", 0);
        assert!(state.insert_param(&mut buffer, "id").is_some());
        assert!(state.insert_param(&mut buffer, "id").is_none());
        assert_eq!(buffer.text, ":id");
    }

    #[test]
    fn insert_clamps_out_of_range_cursor() {
        let mut state = ParamBindings::new("ab");
        let mut buffer = FakeBuffer::new("ab", 99);
        let edit = state.insert_param(&mut buffer, "p").unwrap();
        assert_eq!(edit.text, "ab:p");
    }

    #[test]
    fn insert_clamps_to_char_boundary() {
        // Cursor byte offset landing inside 'é' slides back to its start.
        let edit = insertion("é", 1, "p").unwrap();
        assert_eq!(edit.text, ":pé");
        assert_eq!(edit.cursor, 2);
    }

    #[test]
    fn removal_respects_word_boundaries() {
        let mut state = ParamBindings::new("WHERE :id = :id_extra");
        let mut buffer = FakeBuffer::new("WHERE :id = :id_extra", 0);
        let next = state.remove_param(&mut buffer, "id");
        assert_eq!(next, "WHERE  = :id_extra");
        assert_eq!(state.declared(), ["id_extra"]);
    }

    #[test]
    fn removal_is_global() {
        let next = removal("(:a) AND (:a) OR (:a)", "a");
        assert_eq!(next, "() AND () OR ()");
    }

    #[test]
    fn removal_prunes_the_orphaned_value() {
        let mut state = ParamBindings::new("SELECT :id");
        state.set_value("id", "42");
        let mut buffer = FakeBuffer::new("SELECT :id", 0);
        state.remove_param(&mut buffer, "id");
        assert_eq!(state.value("id"), None);
        assert!(state.declared().is_empty());
    }
}
