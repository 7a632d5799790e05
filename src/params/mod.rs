//! Named-parameter machinery: extraction, catalog rows, binding state.
//!
//! Modules:
//! - `extract` : Ordered, de-duplicated `:name` discovery over raw text.
//! - `catalog` : Read-only host-supplied parameter metadata (name, label,
//!   example) for placeholder text.
//! - `binding` : Per-session [`ParamBindings`] state (declared parameters +
//!   test values with orphan pruning) and the [`EditorBuffer`]-mediated
//!   insert/remove edits.

pub mod binding;
pub mod catalog;
pub mod extract;

pub use binding::{Edit, EditorBuffer, ParamBindings, insertion, removal};
pub use catalog::CatalogEntry;
pub use extract::extract;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_feeds_binding_state() {
        let sql = "SELECT * FROM t WHERE a = :a AND b = :b";
        let state = ParamBindings::new(sql);
        assert_eq!(state.declared(), extract(sql).as_slice());
    }
}
