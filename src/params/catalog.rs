//! Read-only parameter catalog rows supplied by the host.
//!
//! The console backend publishes a catalog of well-known parameters (name,
//! human label, example value). The engine never needs it for correctness;
//! hosts use it to seed placeholder text on test-value inputs.

/// One catalog row. Immutable, host-owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub label: String,
    pub example: String,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            example: example.into(),
        }
    }

    /// Placeholder text for a test-value input bound to this parameter.
    pub fn placeholder_text(&self) -> String {
        if self.example.is_empty() {
            self.label.clone()
        } else {
            format!("{}, e.g. {}", self.label, self.example)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_includes_example_when_present() {
        let entry = CatalogEntry::new("company_id", "Company ID", "300");
        assert_eq!(entry.placeholder_text(), "Company ID, e.g. 300");
    }

    #[test]
    fn placeholder_falls_back_to_label() {
        let entry = CatalogEntry::new("note", "Free-text note", "");
        assert_eq!(entry.placeholder_text(), "Free-text note");
    }
}
