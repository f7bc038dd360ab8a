//! Closed category catalog.
//!
//! Maps a category key (what the user selects) to the display label stored
//! in [`FocusSession::category`](crate::FocusSession). Unknown keys resolve
//! to a fallback label instead of failing.

use serde::{Deserialize, Serialize};

pub const DEFAULT_FALLBACK_LABEL: &str = "Belirtilmemiş";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub label: String,
}

impl Category {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    entries: Vec<Category>,
    fallback_label: String,
}

impl CategoryCatalog {
    pub fn new(entries: Vec<Category>, fallback_label: impl Into<String>) -> Self {
        Self {
            entries,
            fallback_label: fallback_label.into(),
        }
    }

    pub fn entries(&self) -> &[Category] {
        &self.entries
    }

    pub fn fallback_label(&self) -> &str {
        &self.fallback_label
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|c| c.key == key)
    }

    /// Resolve a key to its display label, or the fallback label.
    pub fn label_for(&self, key: &str) -> &str {
        self.entries
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.label.as_str())
            .unwrap_or(&self.fallback_label)
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(
            vec![
                Category::new("ders", "Ders Çalışma"),
                Category::new("kodlama", "Kodlama"),
                Category::new("proje", "Proje"),
                Category::new("kitap", "Kitap Okuma"),
            ],
            DEFAULT_FALLBACK_LABEL,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_keys() {
        let catalog = CategoryCatalog::default();
        assert_eq!(catalog.label_for("ders"), "Ders Çalışma");
        assert_eq!(catalog.label_for("kitap"), "Kitap Okuma");
        assert!(catalog.contains("proje"));
    }

    #[test]
    fn unknown_key_uses_fallback() {
        let catalog = CategoryCatalog::default();
        assert_eq!(catalog.label_for("gym"), DEFAULT_FALLBACK_LABEL);
        // Keys are case-sensitive.
        assert_eq!(catalog.label_for("Ders"), DEFAULT_FALLBACK_LABEL);
    }
}
