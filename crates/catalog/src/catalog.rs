//! The immutable, ordered item catalog and its load boundary.

use std::collections::HashSet;

use armory_core::{DomainError, DomainResult, ItemSlug};

use crate::item::Item;

/// The built-in sample dataset, embedded at compile time.
const BUILTIN_DATASET: &str = include_str!("../data/catalog.json");

/// An immutable, ordered sequence of catalog items.
///
/// Loaded once, never mutated. The stated dataset invariants (unique ids,
/// non-empty caliber lists) are enforced here, at the boundary where a
/// document enters the process; downstream engines trust the catalog and
/// perform no validation of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from already-deserialized items, enforcing invariants.
    pub fn from_items(items: Vec<Item>) -> DomainResult<Self> {
        let mut seen: HashSet<&ItemSlug> = HashSet::new();
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(DomainError::invariant(format!(
                    "duplicate item id: {}",
                    item.id
                )));
            }
            if item.caliber.is_empty() {
                return Err(DomainError::validation(format!(
                    "item {} has an empty caliber list",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    /// Deserialize a JSON array of items and enforce catalog invariants.
    pub fn from_json(document: &str) -> DomainResult<Self> {
        let items: Vec<Item> = serde_json::from_str(document)
            .map_err(|e| DomainError::validation(format!("catalog document: {e}")))?;
        let catalog = Self::from_items(items)?;
        tracing::debug!(items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The embedded sample dataset.
    pub fn builtin() -> DomainResult<Self> {
        Self::from_json(BUILTIN_DATASET)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by slug.
    pub fn get(&self, id: &ItemSlug) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.get(&ItemSlug::from("staccato-xc")).is_some());
    }

    #[test]
    fn builtin_dataset_preserves_document_order() {
        let catalog = Catalog::builtin().unwrap();
        let first = &catalog.items()[0];
        assert_eq!(first.id.as_str(), "bul-tactical-comp");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let document = r#"[
            {"id": "a", "brand": "A", "model": "1", "type": "Striker",
             "caliber": ["9mm"], "comped": false, "opticsReady": false, "notes": ""},
            {"id": "a", "brand": "A", "model": "2", "type": "Striker",
             "caliber": ["9mm"], "comped": false, "opticsReady": false, "notes": ""}
        ]"#;
        let err = Catalog::from_json(document).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("duplicate item id") => {}
            _ => panic!("Expected InvariantViolation for duplicate id"),
        }
    }

    #[test]
    fn rejects_empty_caliber_list() {
        let document = r#"[
            {"id": "a", "brand": "A", "model": "1", "type": "Striker",
             "caliber": [], "comped": false, "opticsReady": false, "notes": ""}
        ]"#;
        let err = Catalog::from_json(document).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("empty caliber list") => {}
            _ => panic!("Expected Validation error for empty caliber list"),
        }
    }

    #[test]
    fn rejects_malformed_document() {
        let err = Catalog::from_json("not json").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for malformed document"),
        }
    }

    #[test]
    fn get_misses_unknown_slug() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get(&ItemSlug::from("no-such-item")).is_none());
    }
}
