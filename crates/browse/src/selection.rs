//! The bounded comparison selection.

use serde::{Deserialize, Serialize};

use armory_catalog::{Catalog, Item};
use armory_core::ItemSlug;

/// Maximum number of items in the comparison drawer.
pub const MAX_COMPARE: usize = 4;

/// Up to [`MAX_COMPARE`] distinct item slugs, in insertion order.
///
/// The cap is enforced by silent rejection: toggling a fifth id on is a
/// no-op, not an error and not a replacement of the oldest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: Vec<ItemSlug>,
}

impl SelectionSet {
    /// Remove `id` if present; otherwise append it unless the set is full.
    pub fn toggle(&mut self, id: ItemSlug) {
        if let Some(pos) = self.ids.iter().position(|selected| selected == &id) {
            self.ids.remove(pos);
        } else if self.ids.len() < MAX_COMPARE {
            self.ids.push(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &ItemSlug) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected slugs in insertion order.
    pub fn ids(&self) -> &[ItemSlug] {
        &self.ids
    }

    /// Resolve the selection against the catalog.
    ///
    /// Rows come back in catalog order, not insertion order; the original
    /// surface renders the comparison table by filtering the catalog, and
    /// that observed behavior is kept as-is.
    pub fn materialize<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Item> {
        catalog.iter().filter(|item| self.contains(&item.id)).collect()
    }
}
