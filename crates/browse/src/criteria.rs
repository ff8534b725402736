//! Session-scoped filter criteria.

use serde::{Deserialize, Serialize};

/// The current filter settings.
///
/// Defaults to "match everything". Mutated only by the session's event
/// handlers; the filter engine takes it by reference and never changes it.
/// `max_price == 0` means unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    /// OR semantics: an item matches if any of its calibers is listed here.
    pub calibers: Vec<String>,
    /// OR semantics within the set; empty means no constraint.
    pub types: Vec<String>,
    pub optics_only: bool,
    pub comped_only: bool,
    pub max_price: u64,
}

impl FilterCriteria {
    /// Add the caliber if absent, remove it if present (facet chip behavior).
    pub fn toggle_caliber(&mut self, caliber: &str) {
        toggle_membership(&mut self.calibers, caliber);
    }

    /// Add the type if absent, remove it if present.
    pub fn toggle_type(&mut self, kind: &str) {
        toggle_membership(&mut self.types, kind);
    }
}

fn toggle_membership(set: &mut Vec<String>, value: &str) {
    if let Some(pos) = set.iter().position(|v| v == value) {
        set.remove(pos);
    } else {
        set.push(value.to_string());
    }
}
