//! Facet derivation: the distinct values used to populate filter controls.

use crate::catalog::Catalog;

/// Values derived from the catalog alone.
///
/// Computed once at session start; the catalog never changes afterwards.
/// Both distinct-value lists are deduplicated in first-seen order across the
/// catalog, which is the order the controls present them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facets {
    calibers: Vec<String>,
    types: Vec<String>,
    max_observed_price: u64,
}

impl Facets {
    pub fn derive(catalog: &Catalog) -> Self {
        let mut calibers: Vec<String> = Vec::new();
        let mut types: Vec<String> = Vec::new();
        let mut max_observed_price = 0u64;

        for item in catalog.iter() {
            for caliber in &item.caliber {
                if !calibers.contains(caliber) {
                    calibers.push(caliber.clone());
                }
            }
            if !types.contains(&item.kind) {
                types.push(item.kind.clone());
            }
            max_observed_price = max_observed_price.max(item.msrp.unwrap_or(0));
        }

        Self {
            calibers,
            types,
            max_observed_price,
        }
    }

    pub fn calibers(&self) -> &[String] {
        &self.calibers
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Upper bound for the price-range control.
    pub fn max_observed_price(&self) -> u64 {
        self.max_observed_price
    }
}
