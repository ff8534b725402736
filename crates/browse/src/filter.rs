//! The filter engine: a pure predicate pipeline over catalog slices.

use armory_catalog::Item;

use crate::criteria::FilterCriteria;

/// Produce the ordered subsequence of `items` matching `criteria`.
///
/// Predicate groups compose with AND; the caliber and type sets are OR
/// within the group. Filtering never reorders. No validation happens here:
/// malformed criteria are rejected upstream at the control-input boundary.
pub fn filter_items<'a>(items: &'a [Item], criteria: &FilterCriteria) -> Vec<&'a Item> {
    items.iter().filter(|item| matches(item, criteria)).collect()
}

fn matches(item: &Item, criteria: &FilterCriteria) -> bool {
    if !criteria.query.is_empty() {
        let haystack = item.display_name().to_lowercase();
        if !haystack.contains(&criteria.query.to_lowercase()) {
            return false;
        }
    }
    if !criteria.calibers.is_empty()
        && !item.caliber.iter().any(|c| criteria.calibers.contains(c))
    {
        return false;
    }
    if !criteria.types.is_empty() && !criteria.types.contains(&item.kind) {
        return false;
    }
    if criteria.optics_only && !item.optics_ready {
        return false;
    }
    if criteria.comped_only && !item.comped {
        return false;
    }
    if criteria.max_price > 0 && item.msrp.unwrap_or(0) > criteria.max_price {
        return false;
    }
    true
}
