//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog item.
///
/// Item slugs come from the dataset itself (e.g. `glock-34-gen5-mos`), so
/// this is a string newtype rather than a generated id. The only constraint
/// enforced here is that a slug is non-empty; uniqueness across a catalog is
/// checked where the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemSlug(String);

impl ItemSlug {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemSlug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemSlug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("ItemSlug: empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for ItemSlug {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemSlug {
    fn from(value: String) -> Self {
        Self(value)
    }
}
