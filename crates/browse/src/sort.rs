//! The sort engine: a stable, comparator-based total ordering.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use armory_catalog::Item;
use armory_core::DomainError;

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Brand,
    Model,
    #[serde(rename = "type")]
    Kind,
    Caliber,
    Barrel,
    Capacity,
    WeightOz,
    Comped,
    OpticsReady,
    Msrp,
}

impl SortKey {
    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Brand => "Brand",
            SortKey::Model => "Model",
            SortKey::Kind => "Type",
            SortKey::Caliber => "Caliber",
            SortKey::Barrel => "Barrel (in)",
            SortKey::Capacity => "Cap.",
            SortKey::WeightOz => "Weight (oz)",
            SortKey::Comped => "Comp",
            SortKey::OpticsReady => "Optic",
            SortKey::Msrp => "MSRP",
        }
    }

    /// Every column, in table order.
    pub fn all() -> [SortKey; 10] {
        [
            SortKey::Brand,
            SortKey::Model,
            SortKey::Kind,
            SortKey::Caliber,
            SortKey::Barrel,
            SortKey::Capacity,
            SortKey::WeightOz,
            SortKey::Comped,
            SortKey::OpticsReady,
            SortKey::Msrp,
        ]
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brand" => Ok(SortKey::Brand),
            "model" => Ok(SortKey::Model),
            "type" => Ok(SortKey::Kind),
            "caliber" => Ok(SortKey::Caliber),
            "barrel" => Ok(SortKey::Barrel),
            "capacity" => Ok(SortKey::Capacity),
            "weight" | "weightoz" => Ok(SortKey::WeightOz),
            "comped" | "comp" => Ok(SortKey::Comped),
            "optics" | "opticsready" => Ok(SortKey::OpticsReady),
            "msrp" => Ok(SortKey::Msrp),
            other => Err(DomainError::validation(format!("unknown sort key: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Msrp,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    /// Column-header click: same key flips direction, a new key starts
    /// ascending.
    pub fn click(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Stably order `items` by `spec`. The output is a permutation of the input;
/// ties retain their prior relative order.
pub fn sort_items<'a>(mut items: Vec<&'a Item>, spec: &SortSpec) -> Vec<&'a Item> {
    items.sort_by(|a, b| {
        let ordering = compare(a, b, spec.key);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    items
}

fn compare(a: &Item, b: &Item, key: SortKey) -> Ordering {
    match key {
        SortKey::Brand => caseless_cmp(&a.brand, &b.brand),
        SortKey::Model => caseless_cmp(&a.model, &b.model),
        SortKey::Kind => caseless_cmp(&a.kind, &b.kind),
        SortKey::Caliber => caseless_cmp(&a.caliber_display(), &b.caliber_display()),
        SortKey::Barrel => cmp_f64(a.barrel, b.barrel),
        SortKey::Capacity => a.capacity.unwrap_or(0).cmp(&b.capacity.unwrap_or(0)),
        SortKey::WeightOz => cmp_f64(a.weight_oz, b.weight_oz),
        SortKey::Comped => a.comped.cmp(&b.comped),
        SortKey::OpticsReady => a.optics_ready.cmp(&b.optics_ready),
        SortKey::Msrp => a.msrp.unwrap_or(0).cmp(&b.msrp.unwrap_or(0)),
    }
}

// Locale-aware ordering approximated by Unicode lowercase folding, with the
// raw strings as a deterministic tiebreak.
fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// Absent numeric values order as 0.
fn cmp_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
}
