//! Derived view models and display formatting.
//!
//! Everything here is already formatted for presentation: the front end
//! renders these strings verbatim and holds no formatting logic of its own.

use serde::Serialize;

use armory_catalog::Item;
use armory_core::ItemSlug;

use crate::selection::MAX_COMPARE;

/// Placeholder for any absent optional field.
pub const EM_DASH: &str = "—";

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: ItemSlug,
    pub brand: String,
    pub model: String,
    pub kind: String,
    pub caliber: String,
    pub barrel: String,
    pub capacity: String,
    pub weight_oz: String,
    pub comped: bool,
    pub optics_ready: bool,
    pub msrp: String,
    /// Whether this row is currently in the comparison selection.
    pub selected: bool,
}

impl RowView {
    pub fn from_item(item: &Item, selected: bool) -> Self {
        Self {
            id: item.id.clone(),
            brand: item.brand.clone(),
            model: item.model.clone(),
            kind: item.kind.clone(),
            caliber: item.caliber_display(),
            barrel: format_optional_f64(item.barrel),
            capacity: format_optional_u64(item.capacity.map(u64::from)),
            weight_oz: format_optional_f64(item.weight_oz),
            comped: item.comped,
            optics_ready: item.optics_ready,
            msrp: format_price(item.msrp),
            selected,
        }
    }
}

/// One notes card below the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCard {
    pub heading: String,
    pub notes: String,
}

impl NoteCard {
    pub fn from_item(item: &Item) -> Self {
        Self {
            heading: item.display_name(),
            notes: item.notes.clone(),
        }
    }
}

/// One row of the comparison drawer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareRow {
    pub model: String,
    pub kind: String,
    pub caliber: String,
    pub barrel: String,
    pub capacity: String,
    pub weight_oz: String,
    pub comped: bool,
    pub optics_ready: bool,
    pub msrp: String,
}

impl CompareRow {
    pub fn from_item(item: &Item) -> Self {
        Self {
            model: item.display_name(),
            kind: item.kind.clone(),
            caliber: item.caliber_display(),
            barrel: format_optional_f64(item.barrel),
            capacity: format_optional_u64(item.capacity.map(u64::from)),
            weight_oz: format_optional_f64(item.weight_oz),
            comped: item.comped,
            optics_ready: item.optics_ready,
            msrp: format_price(item.msrp),
        }
    }
}

/// The comparison drawer, present only while the selection is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareView {
    /// Header reads `count/cap`, e.g. "Compare (2/4)".
    pub count: usize,
    pub cap: usize,
    pub rows: Vec<CompareRow>,
}

impl CompareView {
    pub fn new(rows: Vec<CompareRow>) -> Self {
        Self {
            count: rows.len(),
            cap: MAX_COMPARE,
            rows,
        }
    }
}

/// The full derived display state after one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseView {
    pub rows: Vec<RowView>,
    pub notes: Vec<NoteCard>,
    pub compare: Option<CompareView>,
}

/// `$` plus grouped thousands; absent or zero renders as the placeholder,
/// matching the original surface.
pub fn format_price(msrp: Option<u64>) -> String {
    match msrp {
        Some(n) if n > 0 => format!("${}", group_thousands(n)),
        _ => EM_DASH.to_string(),
    }
}

fn format_optional_f64(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => EM_DASH.to_string(),
    }
}

fn format_optional_u64(value: Option<u64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => EM_DASH.to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
