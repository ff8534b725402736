//! The catalog entry record.

use serde::{Deserialize, Serialize};

use armory_core::ItemSlug;

/// One catalog entry.
///
/// Items are plain read models: every field is public and nothing here is
/// ever mutated after the catalog is loaded. The wire shape keeps the
/// dataset's original camelCase keys so existing documents load unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemSlug,
    pub brand: String,
    pub model: String,
    /// Category label, an open-ended set (e.g. "Striker", "DA/SA").
    #[serde(rename = "type")]
    pub kind: String,
    /// Never empty; an item may be chambered in several calibers.
    pub caliber: Vec<String>,
    /// Barrel length in inches.
    #[serde(default)]
    pub barrel: Option<f64>,
    pub comped: bool,
    pub optics_ready: bool,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub weight_oz: Option<f64>,
    /// Price in the smallest currency unit.
    #[serde(default)]
    pub msrp: Option<u64>,
    pub notes: String,
}

impl Item {
    /// The string the free-text query matches against: `brand + " " + model`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Calibers joined for display and for the caliber sort column.
    pub fn caliber_display(&self) -> String {
        self.caliber.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "glock-34-gen5-mos",
            "brand": "Glock",
            "model": "34 Gen5 MOS",
            "type": "Striker",
            "caliber": ["9mm"],
            "barrel": 5.31,
            "comped": false,
            "opticsReady": true,
            "capacity": 17,
            "weightOz": 25.95,
            "msrp": 749,
            "notes": "Long-slide 9mm; MOS optics cut; ubiquitous aftermarket."
        }"#
    }

    #[test]
    fn deserializes_camel_case_document() {
        let item: Item = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(item.id.as_str(), "glock-34-gen5-mos");
        assert_eq!(item.kind, "Striker");
        assert!(item.optics_ready);
        assert_eq!(item.weight_oz, Some(25.95));
        assert_eq!(item.msrp, Some(749));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let item: Item = serde_json::from_str(
            r#"{
                "id": "mystery",
                "brand": "Mystery",
                "model": "One",
                "type": "Striker",
                "caliber": ["9mm"],
                "comped": false,
                "opticsReady": false,
                "notes": ""
            }"#,
        )
        .unwrap();
        assert_eq!(item.barrel, None);
        assert_eq!(item.capacity, None);
        assert_eq!(item.weight_oz, None);
        assert_eq!(item.msrp, None);
    }

    #[test]
    fn display_name_joins_brand_and_model() {
        let item: Item = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(item.display_name(), "Glock 34 Gen5 MOS");
    }

    #[test]
    fn caliber_display_joins_with_comma() {
        let mut item: Item = serde_json::from_str(sample_json()).unwrap();
        item.caliber = vec!["9mm".to_string(), "40 S&W".to_string()];
        assert_eq!(item.caliber_display(), "9mm, 40 S&W");
    }
}
