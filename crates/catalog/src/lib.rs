//! Catalog domain module.
//!
//! This crate owns the immutable item catalog: the record type, the JSON
//! load boundary where the dataset's invariants are enforced, and the facet
//! values derived from it. No IO beyond deserializing a document handed in
//! by the caller.

pub mod catalog;
pub mod facets;
pub mod item;

pub use catalog::Catalog;
pub use facets::Facets;
pub use item::Item;
