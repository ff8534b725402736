//! Browse domain module: the interactive half of the catalog browser.
//!
//! Session state (filter criteria, sort spec, comparison selection) lives in
//! explicit state objects owned by a [`session::BrowseSession`]; the filter
//! and sort engines are pure functions over catalog slices. Every control
//! event runs the same synchronous pipeline: update state, then
//! `filter → sort → view`.

pub mod criteria;
pub mod filter;
pub mod selection;
pub mod session;
pub mod sort;
pub mod view;

pub use criteria::FilterCriteria;
pub use filter::filter_items;
pub use selection::{SelectionSet, MAX_COMPARE};
pub use session::{BrowseSession, ControlEvent};
pub use sort::{sort_items, SortDirection, SortKey, SortSpec};
pub use view::{BrowseView, CompareView, NoteCard, RowView, EM_DASH};
