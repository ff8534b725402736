//! Terminal front end for the catalog browser.
//!
//! The binary owns only IO: each input line becomes a [`command::Command`],
//! commands map onto session control events, and the resulting view models
//! are rendered back as text. All browsing logic lives in `armory-browse`.

pub mod command;
pub mod render;

pub use command::Command;
