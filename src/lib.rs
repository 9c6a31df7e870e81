//! Core library for ClientHub, a terminal catalog browser and editor for a
//! `clients.json` document. The Catalog tab renders the records as a
//! searchable list with a detail overlay; the Admin tab edits, reorders,
//! validates and re-exports the same JSON array, entirely in memory.

pub mod app;
pub mod catalog;
pub mod system;
pub mod ui;
pub mod utils;

pub use app::{App, run};
pub use catalog::{Client, ValidationError, validate};
