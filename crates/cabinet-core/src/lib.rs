//! Core types and aggregation logic for the government roster.
//!
//! This crate turns normalised rows from a [`source::RosterSource`] into the
//! nested view models consumed by a rendering layer: the roster grid and the
//! per-person sheet. It is free of HTTP and database dependencies.

pub mod classify;
pub mod defaults;
pub mod directory;
pub mod error;
pub mod order;
pub mod poles;
pub mod record;
pub mod roster;
pub mod sheet;
pub mod source;
pub mod view;

#[cfg(test)]
mod testing;

pub use classify::{Classifier, LabelClassifier, RoleKind, classify};
pub use defaults::Defaults;
pub use directory::Directory;
pub use error::{Error, Result};
pub use sheet::{SheetTicket, SheetTracker};
