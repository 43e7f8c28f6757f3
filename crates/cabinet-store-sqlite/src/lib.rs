//! SQLite backend for the government roster.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod dataset;
pub mod error;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use store::SqliteStore;
