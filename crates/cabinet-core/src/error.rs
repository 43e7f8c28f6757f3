//! Error types for `cabinet-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// A single-row lookup matched zero records (or more than one).
  #[error("person not found: {0}")]
  NotFound(Uuid),

  /// The underlying data source reported a query or transport failure.
  #[error("data source error: {0}")]
  DataSource(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn data_source<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::DataSource(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
