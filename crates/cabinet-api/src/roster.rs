//! Handler for `GET /roster`.

use std::sync::Arc;

use axum::{Json, extract::State};
use cabinet_core::{Classifier, Directory, source::RosterSource, view::Roster};

use crate::error::ApiError;

/// `GET /roster` — president, prime minister, then the other ministers.
pub async fn handler<S, C>(
  State(directory): State<Arc<Directory<S, C>>>,
) -> Result<Json<Roster>, ApiError>
where
  S: RosterSource,
  C: Classifier,
{
  Ok(Json(directory.roster().await?))
}
