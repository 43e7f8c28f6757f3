//! Handlers for `/persons/{id}` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/persons/{id}` | Profile and ministries; 404 if unknown |
//! | `GET`  | `/persons/{id}/career` | Ordered timeline, possibly empty |
//! | `GET`  | `/persons/{id}/cabinet` | All direct staff, precedence order |
//! | `GET`  | `/persons/{id}/poles` | Poles led by direct staff |
//! | `GET`  | `/persons/{id}/sheet` | All of the above merged; all-or-nothing |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use cabinet_core::{
  Classifier, Directory,
  source::RosterSource,
  view::{CareerEntry, PersonDetail, PersonSheet, Pole, StaffMember},
};
use uuid::Uuid;

use crate::error::ApiError;

type Dir<S, C> = State<Arc<Directory<S, C>>>;

/// `GET /persons/{id}`
pub async fn get_one<S, C>(
  State(directory): Dir<S, C>,
  Path(id): Path<Uuid>,
) -> Result<Json<PersonDetail>, ApiError>
where
  S: RosterSource,
  C: Classifier,
{
  Ok(Json(directory.person(id).await?))
}

/// `GET /persons/{id}/career`
pub async fn career<S, C>(
  State(directory): Dir<S, C>,
  Path(id): Path<Uuid>,
) -> Result<Json<Vec<CareerEntry>>, ApiError>
where
  S: RosterSource,
  C: Classifier,
{
  Ok(Json(directory.career(id).await?))
}

/// `GET /persons/{id}/cabinet`
pub async fn cabinet<S, C>(
  State(directory): Dir<S, C>,
  Path(id): Path<Uuid>,
) -> Result<Json<Vec<StaffMember>>, ApiError>
where
  S: RosterSource,
  C: Classifier,
{
  Ok(Json(directory.cabinet(id).await?))
}

/// `GET /persons/{id}/poles`
pub async fn poles<S, C>(
  State(directory): Dir<S, C>,
  Path(id): Path<Uuid>,
) -> Result<Json<Vec<Pole>>, ApiError>
where
  S: RosterSource,
  C: Classifier,
{
  Ok(Json(directory.poles(id).await?))
}

/// `GET /persons/{id}/sheet`
pub async fn sheet<S, C>(
  State(directory): Dir<S, C>,
  Path(id): Path<Uuid>,
) -> Result<Json<PersonSheet>, ApiError>
where
  S: RosterSource,
  C: Classifier,
{
  Ok(Json(directory.sheet(id).await?))
}
