//! JSON REST API for the government roster.
//!
//! Exposes an axum [`Router`] backed by a [`Directory`] over any
//! [`RosterSource`]. The API is read-only; auth, TLS and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", cabinet_api::api_router(directory.clone()))
//! ```

pub mod error;
pub mod persons;
pub mod roster;

use std::sync::Arc;

use axum::{Router, routing::get};
use cabinet_core::{Classifier, Directory, source::RosterSource};

pub use error::ApiError;

/// Build a fully-materialised API router for `directory`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, C>(directory: Arc<Directory<S, C>>) -> Router<()>
where
  S: RosterSource + 'static,
  C: Classifier + 'static,
{
  Router::new()
    .route("/roster", get(roster::handler::<S, C>))
    .route("/persons/{id}", get(persons::get_one::<S, C>))
    .route("/persons/{id}/career", get(persons::career::<S, C>))
    .route("/persons/{id}/cabinet", get(persons::cabinet::<S, C>))
    .route("/persons/{id}/poles", get(persons::poles::<S, C>))
    .route("/persons/{id}/sheet", get(persons::sheet::<S, C>))
    .with_state(directory)
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use cabinet_store_sqlite::{
    Dataset, SqliteStore,
    dataset::PersonRow,
  };
  use serde_json::Value;
  use tower::ServiceExt as _;
  use uuid::Uuid;

  async fn make_router(persons: Vec<PersonRow>) -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    store
      .import(Dataset { persons, ..Dataset::default() })
      .await
      .unwrap();
    api_router(Arc::new(Directory::new(store)))
  }

  async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  fn official(name: &str, role: &str) -> PersonRow {
    PersonRow { role: Some(role.into()), ..PersonRow::new(name) }
  }

  #[tokio::test]
  async fn roster_lists_heads_and_ministers() {
    let router = make_router(vec![
      official("Marianne", "Président"),
      official("Paul", "Premier ministre"),
      official("Lucie", "Ministre des Armées"),
    ])
    .await;

    let (status, body) = get_json(router, "/roster").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["president"]["full_name"], "Marianne");
    assert_eq!(body["prime_minister"]["full_name"], "Paul");
    assert_eq!(body["others"][0]["full_name"], "Lucie");
    assert_eq!(body["others"][0]["ministry_label"], "Ministère");
  }

  #[tokio::test]
  async fn unknown_person_returns_404() {
    let router = make_router(vec![]).await;
    let (status, body) =
      get_json(router, &format!("/persons/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
  }

  #[tokio::test]
  async fn sheet_is_flat_with_sections() {
    let boss = official("Marianne", "Président");
    let chief = PersonRow {
      superior_id: Some(boss.id),
      cabinet_role: Some("Chef de pôle Économie".into()),
      ..PersonRow::new("Yann")
    };
    let id = boss.id;
    let router = make_router(vec![boss, chief]).await;

    let (status, body) =
      get_json(router, &format!("/persons/{id}/sheet")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["full_name"], "Marianne");
    assert_eq!(body["biography"], "Aucune biographie courte renseignée.");
    assert_eq!(body["cabinet"].as_array().unwrap().len(), 0);
    assert_eq!(body["poles"][0]["leader"]["full_name"], "Yann");
  }

  #[tokio::test]
  async fn cabinet_endpoint_includes_pole_leaders() {
    let boss = official("Marianne", "Président");
    let chief = PersonRow {
      superior_id: Some(boss.id),
      cabinet_role: Some("Chef de pôle".into()),
      ..PersonRow::new("Yann")
    };
    let id = boss.id;
    let router = make_router(vec![boss, chief]).await;

    let (status, body) =
      get_json(router, &format!("/persons/{id}/cabinet")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["grade_label"], "Chef de pôle");
  }

  #[tokio::test]
  async fn malformed_id_is_rejected() {
    let router = make_router(vec![]).await;
    let req = Request::builder()
      .uri("/persons/not-a-uuid/career")
      .body(Body::empty())
      .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }
}
