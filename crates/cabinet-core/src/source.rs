//! The `RosterSource` trait: the only boundary between the aggregation logic
//! and the relational store.
//!
//! Each method corresponds to one fixed query shape. Implementations should
//! honour the documented ordering, but the loaders in
//! [`Directory`](crate::directory::Directory) re-apply every ordering and
//! classification rule, so a backend that returns rows in arbitrary order (or
//! over-approximates the pole filter) still yields correct view models.

use std::future::Future;

use uuid::Uuid;

use crate::record::{CareerEvent, PersonRecord, PoleRecord};

/// Abstraction over a read-only relational data source.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RosterSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every person with `id, full_name, photo_url, role, description,
  /// cabinet_role, cabinet_order` and their ministry associations (each with
  /// its nested ministry), associations in stored order.
  fn government_members(
    &self,
  ) -> impl Future<Output = Result<Vec<PersonRecord>, Self::Error>> + Send + '_;

  /// One person with `id, full_name, photo_url, role, description,
  /// superior_id` and their ministry associations. `None` if no row matches.
  fn person_profile(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<PersonRecord>, Self::Error>>
  + Send
  + '_;

  /// Career events of one person, ordered by `sort_index ASC NULLS LAST`,
  /// then `event_date DESC NULLS LAST`.
  fn career_events(
    &self,
    person_id: Uuid,
  ) -> impl Future<Output = Result<Vec<CareerEvent>, Self::Error>> + Send + '_;

  /// Persons whose `superior_id` is `superior_id`, with their grade
  /// (`label, precedence`), ordered by `precedence ASC NULLS LAST`, then
  /// `cabinet_order ASC NULLS LAST`.
  fn direct_staff(
    &self,
    superior_id: Uuid,
  ) -> impl Future<Output = Result<Vec<PersonRecord>, Self::Error>> + Send + '_;

  /// Direct subordinates of `superior_id` that may lead a pole (those whose
  /// `cabinet_role` or grade label contains "pôle"), ordered by
  /// `full_name ASC`, each with their own direct subordinates nested.
  ///
  /// Returning extra candidates is fine: leaders are picked with the
  /// [`Classifier`](crate::classify::Classifier) afterwards.
  fn pole_leaders(
    &self,
    superior_id: Uuid,
  ) -> impl Future<Output = Result<Vec<PoleRecord>, Self::Error>> + Send + '_;
}
