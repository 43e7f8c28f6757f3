//! A JSON snapshot of the whole schema, used to seed a store.

use std::path::Path;

use cabinet_core::record::{CareerEvent, Ministry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRow {
  pub id:         Uuid,
  pub label:      String,
  pub precedence: Option<i64>,
}

/// One `persons` row. References are plain ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonRow {
  pub id:            Uuid,
  pub full_name:     String,
  pub photo_url:     Option<String>,
  pub role:          Option<String>,
  pub description:   Option<String>,
  pub superior_id:   Option<Uuid>,
  pub cabinet_role:  Option<String>,
  pub cabinet_order: Option<i64>,
  pub collab_grade:  Option<Uuid>,
}

impl PersonRow {
  pub fn new(full_name: impl Into<String>) -> Self {
    Self { id: Uuid::new_v4(), full_name: full_name.into(), ..Self::default() }
  }
}

/// One `person_ministries` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRow {
  pub person_id:   Uuid,
  pub ministry_id: Uuid,
  #[serde(default)]
  pub is_primary:  bool,
  pub role_label:  Option<String>,
}

/// Rows for every table. Rows are inserted in list order; foreign keys are
/// checked only once the whole dataset is in, so superiors may be listed
/// after their subordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
  pub ministries:  Vec<Ministry>,
  pub grades:      Vec<GradeRow>,
  pub persons:     Vec<PersonRow>,
  pub memberships: Vec<MembershipRow>,
  pub careers:     Vec<CareerEvent>,
}

impl Dataset {
  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let raw = std::fs::read_to_string(path)?;
    Self::from_json(&raw)
  }

  /// Total row count across all tables.
  pub fn len(&self) -> usize {
    self.ministries.len()
      + self.grades.len()
      + self.persons.len()
      + self.memberships.len()
      + self.careers.len()
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}
