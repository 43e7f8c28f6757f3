//! Rows as returned by a [`RosterSource`](crate::source::RosterSource).
//!
//! These are read-only projections of the relational schema. Columns that a
//! particular query does not request are left at `None` (or empty), so one
//! [`PersonRecord`] type covers every person-shaped query.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Ministries ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ministry {
  pub id:         Uuid,
  pub name:       String,
  pub short_name: Option<String>,
  pub category:   Option<String>,
}

/// One row of `person_ministries` with its nested ministry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinistryLink {
  pub ministry_id: Uuid,
  pub is_primary:  bool,
  pub role_label:  Option<String>,
  /// `None` when the referenced ministry row is missing.
  pub ministry:    Option<Ministry>,
}

// ─── Grades ──────────────────────────────────────────────────────────────────

/// A staff grade; lower `precedence` is more senior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollabGrade {
  pub label:      String,
  pub precedence: Option<i64>,
}

// ─── Persons ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
  pub id:            Uuid,
  pub full_name:     String,
  pub photo_url:     Option<String>,
  /// Free-text role, e.g. "Ministre de la Santé".
  pub role:          Option<String>,
  pub description:   Option<String>,
  pub superior_id:   Option<Uuid>,
  pub cabinet_role:  Option<String>,
  pub cabinet_order: Option<i64>,
  /// Foreign key into `collab_grades`.
  pub collab_grade:  Option<Uuid>,
  /// The joined grade row, when requested and present.
  pub grade:         Option<CollabGrade>,
  /// Ministry associations in the order the source returned them.
  #[serde(default)]
  pub ministries:    Vec<MinistryLink>,
}

impl PersonRecord {
  pub fn grade_label(&self) -> Option<&str> {
    self.grade.as_ref().map(|g| g.label.as_str())
  }

  pub fn grade_precedence(&self) -> Option<i64> {
    self.grade.as_ref().and_then(|g| g.precedence)
  }
}

/// A direct subordinate matched as a pole leader, with their own direct
/// subordinates (one further level down).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoleRecord {
  pub leader:       PersonRecord,
  pub subordinates: Vec<PersonRecord>,
}

// ─── Career ──────────────────────────────────────────────────────────────────

/// One entry of `person_careers`. Either `event_date` or the
/// `start_date`/`end_date` pair is normally set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerEvent {
  pub id:           Uuid,
  pub person_id:    Uuid,
  pub event_date:   Option<NaiveDate>,
  pub start_date:   Option<NaiveDate>,
  pub end_date:     Option<NaiveDate>,
  pub event_text:   Option<String>,
  pub title:        Option<String>,
  pub organisation: Option<String>,
  pub sort_index:   Option<i64>,
}
