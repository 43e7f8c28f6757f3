//! Merging the four detail fetches into one sheet, and discarding sheets
//! that were superseded while loading.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
  classify::Classifier,
  view::{CareerEntry, PersonDetail, PersonSheet, Pole, StaffMember},
};

/// Combine the independent fetches for one person.
///
/// Staff members who lead a pole are listed under their pole, not in the
/// cabinet.
pub fn merge(
  person: PersonDetail,
  career: Vec<CareerEntry>,
  cabinet: Vec<StaffMember>,
  poles: Vec<Pole>,
  classifier: &impl Classifier,
) -> PersonSheet {
  let cabinet = cabinet
    .into_iter()
    .filter(|s| {
      !classifier.is_pole_leader(
        s.cabinet_role.as_deref(),
        s.grade.as_ref().map(|g| g.label.as_str()),
      )
    })
    .collect();

  PersonSheet { person, career, cabinet, poles }
}

// ─── Request tokens ──────────────────────────────────────────────────────────

/// Identifies one sheet request issued by a [`SheetTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SheetTicket(u64);

/// Tracks the most recent sheet request of one display surface.
///
/// Opening a second person's sheet while the first is still loading issues a
/// new ticket; the first load then resolves to `None` instead of overwriting
/// the newer one. In-flight loads are not cancelled.
#[derive(Debug, Default)]
pub struct SheetTracker {
  latest: AtomicU64,
}

impl SheetTracker {
  pub fn new() -> Self { Self::default() }

  /// Issue a ticket that supersedes every earlier one.
  pub fn issue(&self) -> SheetTicket {
    SheetTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
  }

  pub fn is_current(&self, ticket: SheetTicket) -> bool {
    self.latest.load(Ordering::Acquire) == ticket.0
  }
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;
  use crate::{
    classify::LabelClassifier,
    defaults::Defaults,
    record::{CollabGrade, PersonRecord},
  };

  fn staff(name: &str, cabinet_role: &str, grade: Option<&str>) -> StaffMember {
    StaffMember::from_record(
      PersonRecord {
        id: Uuid::new_v4(),
        full_name: name.to_owned(),
        cabinet_role: Some(cabinet_role.to_owned()),
        grade: grade
          .map(|g| CollabGrade { label: g.to_owned(), precedence: None }),
        ..PersonRecord::default()
      },
      &Defaults::default(),
    )
  }

  #[test]
  fn cabinet_excludes_pole_leaders() {
    let person = PersonDetail::from_record(
      PersonRecord { full_name: "X".into(), ..PersonRecord::default() },
      &Defaults::default(),
    );
    let sheet = merge(
      person,
      vec![],
      vec![
        staff("Y", "Chef de pôle Économie", None),
        staff("Z", "Conseiller", None),
        staff("V", "Conseiller", Some("Responsable de pôle")),
      ],
      vec![],
      &LabelClassifier,
    );
    let names: Vec<_> =
      sheet.cabinet.iter().map(|s| s.full_name.as_str()).collect();
    assert_eq!(names, ["Z"]);
  }

  #[test]
  fn newer_ticket_supersedes_older() {
    let tracker = SheetTracker::new();
    let first = tracker.issue();
    assert!(tracker.is_current(first));
    let second = tracker.issue();
    assert!(!tracker.is_current(first));
    assert!(tracker.is_current(second));
    assert!(second > first);
  }
}
