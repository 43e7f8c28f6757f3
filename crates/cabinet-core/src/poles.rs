//! Building poles from the leader rows a source returned.

use std::collections::HashSet;

use uuid::Uuid;

use crate::{
  classify::Classifier,
  defaults::Defaults,
  order::{compare_names, sort_by_name},
  record::{PersonRecord, PoleRecord},
  view::{Pole, PoleMember},
};

fn leads_pole(person: &PersonRecord, classifier: &impl Classifier) -> bool {
  classifier
    .is_pole_leader(person.cabinet_role.as_deref(), person.grade_label())
}

/// Turn raw pole rows under `root` into poles.
///
/// Rows whose leader does not classify as a pole leader are discarded. A
/// pole's members are the leader's direct subordinates minus any nested pole
/// leader. The hierarchy is never assumed acyclic: `root` and the leader
/// itself are never listed as members, and each person appears at most once
/// per pole.
pub fn assemble(
  root: Uuid,
  rows: Vec<PoleRecord>,
  classifier: &impl Classifier,
  defaults: &Defaults,
) -> Vec<Pole> {
  let mut rows: Vec<PoleRecord> = rows
    .into_iter()
    .filter(|row| row.leader.id != root && leads_pole(&row.leader, classifier))
    .collect();
  rows.sort_by(|a, b| compare_names(&a.leader.full_name, &b.leader.full_name));

  rows
    .into_iter()
    .map(|row| {
      let mut seen = HashSet::from([root, row.leader.id]);
      let mut members: Vec<PersonRecord> = row
        .subordinates
        .into_iter()
        .filter(|m| !leads_pole(m, classifier))
        .filter(|m| seen.insert(m.id))
        .collect();
      sort_by_name(&mut members);

      Pole {
        leader:  PoleMember::leader(row.leader, defaults),
        members: members
          .into_iter()
          .map(|m| PoleMember::member(m, defaults))
          .collect(),
      }
    })
    .collect()
}
