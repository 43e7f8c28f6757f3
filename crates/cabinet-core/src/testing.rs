//! An in-memory [`RosterSource`] for unit tests.

use thiserror::Error;
use uuid::Uuid;

use crate::{
  classify::{Classifier, LabelClassifier},
  record::{CareerEvent, PersonRecord, PoleRecord},
  source::RosterSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
  Members,
  Profile,
  Career,
  Staff,
  Poles,
}

#[derive(Debug, Error)]
#[error("injected failure on {0:?}")]
pub struct FakeError(Query);

/// Answers every query from a flat person list. Rows come back in reverse
/// insertion order so tests never rely on source ordering.
#[derive(Debug, Clone, Default)]
pub struct FakeSource {
  persons: Vec<PersonRecord>,
  careers: Vec<CareerEvent>,
  fail:    Option<Query>,
}

pub fn person(
  name: &str,
  role: Option<&str>,
  superior_id: Option<Uuid>,
  cabinet_role: Option<&str>,
) -> PersonRecord {
  PersonRecord {
    id: Uuid::new_v4(),
    full_name: name.to_owned(),
    role: role.map(str::to_owned),
    superior_id,
    cabinet_role: cabinet_role.map(str::to_owned),
    ..PersonRecord::default()
  }
}

impl FakeSource {
  pub fn new(persons: Vec<PersonRecord>) -> Self {
    Self { persons, ..Self::default() }
  }

  pub fn with_careers(mut self, careers: Vec<CareerEvent>) -> Self {
    self.careers = careers;
    self
  }

  pub fn failing(mut self, query: Query) -> Self {
    self.fail = Some(query);
    self
  }

  fn check(&self, query: Query) -> Result<(), FakeError> {
    match self.fail {
      Some(q) if q == query => Err(FakeError(query)),
      _ => Ok(()),
    }
  }

  fn under(&self, superior: Uuid) -> Vec<PersonRecord> {
    self
      .persons
      .iter()
      .rev()
      .filter(|p| p.superior_id == Some(superior))
      .cloned()
      .collect()
  }
}

impl RosterSource for FakeSource {
  type Error = FakeError;

  async fn government_members(&self) -> Result<Vec<PersonRecord>, FakeError> {
    self.check(Query::Members)?;
    Ok(self.persons.iter().rev().cloned().collect())
  }

  async fn person_profile(
    &self,
    id: Uuid,
  ) -> Result<Option<PersonRecord>, FakeError> {
    self.check(Query::Profile)?;
    Ok(self.persons.iter().find(|p| p.id == id).cloned())
  }

  async fn career_events(
    &self,
    person_id: Uuid,
  ) -> Result<Vec<CareerEvent>, FakeError> {
    self.check(Query::Career)?;
    Ok(
      self
        .careers
        .iter()
        .rev()
        .filter(|e| e.person_id == person_id)
        .cloned()
        .collect(),
    )
  }

  async fn direct_staff(
    &self,
    superior_id: Uuid,
  ) -> Result<Vec<PersonRecord>, FakeError> {
    self.check(Query::Staff)?;
    Ok(self.under(superior_id))
  }

  async fn pole_leaders(
    &self,
    superior_id: Uuid,
  ) -> Result<Vec<PoleRecord>, FakeError> {
    self.check(Query::Poles)?;
    Ok(
      self
        .under(superior_id)
        .into_iter()
        .filter(|p| {
          LabelClassifier
            .is_pole_leader(p.cabinet_role.as_deref(), p.grade_label())
        })
        .map(|leader| PoleRecord {
          subordinates: self.under(leader.id),
          leader,
        })
        .collect(),
    )
  }
}
