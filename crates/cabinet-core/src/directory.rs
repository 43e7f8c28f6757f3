//! [`Directory`] — the aggregation entry points, bound to an explicit data
//! source handle.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
  Error, Result,
  classify::{Classifier, LabelClassifier},
  defaults::Defaults,
  order::{sort_career, sort_staff},
  poles, roster,
  sheet::{self, SheetTicket, SheetTracker},
  source::RosterSource,
  view::{CareerEntry, PersonDetail, PersonSheet, Pole, Roster, StaffMember},
};

/// Assembles roster and sheet view models from a [`RosterSource`].
///
/// Every call issues fresh queries and returns an independently owned tree.
/// Failures are never retried.
#[derive(Debug, Clone)]
pub struct Directory<S, C = LabelClassifier> {
  source:     S,
  classifier: C,
  defaults:   Defaults,
}

impl<S: RosterSource> Directory<S> {
  pub fn new(source: S) -> Self {
    Self::with_classifier(source, LabelClassifier)
  }
}

fn failed<E>(query: &'static str) -> impl FnOnce(E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  move |e| {
    warn!(query, error = %e, "data source call failed");
    Error::data_source(e)
  }
}

impl<S: RosterSource, C: Classifier> Directory<S, C> {
  pub fn with_classifier(source: S, classifier: C) -> Self {
    Self { source, classifier, defaults: Defaults::default() }
  }

  pub fn with_defaults(mut self, defaults: Defaults) -> Self {
    self.defaults = defaults;
    self
  }

  pub fn source(&self) -> &S { &self.source }

  pub fn defaults(&self) -> &Defaults { &self.defaults }

  /// Load every official and split them into the roster grid.
  pub async fn roster(&self) -> Result<Roster> {
    let persons = self
      .source
      .government_members()
      .await
      .map_err(failed("government_members"))?;
    let fetched = persons.len();
    let roster = roster::assemble(persons, &self.classifier, &self.defaults);
    debug!(fetched, shown = roster.len(), "roster assembled");
    Ok(roster)
  }

  /// Load one person's profile with all their ministry associations.
  pub async fn person(&self, id: Uuid) -> Result<PersonDetail> {
    let person = self
      .source
      .person_profile(id)
      .await
      .map_err(failed("person_profile"))?
      .ok_or(Error::NotFound(id))?;
    Ok(PersonDetail::from_record(person, &self.defaults))
  }

  /// Load a person's career timeline. An empty timeline is not an error.
  pub async fn career(&self, person_id: Uuid) -> Result<Vec<CareerEntry>> {
    let mut events = self
      .source
      .career_events(person_id)
      .await
      .map_err(failed("career_events"))?;
    sort_career(&mut events);
    debug!(events = events.len(), "career loaded");
    Ok(
      events
        .into_iter()
        .map(|e| CareerEntry::from_event(e, &self.defaults))
        .collect(),
    )
  }

  /// Load every direct subordinate of a person, pole leaders included.
  pub async fn cabinet(&self, person_id: Uuid) -> Result<Vec<StaffMember>> {
    let mut staff = self
      .source
      .direct_staff(person_id)
      .await
      .map_err(failed("direct_staff"))?;
    // A self-referencing row is not its own staff.
    staff.retain(|s| s.id != person_id);
    sort_staff(&mut staff);
    debug!(staff = staff.len(), "cabinet loaded");
    Ok(
      staff
        .into_iter()
        .map(|s| StaffMember::from_record(s, &self.defaults))
        .collect(),
    )
  }

  /// Load the poles led by a person's direct subordinates.
  pub async fn poles(&self, person_id: Uuid) -> Result<Vec<Pole>> {
    let rows = self
      .source
      .pole_leaders(person_id)
      .await
      .map_err(failed("pole_leaders"))?;
    let poles =
      poles::assemble(person_id, rows, &self.classifier, &self.defaults);
    debug!(poles = poles.len(), "poles loaded");
    Ok(poles)
  }

  /// Load the four parts of a person's sheet concurrently and merge them.
  ///
  /// The first failing fetch fails the whole sheet; no partial sheet is ever
  /// produced.
  pub async fn sheet(&self, id: Uuid) -> Result<PersonSheet> {
    let (person, career, cabinet, poles) = tokio::try_join!(
      self.person(id),
      self.career(id),
      self.cabinet(id),
      self.poles(id),
    )?;
    debug!(person = %id, "sheet loaded");
    Ok(sheet::merge(person, career, cabinet, poles, &self.classifier))
  }

  /// Like [`Self::sheet`], but resolves to `None` if `ticket` was superseded
  /// on `tracker` before the load finished. A superseded load never reports
  /// its error either.
  pub async fn sheet_for(
    &self,
    tracker: &SheetTracker,
    ticket: SheetTicket,
    id: Uuid,
  ) -> Result<Option<PersonSheet>> {
    let sheet = self.sheet(id).await;
    if !tracker.is_current(ticket) {
      debug!(person = %id, "discarding stale sheet");
      return Ok(None);
    }
    sheet.map(Some)
  }
}
