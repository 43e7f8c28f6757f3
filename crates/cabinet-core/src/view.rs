//! View models handed to the rendering layer.
//!
//! Every optional display field is resolved here against [`Defaults`], so a
//! renderer can print any field without further fallbacks. The raw optional
//! columns are kept alongside for consumers that need them.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::{
  defaults::{Defaults, first_of},
  record::{CareerEvent, CollabGrade, Ministry, MinistryLink, PersonRecord},
};

// ─── Roster ──────────────────────────────────────────────────────────────────

/// A roster card: one government member with their primary ministry resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
  pub id:             Uuid,
  pub full_name:      String,
  pub photo_url:      String,
  pub role:           Option<String>,
  /// `role`, or the configured fallback tag.
  pub role_tag:       String,
  pub description:    Option<String>,
  /// `description` cut to the configured length.
  pub summary:        String,
  pub cabinet_role:   Option<String>,
  pub cabinet_order:  Option<i64>,
  /// The primary ministry (flagged, else first association).
  pub ministry:       Option<Ministry>,
  /// The primary association's role label.
  pub role_label:     Option<String>,
  /// Ministry short name, else role label, else the fallback.
  pub ministry_label: String,
}

/// The primary association: the one flagged primary, else the first.
pub fn primary_link(links: &[MinistryLink]) -> Option<&MinistryLink> {
  links.iter().find(|l| l.is_primary).or_else(|| links.first())
}

impl Member {
  pub fn from_record(person: PersonRecord, defaults: &Defaults) -> Self {
    let primary = primary_link(&person.ministries);
    let ministry = primary.and_then(|l| l.ministry.clone());
    let role_label = primary.and_then(|l| l.role_label.clone());
    let ministry_label = first_of(
      [
        ministry.as_ref().and_then(|m| m.short_name.as_deref()),
        role_label.as_deref(),
      ],
      &defaults.ministry_label,
    );

    Self {
      id: person.id,
      photo_url: defaults.photo(person.photo_url.as_deref()),
      role_tag: first_of([person.role.as_deref()], &defaults.role_tag),
      summary: defaults.summary(person.description.as_deref()),
      full_name: person.full_name,
      role: person.role,
      description: person.description,
      cabinet_role: person.cabinet_role,
      cabinet_order: person.cabinet_order,
      ministry,
      role_label,
      ministry_label,
    }
  }
}

/// The grid: president and prime minister first, then the other ministers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
  pub president:      Option<Member>,
  pub prime_minister: Option<Member>,
  pub others:         Vec<Member>,
}

impl Roster {
  /// Members in grid order.
  pub fn iter(&self) -> impl Iterator<Item = &Member> {
    self
      .president
      .iter()
      .chain(self.prime_minister.iter())
      .chain(self.others.iter())
  }

  pub fn len(&self) -> usize { self.iter().count() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

// ─── Person detail ───────────────────────────────────────────────────────────

/// A person's profile with all their ministry associations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonDetail {
  pub id:          Uuid,
  pub full_name:   String,
  pub photo_url:   String,
  pub role:        Option<String>,
  pub description: Option<String>,
  /// `description`, or the configured fallback biography.
  pub biography:   String,
  pub superior_id: Option<Uuid>,
  pub ministries:  Vec<MinistryLink>,
  /// First association's role label, else `role`.
  pub headline:    String,
  /// One badge per association: ministry short name, else role label.
  pub badges:      Vec<String>,
}

impl PersonDetail {
  pub fn from_record(person: PersonRecord, defaults: &Defaults) -> Self {
    let headline = first_of(
      [
        person.ministries.first().and_then(|l| l.role_label.as_deref()),
        person.role.as_deref(),
      ],
      "",
    );
    let badges = person
      .ministries
      .iter()
      .filter_map(|l| {
        l.ministry
          .as_ref()
          .and_then(|m| m.short_name.as_deref())
          .filter(|s| !s.is_empty())
          .or(l.role_label.as_deref().filter(|s| !s.is_empty()))
          .map(str::to_owned)
      })
      .collect();

    Self {
      id: person.id,
      photo_url: defaults.photo(person.photo_url.as_deref()),
      biography: first_of([person.description.as_deref()], &defaults.biography),
      full_name: person.full_name,
      role: person.role,
      description: person.description,
      superior_id: person.superior_id,
      ministries: person.ministries,
      headline,
      badges,
    }
  }
}

// ─── Career ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerEntry {
  pub id:           Uuid,
  pub event_date:   Option<NaiveDate>,
  pub start_date:   Option<NaiveDate>,
  pub end_date:     Option<NaiveDate>,
  pub event_text:   Option<String>,
  pub title:        Option<String>,
  pub organisation: Option<String>,
  pub sort_index:   Option<i64>,
  /// `event_date`, else `start_date`, else the fallback.
  pub period:       String,
  /// `event_text`, else `title`, else the fallback.
  pub heading:      String,
}

impl CareerEntry {
  pub fn from_event(event: CareerEvent, defaults: &Defaults) -> Self {
    let period = event
      .event_date
      .or(event.start_date)
      .map(|d| d.to_string())
      .unwrap_or_else(|| defaults.undated.clone());
    let heading = first_of(
      [event.event_text.as_deref(), event.title.as_deref()],
      &defaults.untitled,
    );

    Self {
      id: event.id,
      event_date: event.event_date,
      start_date: event.start_date,
      end_date: event.end_date,
      event_text: event.event_text,
      title: event.title,
      organisation: event.organisation,
      sort_index: event.sort_index,
      period,
      heading,
    }
  }
}

// ─── Cabinet ─────────────────────────────────────────────────────────────────

/// A direct subordinate shown in a person's cabinet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffMember {
  pub id:            Uuid,
  pub full_name:     String,
  pub role:          Option<String>,
  pub photo_url:     String,
  pub description:   Option<String>,
  pub cabinet_role:  Option<String>,
  pub cabinet_order: Option<i64>,
  pub grade:         Option<CollabGrade>,
  /// Grade label, else `cabinet_role`, else the fallback.
  pub grade_label:   String,
}

impl StaffMember {
  pub fn from_record(person: PersonRecord, defaults: &Defaults) -> Self {
    let grade_label = first_of(
      [person.grade_label(), person.cabinet_role.as_deref()],
      &defaults.staff_grade,
    );

    Self {
      id: person.id,
      photo_url: defaults.photo(person.photo_url.as_deref()),
      full_name: person.full_name,
      role: person.role,
      description: person.description,
      cabinet_role: person.cabinet_role,
      cabinet_order: person.cabinet_order,
      grade: person.grade,
      grade_label,
    }
  }
}

// ─── Poles ───────────────────────────────────────────────────────────────────

/// A person appearing in a pole, as its leader or as a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoleMember {
  pub id:           Uuid,
  pub full_name:    String,
  pub role:         Option<String>,
  pub photo_url:    String,
  pub description:  Option<String>,
  pub cabinet_role: Option<String>,
  pub grade_label:  Option<String>,
  pub label:        String,
}

impl PoleMember {
  fn new(person: PersonRecord, label: String, defaults: &Defaults) -> Self {
    Self {
      id: person.id,
      photo_url: defaults.photo(person.photo_url.as_deref()),
      grade_label: person.grade.map(|g| g.label),
      full_name: person.full_name,
      role: person.role,
      description: person.description,
      cabinet_role: person.cabinet_role,
      label,
    }
  }

  /// Label: `cabinet_role`, else grade label, else the pole-title fallback.
  pub fn leader(person: PersonRecord, defaults: &Defaults) -> Self {
    let label = first_of(
      [person.cabinet_role.as_deref(), person.grade_label()],
      &defaults.pole_title,
    );
    Self::new(person, label, defaults)
  }

  /// Label: `cabinet_role`, else grade label, else `role`, else the member
  /// fallback.
  pub fn member(person: PersonRecord, defaults: &Defaults) -> Self {
    let label = first_of(
      [
        person.cabinet_role.as_deref(),
        person.grade_label(),
        person.role.as_deref(),
      ],
      &defaults.pole_member,
    );
    Self::new(person, label, defaults)
  }
}

/// A delegation grouping led by one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pole {
  pub leader:  PoleMember,
  /// Ordered by full name.
  pub members: Vec<PoleMember>,
}

// ─── Sheet ───────────────────────────────────────────────────────────────────

/// The merged detail view: profile plus career, cabinet and poles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonSheet {
  #[serde(flatten)]
  pub person:  PersonDetail,
  pub career:  Vec<CareerEntry>,
  pub cabinet: Vec<StaffMember>,
  pub poles:   Vec<Pole>,
}
