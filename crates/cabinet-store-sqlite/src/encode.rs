//! Encoding and decoding helpers between domain records and the plain-text
//! representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings and dates as ISO 8601
//! (`YYYY-MM-DD`) strings.

use chrono::NaiveDate;
use cabinet_core::record::{
  CareerEvent, CollabGrade, Ministry, MinistryLink, PersonRecord,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

fn decode_opt_uuid(s: Option<String>) -> Result<Option<Uuid>> {
  s.as_deref().map(decode_uuid).transpose()
}

// ─── NaiveDate ────────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

fn decode_opt_date(s: Option<String>) -> Result<Option<NaiveDate>> {
  s.as_deref().map(decode_date).transpose()
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `persons` row left-joined with
/// `collab_grades`.
///
/// Every person query selects the same eleven columns in this order; a query
/// that does not request a column selects `NULL` in its place.
pub struct RawPerson {
  pub id:               String,
  pub full_name:        String,
  pub photo_url:        Option<String>,
  pub role:             Option<String>,
  pub description:      Option<String>,
  pub superior_id:      Option<String>,
  pub cabinet_role:     Option<String>,
  pub cabinet_order:    Option<i64>,
  pub collab_grade:     Option<String>,
  // collab_grades join
  pub grade_label:      Option<String>,
  pub grade_precedence: Option<i64>,
}

impl RawPerson {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:               row.get(0)?,
      full_name:        row.get(1)?,
      photo_url:        row.get(2)?,
      role:             row.get(3)?,
      description:      row.get(4)?,
      superior_id:      row.get(5)?,
      cabinet_role:     row.get(6)?,
      cabinet_order:    row.get(7)?,
      collab_grade:     row.get(8)?,
      grade_label:      row.get(9)?,
      grade_precedence: row.get(10)?,
    })
  }

  pub fn into_record(self) -> Result<PersonRecord> {
    let grade = self.grade_label.map(|label| CollabGrade {
      label,
      precedence: self.grade_precedence,
    });

    Ok(PersonRecord {
      id: decode_uuid(&self.id)?,
      full_name: self.full_name,
      photo_url: self.photo_url,
      role: self.role,
      description: self.description,
      superior_id: decode_opt_uuid(self.superior_id)?,
      cabinet_role: self.cabinet_role,
      cabinet_order: self.cabinet_order,
      collab_grade: decode_opt_uuid(self.collab_grade)?,
      grade,
      ministries: Vec::new(),
    })
  }
}

/// Raw values read from `person_ministries` left-joined with `ministries`.
pub struct RawLink {
  pub person_id:   String,
  pub ministry_id: String,
  pub is_primary:  bool,
  pub role_label:  Option<String>,
  // ministries join
  pub m_id:        Option<String>,
  pub m_name:      Option<String>,
  pub m_short:     Option<String>,
  pub m_category:  Option<String>,
}

impl RawLink {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      person_id:   row.get(0)?,
      ministry_id: row.get(1)?,
      is_primary:  row.get(2)?,
      role_label:  row.get(3)?,
      m_id:        row.get(4)?,
      m_name:      row.get(5)?,
      m_short:     row.get(6)?,
      m_category:  row.get(7)?,
    })
  }

  /// Decode into `(person_id, link)`.
  pub fn into_link(self) -> Result<(Uuid, MinistryLink)> {
    let ministry = match (self.m_id, self.m_name) {
      (Some(id), Some(name)) => Some(Ministry {
        id: decode_uuid(&id)?,
        name,
        short_name: self.m_short,
        category: self.m_category,
      }),
      _ => None,
    };

    Ok((decode_uuid(&self.person_id)?, MinistryLink {
      ministry_id: decode_uuid(&self.ministry_id)?,
      is_primary: self.is_primary,
      role_label: self.role_label,
      ministry,
    }))
  }
}

/// Raw values read from a `person_careers` row.
pub struct RawCareer {
  pub id:           String,
  pub person_id:    String,
  pub event_date:   Option<String>,
  pub start_date:   Option<String>,
  pub end_date:     Option<String>,
  pub event_text:   Option<String>,
  pub title:        Option<String>,
  pub organisation: Option<String>,
  pub sort_index:   Option<i64>,
}

impl RawCareer {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      person_id:    row.get(1)?,
      event_date:   row.get(2)?,
      start_date:   row.get(3)?,
      end_date:     row.get(4)?,
      event_text:   row.get(5)?,
      title:        row.get(6)?,
      organisation: row.get(7)?,
      sort_index:   row.get(8)?,
    })
  }

  pub fn into_event(self) -> Result<CareerEvent> {
    Ok(CareerEvent {
      id:           decode_uuid(&self.id)?,
      person_id:    decode_uuid(&self.person_id)?,
      event_date:   decode_opt_date(self.event_date)?,
      start_date:   decode_opt_date(self.start_date)?,
      end_date:     decode_opt_date(self.end_date)?,
      event_text:   self.event_text,
      title:        self.title,
      organisation: self.organisation,
      sort_index:   self.sort_index,
    })
  }
}
