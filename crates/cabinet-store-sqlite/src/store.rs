//! [`SqliteStore`] — the SQLite implementation of [`RosterSource`].

use std::{collections::HashMap, path::Path};

use cabinet_core::{
  record::{CareerEvent, MinistryLink, PersonRecord, PoleRecord},
  source::RosterSource,
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Result,
  dataset::Dataset,
  encode::{RawCareer, RawLink, RawPerson, encode_date, encode_uuid},
  schema::SCHEMA,
};

// ─── Queries ─────────────────────────────────────────────────────────────────

const MEMBERS_SQL: &str = "
SELECT p.id, p.full_name, p.photo_url, p.role, p.description,
       NULL, p.cabinet_role, p.cabinet_order, NULL, NULL, NULL
FROM persons p
ORDER BY p.rowid";

const PROFILE_SQL: &str = "
SELECT p.id, p.full_name, p.photo_url, p.role, p.description,
       p.superior_id, NULL, NULL, NULL, NULL, NULL
FROM persons p
WHERE p.id = ?1";

const ALL_LINKS_SQL: &str = "
SELECT pm.person_id, pm.ministry_id, pm.is_primary, pm.role_label,
       m.id, m.name, m.short_name, m.category
FROM person_ministries pm
LEFT JOIN ministries m ON m.id = pm.ministry_id
ORDER BY pm.rowid";

const PERSON_LINKS_SQL: &str = "
SELECT pm.person_id, pm.ministry_id, pm.is_primary, pm.role_label,
       m.id, m.name, m.short_name, m.category
FROM person_ministries pm
LEFT JOIN ministries m ON m.id = pm.ministry_id
WHERE pm.person_id = ?1
ORDER BY pm.rowid";

const CAREER_SQL: &str = "
SELECT id, person_id, event_date, start_date, end_date,
       event_text, title, organisation, sort_index
FROM person_careers
WHERE person_id = ?1
ORDER BY sort_index ASC NULLS LAST, event_date DESC NULLS LAST";

const STAFF_SQL: &str = "
SELECT p.id, p.full_name, p.photo_url, p.role, p.description,
       NULL, p.cabinet_role, p.cabinet_order, p.collab_grade,
       g.label, g.precedence
FROM persons p
LEFT JOIN collab_grades g ON g.id = p.collab_grade
WHERE p.superior_id = ?1
ORDER BY g.precedence ASC NULLS LAST, p.cabinet_order ASC NULLS LAST";

// Serves pole leaders and their members alike. Every direct subordinate is a
// leader candidate; `Directory` picks the leaders with its classifier.
const SUBORDINATES_SQL: &str = "
SELECT p.id, p.full_name, p.photo_url, p.role, p.description,
       NULL, p.cabinet_role, NULL, p.collab_grade, g.label, NULL
FROM persons p
LEFT JOIN collab_grades g ON g.id = p.collab_grade
WHERE p.superior_id = ?1
ORDER BY p.full_name ASC";

fn query_persons(
  conn: &rusqlite::Connection,
  sql: &str,
  params: impl rusqlite::Params,
) -> rusqlite::Result<Vec<RawPerson>> {
  let mut stmt = conn.prepare_cached(sql)?;
  stmt
    .query_map(params, RawPerson::from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()
}

fn query_links(
  conn: &rusqlite::Connection,
  person_id: Option<&str>,
) -> rusqlite::Result<Vec<RawLink>> {
  let rows = if let Some(id) = person_id {
    let mut stmt = conn.prepare_cached(PERSON_LINKS_SQL)?;
    stmt
      .query_map(rusqlite::params![id], RawLink::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?
  } else {
    let mut stmt = conn.prepare_cached(ALL_LINKS_SQL)?;
    stmt
      .query_map([], RawLink::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?
  };
  Ok(rows)
}

/// Decode persons and attach their associations, preserving both orders.
fn with_links(
  raws: Vec<RawPerson>,
  links: Vec<RawLink>,
) -> Result<Vec<PersonRecord>> {
  let mut by_person: HashMap<Uuid, Vec<MinistryLink>> = HashMap::new();
  for raw in links {
    let (person_id, link) = raw.into_link()?;
    by_person.entry(person_id).or_default().push(link);
  }

  raws
    .into_iter()
    .map(|raw| -> Result<PersonRecord> {
      let mut person = raw.into_record()?;
      person.ministries = by_person.remove(&person.id).unwrap_or_default();
      Ok(person)
    })
    .collect()
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster data source backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert every row of `dataset` in one transaction.
  ///
  /// Foreign keys are checked at commit, so a dataset referencing a missing
  /// row is rejected as a whole.
  pub async fn import(&self, dataset: Dataset) -> Result<()> {
    let rows = dataset.len();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute_batch("PRAGMA defer_foreign_keys = ON;")?;

        for m in &dataset.ministries {
          tx.execute(
            "INSERT INTO ministries (id, name, short_name, category)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
              encode_uuid(m.id),
              m.name,
              m.short_name,
              m.category,
            ],
          )?;
        }

        for g in &dataset.grades {
          tx.execute(
            "INSERT INTO collab_grades (id, label, precedence)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![encode_uuid(g.id), g.label, g.precedence],
          )?;
        }

        for p in &dataset.persons {
          tx.execute(
            "INSERT INTO persons (
               id, full_name, photo_url, role, description,
               superior_id, cabinet_role, cabinet_order, collab_grade
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
              encode_uuid(p.id),
              p.full_name,
              p.photo_url,
              p.role,
              p.description,
              p.superior_id.map(encode_uuid),
              p.cabinet_role,
              p.cabinet_order,
              p.collab_grade.map(encode_uuid),
            ],
          )?;
        }

        for pm in &dataset.memberships {
          tx.execute(
            "INSERT INTO person_ministries (
               person_id, ministry_id, is_primary, role_label
             ) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
              encode_uuid(pm.person_id),
              encode_uuid(pm.ministry_id),
              pm.is_primary,
              pm.role_label,
            ],
          )?;
        }

        for c in &dataset.careers {
          tx.execute(
            "INSERT INTO person_careers (
               id, person_id, event_date, start_date, end_date,
               event_text, title, organisation, sort_index
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
              encode_uuid(c.id),
              encode_uuid(c.person_id),
              c.event_date.map(encode_date),
              c.start_date.map(encode_date),
              c.end_date.map(encode_date),
              c.event_text,
              c.title,
              c.organisation,
              c.sort_index,
            ],
          )?;
        }

        tx.commit()?;
        Ok(())
      })
      .await?;

    tracing::info!(rows, "dataset imported");
    Ok(())
  }
}

// ─── RosterSource impl ───────────────────────────────────────────────────────

impl RosterSource for SqliteStore {
  type Error = crate::Error;

  async fn government_members(&self) -> Result<Vec<PersonRecord>> {
    let (raws, links) = self
      .conn
      .call(|conn| {
        let raws = query_persons(conn, MEMBERS_SQL, [])?;
        let links = query_links(conn, None)?;
        Ok((raws, links))
      })
      .await?;

    with_links(raws, links)
  }

  async fn person_profile(&self, id: Uuid) -> Result<Option<PersonRecord>> {
    let id_str = encode_uuid(id);

    let found = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(
            PROFILE_SQL,
            rusqlite::params![id_str],
            RawPerson::from_row,
          )
          .optional()?;
        match raw {
          Some(raw) => Ok(Some((raw, query_links(conn, Some(&id_str))?))),
          None => Ok(None),
        }
      })
      .await?;

    match found {
      Some((raw, links)) => Ok(with_links(vec![raw], links)?.pop()),
      None => Ok(None),
    }
  }

  async fn career_events(&self, person_id: Uuid) -> Result<Vec<CareerEvent>> {
    let id_str = encode_uuid(person_id);

    let raws: Vec<RawCareer> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(CAREER_SQL)?;
        let rows = stmt
          .query_map(rusqlite::params![id_str], RawCareer::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCareer::into_event).collect()
  }

  async fn direct_staff(&self, superior_id: Uuid) -> Result<Vec<PersonRecord>> {
    let id_str = encode_uuid(superior_id);

    let raws = self
      .conn
      .call(move |conn| {
        Ok(query_persons(conn, STAFF_SQL, rusqlite::params![id_str])?)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_record).collect()
  }

  async fn pole_leaders(&self, superior_id: Uuid) -> Result<Vec<PoleRecord>> {
    let id_str = encode_uuid(superior_id);

    let raws: Vec<(RawPerson, Vec<RawPerson>)> = self
      .conn
      .call(move |conn| {
        let leaders = query_persons(
          conn,
          SUBORDINATES_SQL,
          rusqlite::params![id_str],
        )?;
        let mut rows = Vec::with_capacity(leaders.len());
        for leader in leaders {
          let members = query_persons(
            conn,
            SUBORDINATES_SQL,
            rusqlite::params![leader.id],
          )?;
          rows.push((leader, members));
        }
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(|(leader, members)| -> Result<PoleRecord> {
        Ok(PoleRecord {
          leader:       leader.into_record()?,
          subordinates: members
            .into_iter()
            .map(RawPerson::into_record)
            .collect::<Result<_>>()?,
        })
      })
      .collect()
  }
}
