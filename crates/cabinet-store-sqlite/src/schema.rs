//! SQL schema for the roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS ministries (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    short_name  TEXT,
    category    TEXT
);

-- Lower precedence = more senior.
CREATE TABLE IF NOT EXISTS collab_grades (
    id          TEXT PRIMARY KEY,
    label       TEXT NOT NULL,
    precedence  INTEGER
);

-- superior_id is a self-reference; cycles are not prevented here.
CREATE TABLE IF NOT EXISTS persons (
    id             TEXT PRIMARY KEY,
    full_name      TEXT NOT NULL,
    photo_url      TEXT,
    role           TEXT,
    description    TEXT,
    superior_id    TEXT REFERENCES persons(id),
    cabinet_role   TEXT,
    cabinet_order  INTEGER,
    collab_grade   TEXT REFERENCES collab_grades(id)
);

-- Association order is rowid order.
CREATE TABLE IF NOT EXISTS person_ministries (
    person_id    TEXT NOT NULL REFERENCES persons(id),
    ministry_id  TEXT NOT NULL REFERENCES ministries(id),
    is_primary   INTEGER NOT NULL DEFAULT 0,
    role_label   TEXT,
    UNIQUE (person_id, ministry_id)
);

CREATE TABLE IF NOT EXISTS person_careers (
    id            TEXT PRIMARY KEY,
    person_id     TEXT NOT NULL REFERENCES persons(id),
    event_date    TEXT,            -- ISO 8601 date
    start_date    TEXT,
    end_date      TEXT,
    event_text    TEXT,
    title         TEXT,
    organisation  TEXT,
    sort_index    INTEGER
);

CREATE INDEX IF NOT EXISTS persons_superior_idx      ON persons(superior_id);
CREATE INDEX IF NOT EXISTS person_ministries_idx     ON person_ministries(person_id);
CREATE INDEX IF NOT EXISTS person_careers_person_idx ON person_careers(person_id);

PRAGMA user_version = 1;
";
