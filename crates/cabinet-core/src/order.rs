//! Ordering rules for the roster, the cabinet, poles and career timelines.
//!
//! All sorts are stable, so rows that compare equal keep the order the
//! source returned them in.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::record::{CareerEvent, PersonRecord};

/// Ascending, with `None` after every present value.
pub fn nulls_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => a.cmp(&b),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

/// Descending, with `None` after every present value.
pub fn desc_nulls_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => b.cmp(&a),
    (a, b) => nulls_last(a, b),
  }
}

/// A comparison key that ignores case and diacritics, so "Élise" sorts with
/// "elise" and before "Fabien".
pub fn collation_key(name: &str) -> String {
  name
    .nfd()
    .filter(|c| !is_combining_mark(*c))
    .flat_map(char::to_lowercase)
    .collect()
}

/// Case- and accent-insensitive name order; exact text breaks ties so the
/// result is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
  collation_key(a)
    .cmp(&collation_key(b))
    .then_with(|| a.cmp(b))
}

/// Roster "others": `cabinet_order` ascending (missing counts as the largest
/// order), then full name.
pub fn sort_ministers(persons: &mut [PersonRecord]) {
  persons.sort_by(|a, b| {
    let oa = a.cabinet_order.unwrap_or(i64::MAX);
    let ob = b.cabinet_order.unwrap_or(i64::MAX);
    oa.cmp(&ob)
      .then_with(|| compare_names(&a.full_name, &b.full_name))
  });
}

/// Cabinet staff: grade precedence ascending, then `cabinet_order`
/// ascending, missing values last for both.
pub fn sort_staff(persons: &mut [PersonRecord]) {
  persons.sort_by(|a, b| {
    nulls_last(a.grade_precedence(), b.grade_precedence())
      .then_with(|| nulls_last(a.cabinet_order, b.cabinet_order))
  });
}

/// Pole leaders and pole members: full name ascending.
pub fn sort_by_name(persons: &mut [PersonRecord]) {
  persons.sort_by(|a, b| compare_names(&a.full_name, &b.full_name));
}

/// Career timeline: `sort_index` ascending, then most recent `event_date`
/// first, missing values last for both.
pub fn sort_career(events: &mut [CareerEvent]) {
  events.sort_by(|a, b| {
    nulls_last(a.sort_index, b.sort_index)
      .then_with(|| desc_nulls_last(a.event_date, b.event_date))
  });
}
