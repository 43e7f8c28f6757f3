//! Splitting the full person set into the roster grid.

use crate::{
  classify::{Classifier, RoleKind},
  defaults::Defaults,
  order::sort_ministers,
  record::PersonRecord,
  view::{Member, Roster},
};

/// Pick the president and the prime minister (the first person of each
/// kind), keep every other ministerial person, and drop the rest.
///
/// Persons without a `role` are never part of the roster.
pub fn assemble(
  persons: Vec<PersonRecord>,
  classifier: &impl Classifier,
  defaults: &Defaults,
) -> Roster {
  let mut president = None;
  let mut prime_minister = None;
  let mut others = Vec::new();

  for person in persons {
    let Some(role) = person.role.as_deref() else {
      continue;
    };
    let kind = classifier.role_kind(role);
    let minister = classifier.is_minister(role);
    match kind {
      RoleKind::President if president.is_none() => president = Some(person),
      RoleKind::PrimeMinister if prime_minister.is_none() => {
        prime_minister = Some(person)
      }
      _ if minister => others.push(person),
      _ => {}
    }
  }

  sort_ministers(&mut others);

  Roster {
    president:      president.map(|p| Member::from_record(p, defaults)),
    prime_minister: prime_minister.map(|p| Member::from_record(p, defaults)),
    others:         others
      .into_iter()
      .map(|p| Member::from_record(p, defaults))
      .collect(),
  }
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;
  use crate::{
    classify::LabelClassifier,
    record::{Ministry, MinistryLink},
  };

  fn person(name: &str, role: &str, order: Option<i64>) -> PersonRecord {
    PersonRecord {
      id: Uuid::new_v4(),
      full_name: name.to_owned(),
      role: Some(role.to_owned()),
      cabinet_order: order,
      ..PersonRecord::default()
    }
  }

  fn roster(persons: Vec<PersonRecord>) -> Roster {
    assemble(persons, &LabelClassifier, &Defaults::default())
  }

  fn others(r: &Roster) -> Vec<&str> {
    r.others.iter().map(|m| m.full_name.as_str()).collect()
  }

  #[test]
  fn president_prime_minister_and_sorted_ministers() {
    let r = roster(vec![
      person("C", "Ministre de la Santé", Some(2)),
      person("A", "Président", None),
      person("D", "Ministre de l'Éducation", Some(1)),
      person("B", "Premier Ministre du Gouvernement", None),
    ]);
    assert_eq!(r.president.as_ref().unwrap().full_name, "A");
    assert_eq!(r.prime_minister.as_ref().unwrap().full_name, "B");
    assert_eq!(others(&r), ["D", "C"]);
    assert_eq!(
      r.iter().map(|m| m.full_name.as_str()).collect::<Vec<_>>(),
      ["A", "B", "D", "C"]
    );
  }

  #[test]
  fn non_ministers_are_dropped() {
    let r = roster(vec![
      person("A", "Conseiller spécial", None),
      person("B", "Secrétaire d'État", None),
      PersonRecord { role: None, ..person("C", "", None) },
    ]);
    assert!(r.is_empty());
  }

  #[test]
  fn only_the_first_head_of_each_kind_is_picked() {
    let r = roster(vec![
      person("P1", "Président", None),
      person("P2", "président", None),
      person("PM1", "Premier ministre", None),
      person("PM2", "Premier ministre délégué", Some(1)),
    ]);
    assert_eq!(r.president.as_ref().unwrap().full_name, "P1");
    assert_eq!(r.prime_minister.as_ref().unwrap().full_name, "PM1");
    // A second "président" is not ministerial; a second "premier ministre" is.
    assert_eq!(others(&r), ["PM2"]);
    let heads = [&r.president, &r.prime_minister];
    for head in heads.into_iter().flatten() {
      assert!(r.others.iter().all(|m| m.id != head.id));
    }
  }

  #[test]
  fn missing_heads_leave_empty_slots() {
    let r = roster(vec![person("M", "Ministre", None)]);
    assert!(r.president.is_none());
    assert!(r.prime_minister.is_none());
    assert_eq!(others(&r), ["M"]);
  }

  fn link(short: &str, primary: bool, label: &str) -> MinistryLink {
    let id = Uuid::new_v4();
    MinistryLink {
      ministry_id: id,
      is_primary:  primary,
      role_label:  Some(label.to_owned()),
      ministry:    Some(Ministry {
        id,
        name:       format!("Ministère {short}"),
        short_name: Some(short.to_owned()),
        category:   None,
      }),
    }
  }

  #[test]
  fn flagged_primary_ministry_wins() {
    let mut p = person("M", "Ministre", None);
    p.ministries =
      vec![link("Santé", false, "Ministre"), link("Travail", true, "Délégué")];
    let r = roster(vec![p]);
    let m = &r.others[0];
    assert_eq!(m.ministry_label, "Travail");
    assert_eq!(m.role_label.as_deref(), Some("Délégué"));
  }

  #[test]
  fn first_ministry_when_none_flagged() {
    let mut p = person("M", "Ministre", None);
    p.ministries =
      vec![link("Santé", false, "Ministre"), link("Travail", false, "Délégué")];
    let r = roster(vec![p]);
    assert_eq!(
      r.others[0].ministry.as_ref().and_then(|m| m.short_name.as_deref()),
      Some("Santé")
    );
  }

  #[test]
  fn card_fallbacks_are_resolved() {
    let mut p = person("M", "Ministre", None);
    p.description = Some("x".repeat(200));
    let r = roster(vec![p]);
    let m = &r.others[0];
    let d = Defaults::default();
    assert_eq!(m.ministry_label, d.ministry_label);
    assert_eq!(m.photo_url, d.photo_placeholder);
    assert_eq!(m.summary.chars().count(), 141);
    assert!(m.summary.ends_with('…'));
  }

  #[test]
  fn role_label_used_when_ministry_has_no_short_name() {
    let mut p = person("M", "Ministre", None);
    let mut l = link("", true, "Porte-parole");
    if let Some(m) = l.ministry.as_mut() {
      m.short_name = None;
    }
    p.ministries = vec![l];
    let r = roster(vec![p]);
    assert_eq!(r.others[0].ministry_label, "Porte-parole");
  }
}
