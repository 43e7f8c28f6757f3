//! Role and pole-leader classification over free-text labels.
//!
//! The schema carries no typed flags for "president", "prime minister" or
//! "pole leader"; they are inferred from human-readable French labels. This is
//! fragile (a typo or a rewording silently changes the grid), so the rules
//! live behind the [`Classifier`] trait and can be replaced without touching
//! the aggregation code.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// The roster category a `role` label falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
  President,
  PrimeMinister,
  Minister,
  Other,
}

/// A pluggable classification strategy.
pub trait Classifier: Send + Sync {
  /// Which roster slot a role label points at.
  fn role_kind(&self, role: &str) -> RoleKind;

  /// Whether a person with this role may appear among the roster's "others".
  fn is_minister(&self, role: &str) -> bool;

  /// Whether a staff member leads a pole, judged on their cabinet role and
  /// grade label.
  fn is_pole_leader(
    &self,
    cabinet_role: Option<&str>,
    grade_label: Option<&str>,
  ) -> bool;
}

const PRESIDENT: &str = "président";
const PREMIER: &str = "premier";
const MINISTRE: &str = "ministre";
const POLE: &str = "pôle";

/// NFC-normalise and lower-case, so composed and decomposed accents compare
/// equal.
pub fn fold(text: &str) -> String {
  text.nfc().collect::<String>().to_lowercase()
}

/// The default French label rules.
///
/// - exactly "président" → [`RoleKind::President`]
/// - contains "premier" → [`RoleKind::PrimeMinister`]
/// - contains "ministre" → [`RoleKind::Minister`]
pub fn classify(role: &str) -> RoleKind {
  let role = fold(role);
  if role == PRESIDENT {
    RoleKind::President
  } else if role.contains(PREMIER) {
    RoleKind::PrimeMinister
  } else if role.contains(MINISTRE) {
    RoleKind::Minister
  } else {
    RoleKind::Other
  }
}

/// [`Classifier`] implementing the French substring rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelClassifier;

impl Classifier for LabelClassifier {
  fn role_kind(&self, role: &str) -> RoleKind { classify(role) }

  fn is_minister(&self, role: &str) -> bool { fold(role).contains(MINISTRE) }

  fn is_pole_leader(
    &self,
    cabinet_role: Option<&str>,
    grade_label: Option<&str>,
  ) -> bool {
    [cabinet_role, grade_label]
      .into_iter()
      .flatten()
      .any(|text| fold(text).contains(POLE))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn president_requires_exact_match() {
    assert_eq!(classify("Président"), RoleKind::President);
    assert_eq!(classify("PRÉSIDENT"), RoleKind::President);
    assert_eq!(classify("Président de la République"), RoleKind::Other);
    assert_eq!(classify("Vice-président"), RoleKind::Other);
  }

  #[test]
  fn premier_is_a_substring_match() {
    assert_eq!(
      classify("Premier Ministre du Gouvernement"),
      RoleKind::PrimeMinister
    );
    assert_eq!(classify("premier secrétaire"), RoleKind::PrimeMinister);
  }

  #[test]
  fn ministre_is_a_substring_match() {
    assert_eq!(classify("Ministre de la Santé"), RoleKind::Minister);
    assert_eq!(classify("Ministre délégué"), RoleKind::Minister);
    assert_eq!(classify("Secrétaire d'État"), RoleKind::Other);
  }

  #[test]
  fn prime_minister_is_still_ministerial() {
    assert!(LabelClassifier.is_minister("Premier ministre"));
    assert!(!LabelClassifier.is_minister("Président"));
  }

  #[test]
  fn decomposed_accents_fold_to_composed() {
    assert_eq!(classify("Pre\u{301}sident"), RoleKind::President);
    assert!(LabelClassifier.is_pole_leader(Some("Chef de po\u{302}le"), None));
  }

  #[test]
  fn pole_leader_matches_either_field() {
    let c = LabelClassifier;
    assert!(c.is_pole_leader(Some("Chef de pôle Économie"), None));
    assert!(c.is_pole_leader(None, Some("Responsable de PÔLE")));
    assert!(c.is_pole_leader(Some("Conseiller"), Some("Chef de Pôle")));
    assert!(!c.is_pole_leader(Some("Conseiller"), Some("Chargé de mission")));
    assert!(!c.is_pole_leader(None, None));
  }

  #[test]
  fn pole_without_accent_does_not_match() {
    assert!(!LabelClassifier.is_pole_leader(Some("Chef de pole"), None));
  }
}
