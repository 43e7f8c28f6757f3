//! Fallback values substituted for missing fields at aggregation time, so the
//! view models never need null-checking by the renderer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
  /// Photo used when a person has no `photo_url`.
  pub photo_placeholder: String,
  /// Roster card tag when `role` is missing.
  pub role_tag:          String,
  /// Roster card ministry line when neither a short name nor a role label
  /// is available.
  pub ministry_label:    String,
  /// Sheet biography when `description` is missing.
  pub biography:         String,
  /// Cabinet grade when neither a grade label nor a cabinet role is set.
  pub staff_grade:       String,
  /// Pole heading under the leader's name.
  pub pole_title:        String,
  /// Pole member label.
  pub pole_member:       String,
  /// Career period when no date is set.
  pub undated:           String,
  /// Career heading when no text is set.
  pub untitled:          String,
  /// Roster card summaries are cut to this many characters.
  pub summary_length:    usize,
}

impl Default for Defaults {
  fn default() -> Self {
    Self {
      photo_placeholder: "https://via.placeholder.com/400x260?text=Portrait"
        .to_owned(),
      role_tag:          "Rôle".to_owned(),
      ministry_label:    "Ministère".to_owned(),
      biography:         "Aucune biographie courte renseignée.".to_owned(),
      staff_grade:       "Collaborateur".to_owned(),
      pole_title:        "Chef de pôle".to_owned(),
      pole_member:       "Membre".to_owned(),
      undated:           "Date non précisée".to_owned(),
      untitled:          "Mission".to_owned(),
      summary_length:    140,
    }
  }
}

impl Defaults {
  pub fn photo(&self, url: Option<&str>) -> String {
    url
      .filter(|u| !u.is_empty())
      .unwrap_or(self.photo_placeholder.as_str())
      .to_owned()
  }

  /// Cut `text` to `summary_length` characters, appending `…` if anything was
  /// dropped. Missing text yields an empty summary.
  pub fn summary(&self, text: Option<&str>) -> String {
    truncate(text.unwrap_or_default(), self.summary_length)
  }
}

/// Character-based (not byte-based) truncation.
pub fn truncate(text: &str, max: usize) -> String {
  match text.char_indices().nth(max) {
    Some((at, _)) => format!("{}…", &text[..at]),
    None => text.to_owned(),
  }
}

/// The first non-empty candidate, or `fallback`.
pub(crate) fn first_of<'a>(
  candidates: impl IntoIterator<Item = Option<&'a str>>,
  fallback: &'a str,
) -> String {
  candidates
    .into_iter()
    .flatten()
    .find(|s| !s.is_empty())
    .unwrap_or(fallback)
    .to_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncate_counts_characters() {
    assert_eq!(truncate("Économie", 3), "Éco…");
    assert_eq!(truncate("abc", 3), "abc");
    assert_eq!(truncate("", 3), "");
  }

  #[test]
  fn photo_falls_back_on_missing_or_empty() {
    let d = Defaults::default();
    assert_eq!(d.photo(None), d.photo_placeholder);
    assert_eq!(d.photo(Some("")), d.photo_placeholder);
    assert_eq!(d.photo(Some("https://img/x.jpg")), "https://img/x.jpg");
  }

  #[test]
  fn first_of_skips_empty_strings() {
    assert_eq!(first_of([None, Some(""), Some("b")], "z"), "b");
    assert_eq!(first_of([None, None], "z"), "z");
  }

  #[test]
  fn partial_config_keeps_other_defaults() {
    let d: Defaults =
      serde_json::from_str(r#"{"staff_grade":"Staff"}"#).unwrap();
    assert_eq!(d.staff_grade, "Staff");
    assert_eq!(d.summary_length, 140);
  }
}
