//! HTTP server wiring for the government roster.
//!
//! Loads [`ServerConfig`], opens the SQLite store, and serves the JSON API
//! of [`cabinet_api`] under `/api`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use cabinet_core::{Classifier, Defaults, Directory, source::RosterSource};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CABINET_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Display fallbacks; every field is optional.
  #[serde(default)]
  pub defaults:   Defaults,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 8080 }

fn default_store_path() -> PathBuf { PathBuf::from("roster.sqlite3") }

impl ServerConfig {
  /// Layer the optional TOML file at `path` under the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("CABINET")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: the API under `/api`, with request tracing.
pub fn router<S, C>(directory: Arc<Directory<S, C>>) -> Router
where
  S: RosterSource + 'static,
  C: Classifier + 'static,
{
  Router::new()
    .nest("/api", cabinet_api::api_router(directory))
    .layer(TraceLayer::new_for_http())
}
