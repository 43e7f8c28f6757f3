//! cabinet server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store, and either serves the roster API or runs a one-shot command.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use cabinet_core::Directory;
use cabinet_server::{ServerConfig, expand_tilde};
use cabinet_store_sqlite::{Dataset, SqliteStore};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(author, version, about = "Government roster server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the JSON API over HTTP (the default).
  Serve,
  /// Load a JSON dataset into the store.
  Import {
    /// Path to the dataset file.
    path: PathBuf,
  },
  /// Print the assembled roster as JSON.
  Roster,
  /// Print the merged sheet of one person as JSON.
  Sheet {
    /// Person id.
    id: Uuid,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg =
    ServerConfig::load(&cli.config).context("failed to load configuration")?;

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let directory =
    Directory::new(store).with_defaults(server_cfg.defaults.clone());

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => {
      let app = cabinet_server::router(Arc::new(directory));
      let address = server_cfg.address();

      tracing::info!("Listening on http://{address}");
      let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

      axum::serve(listener, app).await.context("server error")?;
    }
    Command::Import { path } => {
      let dataset = Dataset::from_path(&path)
        .with_context(|| format!("failed to read dataset {path:?}"))?;
      let rows = dataset.len();
      directory
        .source()
        .import(dataset)
        .await
        .context("import failed")?;
      tracing::info!(rows, "imported {path:?}");
    }
    Command::Roster => {
      let roster = directory.roster().await.context("failed to load roster")?;
      println!("{}", serde_json::to_string_pretty(&roster)?);
    }
    Command::Sheet { id } => {
      let sheet = directory
        .sheet(id)
        .await
        .with_context(|| format!("failed to load sheet for {id}"))?;
      println!("{}", serde_json::to_string_pretty(&sheet)?);
    }
  }

  Ok(())
}
