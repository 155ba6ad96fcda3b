//! CLI subcommand handlers.
//!
//! Each handler builds a [`WordPressClient`] from the shared CLI options,
//! drives one of the state machines, and prints the resulting state.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use crate::cli::Cli;
use crate::wordpress::{WordPressApi, WordPressClient};

pub mod categories;
pub mod completions;
pub mod home;
pub mod newsletter;
pub mod post;
pub mod posts;
pub mod version;

/// Build the API client from `--url`, `--token` and `--timeout`.
pub(crate) fn connect(cli: &Cli) -> Result<Arc<dyn WordPressApi>> {
  let url = cli
    .connection
    .url
    .as_deref()
    .ok_or_else(|| anyhow!("--url is required (or set WORDPRESS_API_URL)"))?;

  let client = WordPressClient::new(url, cli.connection.token.clone(), cli.performance.timeout)
    .context("Unable to construct WordPress API client")?;

  Ok(Arc::new(client))
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
  println!("{json}");
  Ok(())
}
