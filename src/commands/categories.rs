//! `wpfeed categories`: list category ids and slugs.

use std::process;

use anyhow::{Context, Result};

use super::{connect, print_json};
use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::render::render_categories;
use crate::wordpress::DEFAULT_CATEGORY_PAGE_SIZE;

pub(crate) async fn handle_categories_command(json: bool, cli: &Cli, colors: &ColorScheme) {
  if let Err(error) = run_categories_command(json, cli, colors).await {
    eprintln!("{} {}", colors.error("✗"), colors.error("Failed to list categories"));
    eprintln!("  {}: {}", colors.emphasis("Error"), error);
    process::exit(1);
  }
}

async fn run_categories_command(json: bool, cli: &Cli, colors: &ColorScheme) -> Result<()> {
  let api = connect(cli)?;
  let categories = api
    .list_categories(DEFAULT_CATEGORY_PAGE_SIZE)
    .await
    .context("Could not fetch categories")?;

  if json {
    return print_json(&categories);
  }

  if categories.is_empty() {
    println!("{}", colors.dimmed("No categories found."));
  } else {
    println!("{}", render_categories(&categories, colors));
  }

  Ok(())
}
