//! `wpfeed newsletter`: the latest posts of the newsletter category.

use std::process;

use anyhow::{Result, anyhow};

use super::{connect, print_json};
use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::newsletter::{NewsletterState, NewsletterStateMachine};
use crate::render::render_items;

pub(crate) async fn handle_newsletter_command(per_page: u32, json: bool, cli: &Cli, colors: &ColorScheme) {
  if let Err(error) = run_newsletter_command(per_page, json, cli, colors).await {
    eprintln!("{} {}", colors.error("✗"), colors.error("Failed to load newsletters"));
    eprintln!("  {}: {}", colors.emphasis("Error"), error);
    process::exit(1);
  }
}

async fn run_newsletter_command(per_page: u32, json: bool, cli: &Cli, colors: &ColorScheme) -> Result<()> {
  let newsletters = NewsletterStateMachine::new(connect(cli)?);
  newsletters.fetch(per_page).await;

  let items = match newsletters.state() {
    NewsletterState::Success { items } => items,
    NewsletterState::Error { message } => return Err(anyhow!(message)),
    other => return Err(anyhow!("Unexpected newsletter state: {other:?}")),
  };

  if json {
    return print_json(&items);
  }

  println!("{}\n", colors.emphasis("Latest Newsletters"));
  if items.is_empty() {
    println!("{}", colors.dimmed("No newsletters available."));
  } else {
    println!("{}", render_items(&items, colors));
  }

  Ok(())
}
