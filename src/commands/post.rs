//! `wpfeed post <ID>`: open a single post through the feed state machine.

use std::process;

use anyhow::{Result, anyhow};

use super::{connect, print_json};
use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::feed::{FeedState, FeedStateMachine};
use crate::render::render_detail;

pub(crate) async fn handle_post_command(id: u64, html: bool, json: bool, cli: &Cli, colors: &ColorScheme) {
  if let Err(error) = run_post_command(id, html, json, cli, colors).await {
    eprintln!("{} {}", colors.error("✗"), colors.error(format!("Failed to load post {id}")));
    eprintln!("  {}: {}", colors.emphasis("Error"), error);
    process::exit(1);
  }
}

async fn run_post_command(id: u64, html: bool, json: bool, cli: &Cli, colors: &ColorScheme) -> Result<()> {
  let feed = FeedStateMachine::new(connect(cli)?);
  feed.fetch_post(id).await;

  match feed.state() {
    FeedState::PostSuccess { detail } if json => print_json(&detail),
    FeedState::PostSuccess { detail } => {
      println!("{}", render_detail(&detail, colors, html));
      Ok(())
    }
    FeedState::Error { message } => Err(anyhow!(message)),
    other => Err(anyhow!("Unexpected feed state: {other:?}")),
  }
}
