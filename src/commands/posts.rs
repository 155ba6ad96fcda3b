//! `wpfeed posts`: page through a category with the feed state machine.

use std::process;

use anyhow::{Result, anyhow};

use super::{connect, print_json};
use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::feed::{FeedState, FeedStateMachine};
use crate::render::render_items;

/// Execute the `posts` subcommand.
///
/// Initializes the feed (category resolution plus page 1), then asks for the
/// next page until `pages` pages are loaded or the feed reports no more.
pub(crate) async fn handle_posts_command(
  category: &str,
  per_page: u32,
  pages: u32,
  json: bool,
  cli: &Cli,
  colors: &ColorScheme,
) {
  if let Err(error) = run_posts_command(category, per_page, pages, json, cli, colors).await {
    eprintln!("{} {}", colors.error("✗"), colors.error("Failed to list posts"));
    eprintln!("  {}: {}", colors.emphasis("Error"), error);
    process::exit(1);
  }
}

async fn run_posts_command(
  category: &str,
  per_page: u32,
  pages: u32,
  json: bool,
  cli: &Cli,
  colors: &ColorScheme,
) -> Result<()> {
  let feed = FeedStateMachine::with_category_slug(connect(cli)?, category).with_page_size(per_page);

  if !json {
    println!(
      "{} {} {}",
      colors.progress("→"),
      colors.info("Fetching posts in"),
      colors.emphasis(feed.slug())
    );
  }

  feed.initialize().await;
  for _ in 1..pages {
    if !matches!(feed.state(), FeedState::Success { has_more: true, .. }) {
      break;
    }
    feed.fetch_next_page().await;
  }

  let (items, has_more) = match feed.state() {
    FeedState::Success { items, has_more } => (items, has_more),
    FeedState::Error { message } => return Err(anyhow!(message)),
    other => return Err(anyhow!("Unexpected feed state: {other:?}")),
  };

  if json {
    return print_json(&items);
  }

  let loaded_pages = feed.current_page().await;
  println!(
    "  {} {}\n",
    colors.success("✓"),
    colors.info(format!(
      "{} {} across {} {}",
      colors.number(items.len()),
      if items.len() == 1 { "post" } else { "posts" },
      colors.number(loaded_pages),
      if loaded_pages == 1 { "page" } else { "pages" }
    ))
  );

  if items.is_empty() {
    println!("{}", colors.dimmed("No posts available."));
  } else {
    println!("{}", render_items(&items, colors));
  }

  if has_more {
    println!(
      "\n{} {}",
      colors.dimmed("…"),
      colors.dimmed(format!("more posts available, try --pages {}", loaded_pages + 1))
    );
  }

  Ok(())
}
