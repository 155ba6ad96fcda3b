//! `wpfeed home`: latest newsletter plus the first page of blog posts.
//!
//! Both state machines share one category lookup and are then driven
//! concurrently.

use std::process;
use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use super::connect;
use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::feed::{FeedState, FeedStateMachine, FetchPosts};
use crate::newsletter::{NewsletterState, NewsletterStateMachine};
use crate::render::{render_item, render_items};
use crate::wordpress::{DEFAULT_CATEGORY_PAGE_SIZE, WordPressApi, find_category_id};

pub(crate) async fn handle_home_command(per_page: u32, cli: &Cli, colors: &ColorScheme) {
  if let Err(error) = run_home_command(per_page, cli, colors).await {
    eprintln!("{} {}", colors.error("✗"), colors.error("Failed to load home feed"));
    eprintln!("  {}: {}", colors.emphasis("Error"), error);
    process::exit(1);
  }
}

async fn run_home_command(per_page: u32, cli: &Cli, colors: &ColorScheme) -> Result<()> {
  let (feed, newsletters) = load_home(connect(cli)?, per_page).await;

  println!("{}\n", colors.emphasis("Latest Newsletter"));
  match newsletters.state() {
    NewsletterState::Success { items } => match items.first() {
      Some(latest) => println!("{}", render_item(latest, colors)),
      None => println!("{}", colors.dimmed("No newsletters available.")),
    },
    NewsletterState::Error { message } => println!("{} {}", colors.warning("⚠"), colors.warning(message)),
    NewsletterState::Idle | NewsletterState::Loading => {}
  }

  println!("\n{}\n", colors.emphasis("Latest Posts"));
  match feed.state() {
    FeedState::Success { items, .. } if items.is_empty() => println!("{}", colors.dimmed("No posts available.")),
    FeedState::Success { items, .. } => println!("{}", render_items(&items, colors)),
    FeedState::Error { message } => println!("{} {}", colors.warning("⚠"), colors.warning(message)),
    FeedState::Idle | FeedState::Loading | FeedState::PostSuccess { .. } => {}
  }

  Ok(())
}

/// Load the first page of blog posts and the latest newsletter.
///
/// The category list is fetched once and both machines are seeded with their
/// ids. A machine whose slug could not be resolved here looks it up itself
/// and reports the failure as its own `Error` state.
pub async fn load_home(api: Arc<dyn WordPressApi>, per_page: u32) -> (FeedStateMachine, NewsletterStateMachine) {
  let categories = match api.list_categories(DEFAULT_CATEGORY_PAGE_SIZE).await {
    Ok(categories) => categories,
    Err(err) => {
      warn!(error = %err, "category listing failed");
      Vec::new()
    }
  };

  let mut feed = FeedStateMachine::new(api.clone()).with_page_size(per_page);
  if let Ok(id) = find_category_id(&categories, feed.slug()) {
    feed = feed.with_category_id(id);
  }
  let mut newsletters = NewsletterStateMachine::new(api);
  if let Ok(id) = find_category_id(&categories, newsletters.slug()) {
    newsletters = newsletters.with_category_id(id);
  }

  futures::join!(feed.fetch_posts(FetchPosts::page(1, per_page)), newsletters.fetch(1));
  (feed, newsletters)
}
