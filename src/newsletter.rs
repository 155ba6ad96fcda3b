//! Single-page feed of the newsletter category.
//!
//! Unlike [`crate::feed`], fetches here are not serialized. Each fetch takes a
//! ticket, and a response is only published while its ticket is the latest
//! one dispatched, so a slow superseded request cannot overwrite newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::view_model::{PostItemViewModel, to_items};
use crate::wordpress::{NEWSLETTER_SLUG, Post, PostQuery, WordPressApi, resolve_category_id};

/// Number of newsletters loaded when the caller does not pick a size.
pub const DEFAULT_NEWSLETTER_PER_PAGE: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NewsletterState {
  #[default]
  Idle,
  Loading,
  Success { items: Vec<PostItemViewModel> },
  Error { message: String },
}

pub struct NewsletterStateMachine {
  api: Arc<dyn WordPressApi>,
  slug: String,
  category_id: OnceLock<u64>,
  latest_ticket: AtomicU64,
  state: watch::Sender<NewsletterState>,
}

impl NewsletterStateMachine {
  pub fn new(api: Arc<dyn WordPressApi>) -> Self {
    Self::with_category_slug(api, NEWSLETTER_SLUG)
  }

  pub fn with_category_slug(api: Arc<dyn WordPressApi>, slug: impl Into<String>) -> Self {
    Self {
      api,
      slug: slug.into(),
      category_id: OnceLock::new(),
      latest_ticket: AtomicU64::new(0),
      state: watch::channel(NewsletterState::Idle).0,
    }
  }

  /// Use an already resolved category id instead of looking up the slug.
  pub fn with_category_id(self, category_id: u64) -> Self {
    let _ = self.category_id.set(category_id);
    self
  }

  pub fn slug(&self) -> &str {
    &self.slug
  }

  pub fn state(&self) -> NewsletterState {
    self.state.borrow().clone()
  }

  pub fn subscribe(&self) -> watch::Receiver<NewsletterState> {
    self.state.subscribe()
  }

  /// Load the default number of newsletters.
  pub async fn initialize(&self) {
    self.fetch(DEFAULT_NEWSLETTER_PER_PAGE).await;
  }

  /// Load the first `per_page` newsletters, replacing whatever is shown.
  pub async fn fetch(&self, per_page: u32) {
    let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
    self.publish(ticket, NewsletterState::Loading);

    let state = match self.load(per_page.max(1)).await {
      Ok(posts) => {
        info!(slug = %self.slug, count = posts.len(), "loaded newsletters");
        NewsletterState::Success {
          items: to_items(&posts),
        }
      }
      Err(err) => {
        warn!(slug = %self.slug, error = %err, "newsletter fetch failed");
        NewsletterState::Error {
          message: err.to_string(),
        }
      }
    };

    if !self.publish(ticket, state) {
      debug!(ticket, "discarded stale newsletter response");
    }
  }

  async fn load(&self, per_page: u32) -> Result<Vec<Post>> {
    let category_id = match self.category_id.get() {
      Some(id) => *id,
      None => {
        let id = resolve_category_id(self.api.as_ref(), &self.slug).await?;
        // A concurrent fetch may have resolved it first; both ids agree.
        let _ = self.category_id.set(id);
        id
      }
    };

    self
      .api
      .list_posts(PostQuery::new(1, per_page).in_category(category_id))
      .await
  }

  /// Publish `state` if `ticket` is still the latest request.
  fn publish(&self, ticket: u64, state: NewsletterState) -> bool {
    self.state.send_if_modified(|current| {
      if self.latest_ticket.load(Ordering::SeqCst) != ticket {
        return false;
      }
      *current = state;
      true
    })
  }
}
