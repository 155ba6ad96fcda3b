//! Paginated feed of one category, exposed as observable UI state.
//!
//! Every mutating operation holds the machine's async mutex from start to
//! finish, category resolution included. Concurrent callers are served in
//! submission order and never interleave, so the page counter and the held
//! list always reflect whole operations.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use crate::error::{FeedError, Result};
use crate::view_model::{PostDetailViewModel, PostItemViewModel, to_items};
use crate::wordpress::{BLOG_SLUG, Post, PostQuery, WordPressApi, resolve_category_id};

/// Page size used when the caller does not pick one.
pub const DEFAULT_PER_PAGE: u32 = 20;
/// Largest page size the WordPress API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// What a feed screen should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedState {
  #[default]
  Idle,
  Loading,
  /// The list so far. `has_more` is true when the last page came back full.
  Success {
    items: Vec<PostItemViewModel>,
    has_more: bool,
  },
  /// A single post opened from the list.
  PostSuccess { detail: PostDetailViewModel },
  Error { message: String },
}

/// Parameters of [`FeedStateMachine::fetch_posts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPosts {
  /// Pull-to-refresh: raise the refreshing flag and restart from page 1.
  pub refresh: bool,
  /// One-based page to load.
  pub page: u32,
  pub per_page: u32,
  /// Replace the held list even when `page > 1`.
  pub replace_all: bool,
}

impl FetchPosts {
  pub fn page(page: u32, per_page: u32) -> Self {
    Self {
      refresh: false,
      page,
      per_page,
      replace_all: false,
    }
  }

  pub fn refresh(per_page: u32) -> Self {
    Self {
      refresh: true,
      ..Self::page(1, per_page)
    }
  }

  pub fn replacing_all(mut self) -> Self {
    self.replace_all = true;
    self
  }
}

/// Mutable feed data; only touched while the lock is held.
#[derive(Debug)]
struct FeedData {
  category_id: Option<u64>,
  items: Vec<PostItemViewModel>,
  current_page: u32,
  per_page: u32,
}

/// State machine behind the post list and post detail views.
pub struct FeedStateMachine {
  api: Arc<dyn WordPressApi>,
  slug: String,
  data: Mutex<FeedData>,
  state: watch::Sender<FeedState>,
  refreshing: watch::Sender<bool>,
}

impl FeedStateMachine {
  /// Create a machine for the `"blog"` category.
  pub fn new(api: Arc<dyn WordPressApi>) -> Self {
    Self::with_category_slug(api, BLOG_SLUG)
  }

  /// Create a machine for an arbitrary category slug.
  pub fn with_category_slug(api: Arc<dyn WordPressApi>, slug: impl Into<String>) -> Self {
    Self {
      api,
      slug: slug.into(),
      data: Mutex::new(FeedData {
        category_id: None,
        items: Vec::new(),
        current_page: 1,
        per_page: DEFAULT_PER_PAGE,
      }),
      state: watch::channel(FeedState::Idle).0,
      refreshing: watch::channel(false).0,
    }
  }

  /// Page size used by `initialize`, `refresh` and `fetch_next_page` until a
  /// `fetch_posts` call picks another one.
  pub fn with_page_size(mut self, per_page: u32) -> Self {
    self.data.get_mut().per_page = per_page.clamp(1, MAX_PER_PAGE);
    self
  }

  /// Use an already resolved category id. `fetch_posts`, `refresh` and
  /// `fetch_next_page` then skip the category lookup; `initialize` still
  /// re-resolves the slug.
  pub fn with_category_id(mut self, category_id: u64) -> Self {
    self.data.get_mut().category_id = Some(category_id);
    self
  }

  /// Category slug this feed is bound to.
  pub fn slug(&self) -> &str {
    &self.slug
  }

  /// Snapshot of the current state.
  pub fn state(&self) -> FeedState {
    self.state.borrow().clone()
  }

  /// Receiver that observes every published state.
  pub fn subscribe(&self) -> watch::Receiver<FeedState> {
    self.state.subscribe()
  }

  pub fn is_refreshing(&self) -> bool {
    *self.refreshing.borrow()
  }

  pub fn subscribe_refreshing(&self) -> watch::Receiver<bool> {
    self.refreshing.subscribe()
  }

  /// Posts held so far. Waits for any in-flight operation to finish.
  pub async fn items(&self) -> Vec<PostItemViewModel> {
    self.data.lock().await.items.clone()
  }

  /// Last successfully loaded page. Waits for any in-flight operation.
  pub async fn current_page(&self) -> u32 {
    self.data.lock().await.current_page
  }

  /// Resolve the category and load the first page.
  ///
  /// A resolution failure leaves the machine in `Error`; calling this (or any
  /// fetch) again retries.
  pub async fn initialize(&self) {
    let mut data = self.data.lock().await;
    self.publish(FeedState::Loading);

    match resolve_category_id(self.api.as_ref(), &self.slug).await {
      Ok(id) => data.category_id = Some(id),
      Err(err) => {
        self.fail("category resolution", err);
        return;
      }
    }

    let per_page = data.per_page;
    self.fetch_locked(&mut data, FetchPosts::page(1, per_page)).await;
  }

  /// Load a page of posts, replacing or appending to the held list.
  pub async fn fetch_posts(&self, request: FetchPosts) {
    let mut data = self.data.lock().await;
    self.fetch_locked(&mut data, request).await;
  }

  /// Pull-to-refresh with the current page size.
  pub async fn refresh(&self) {
    let mut data = self.data.lock().await;
    let per_page = data.per_page;
    self.fetch_locked(&mut data, FetchPosts::refresh(per_page)).await;
  }

  /// Append the next page. Does nothing unless the state is `Success` with
  /// `has_more`.
  pub async fn fetch_next_page(&self) {
    let mut data = self.data.lock().await;

    let can_advance = matches!(*self.state.borrow(), FeedState::Success { has_more: true, .. });
    if !can_advance {
      debug!(slug = %self.slug, "no further page to fetch");
      return;
    }

    let request = FetchPosts::page(data.current_page + 1, data.per_page);
    self.fetch_locked(&mut data, request).await;
  }

  /// Load one post for the detail view.
  pub async fn fetch_post(&self, id: u64) {
    let _data = self.data.lock().await;
    self.publish(FeedState::Loading);

    match self.api.get_post(id).await {
      Ok(post) => {
        info!(id, "loaded post");
        self.publish(FeedState::PostSuccess {
          detail: PostDetailViewModel::from(&post),
        });
      }
      Err(err) => self.fail("post fetch", err),
    }
  }

  async fn fetch_locked(&self, data: &mut FeedData, request: FetchPosts) {
    let per_page = request.per_page.clamp(1, MAX_PER_PAGE);
    let page = if request.refresh {
      self.refreshing.send_replace(true);
      data.current_page = 1;
      1
    } else {
      let page = request.page.max(1);
      if page == 1 {
        self.publish(FeedState::Loading);
      }
      page
    };

    match self.load_page(data, page, per_page).await {
      Ok(posts) => {
        let has_more = posts.len() == per_page as usize;
        let items = to_items(&posts);
        if page == 1 || request.replace_all {
          data.items = items;
        } else {
          data.items.extend(items);
        }
        data.current_page = page;
        data.per_page = per_page;

        info!(slug = %self.slug, page, total = data.items.len(), has_more, "loaded posts");
        self.publish(FeedState::Success {
          items: data.items.clone(),
          has_more,
        });
      }
      Err(err) => self.fail("posts fetch", err),
    }

    if request.refresh {
      self.refreshing.send_replace(false);
    }
  }

  async fn load_page(&self, data: &mut FeedData, page: u32, per_page: u32) -> Result<Vec<Post>> {
    let category_id = match data.category_id {
      Some(id) => id,
      None => {
        let id = resolve_category_id(self.api.as_ref(), &self.slug).await?;
        data.category_id = Some(id);
        id
      }
    };

    self
      .api
      .list_posts(PostQuery::new(page, per_page).in_category(category_id))
      .await
  }

  fn fail(&self, operation: &str, err: FeedError) {
    warn!(slug = %self.slug, error = %err, "{operation} failed");
    self.publish(FeedState::Error {
      message: err.to_string(),
    });
  }

  fn publish(&self, state: FeedState) {
    self.state.send_replace(state);
  }
}
