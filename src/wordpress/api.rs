//! Trait definitions for interacting with a WordPress site.

use async_trait::async_trait;

use super::models::{Category, Post};
use crate::error::Result;

/// Default page size used when listing categories.
pub const DEFAULT_CATEGORY_PAGE_SIZE: u32 = 100;

/// Parameters for a paginated post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostQuery {
  /// One-based page number.
  pub page: u32,
  /// Number of posts requested per page.
  pub per_page: u32,
  /// Restrict results to a single category.
  pub category_id: Option<u64>,
}

impl PostQuery {
  pub fn new(page: u32, per_page: u32) -> Self {
    Self {
      page,
      per_page,
      category_id: None,
    }
  }

  pub fn in_category(mut self, category_id: u64) -> Self {
    self.category_id = Some(category_id);
    self
  }
}

/// Trait for WordPress API operations (enables testing with fake
/// implementations).
///
/// Every call is a single attempt; implementations must not retry.
#[async_trait]
pub trait WordPressApi: Send + Sync {
  /// List posts, always with embedded media and terms.
  ///
  /// # Arguments
  /// * `query` - Page, page size and optional category filter.
  ///
  /// # Returns
  /// The posts on the requested page, in server order.
  async fn list_posts(&self, query: PostQuery) -> Result<Vec<Post>>;

  /// Fetch a single post, with embedded media and terms.
  ///
  /// # Arguments
  /// * `id` - Positive post identifier. Unknown ids surface as a network
  ///   (HTTP status) error.
  async fn get_post(&self, id: u64) -> Result<Post>;

  /// List categories.
  ///
  /// # Arguments
  /// * `per_page` - Maximum number of categories to return, usually
  ///   [`DEFAULT_CATEGORY_PAGE_SIZE`].
  async fn list_categories(&self, per_page: u32) -> Result<Vec<Category>>;
}
