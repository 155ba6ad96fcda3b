//! Resolution of human category slugs to the numeric ids the post query needs.

use tracing::debug;

use super::api::{DEFAULT_CATEGORY_PAGE_SIZE, WordPressApi};
use super::models::Category;
use crate::error::{FeedError, Result};

/// Slug of the main blog category.
pub const BLOG_SLUG: &str = "blog";
/// Slug of the newsletter category.
pub const NEWSLETTER_SLUG: &str = "newsletter";

/// Find the id of the category with `slug`.
///
/// # Errors
/// Returns [`FeedError::NotFound`] when no category matches.
pub fn find_category_id(categories: &[Category], slug: &str) -> Result<u64> {
  categories
    .iter()
    .find(|category| category.slug == slug)
    .map(|category| category.id)
    .ok_or_else(|| FeedError::NotFound { slug: slug.to_string() })
}

/// Fetch the category list and resolve `slug` against it.
pub async fn resolve_category_id(api: &dyn WordPressApi, slug: &str) -> Result<u64> {
  let categories = api.list_categories(DEFAULT_CATEGORY_PAGE_SIZE).await?;
  let id = find_category_id(&categories, slug)?;
  debug!(slug, id, "resolved category");
  Ok(id)
}
