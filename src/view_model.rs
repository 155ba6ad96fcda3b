//! Display-ready models derived from WordPress posts.
//!
//! The mapping is pure: HTML titles and excerpts become plain text, dates are
//! reformatted for humans, and tags and the featured image are pulled out of
//! the embedded data.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::html::strip_html;
use crate::wordpress::{Embedded, Post};

/// Timestamp layout of the `date` field (site-local, no timezone).
const WP_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// Layout shown to readers, e.g. `March 05, 2024`.
const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";
/// Taxonomy that marks a term group as the post's tags.
const TAG_TAXONOMY: &str = "post_tag";

/// A post as shown in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostItemViewModel {
  pub id: u64,
  pub formatted_date: String,
  pub plain_title: String,
  pub plain_excerpt: String,
  pub image_url: Option<String>,
  pub tags: Vec<String>,
}

/// A post as shown on its detail page; `content` stays HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetailViewModel {
  pub formatted_date: String,
  pub plain_title: String,
  pub content: String,
  pub image_url: Option<String>,
  pub tags: Vec<String>,
}

impl From<&Post> for PostItemViewModel {
  fn from(post: &Post) -> Self {
    Self {
      id: post.id,
      formatted_date: format_date(&post.published_at),
      plain_title: strip_html(&post.title.rendered),
      plain_excerpt: strip_html(&post.excerpt.rendered),
      image_url: extract_image_url(post.embedded.as_ref()),
      tags: extract_tags(post.embedded.as_ref()),
    }
  }
}

impl From<&Post> for PostDetailViewModel {
  fn from(post: &Post) -> Self {
    Self {
      formatted_date: format_date(&post.published_at),
      plain_title: strip_html(&post.title.rendered),
      content: post.content.rendered.clone(),
      image_url: extract_image_url(post.embedded.as_ref()),
      tags: extract_tags(post.embedded.as_ref()),
    }
  }
}

/// Map a page of posts into list items, keeping server order.
pub fn to_items(posts: &[Post]) -> Vec<PostItemViewModel> {
  posts.iter().map(PostItemViewModel::from).collect()
}

/// Reformat a WordPress timestamp as `MMMM dd, yyyy`.
///
/// Input that does not start with a `yyyy-MM-ddTHH:mm:ss` timestamp is
/// returned unchanged; trailing text after a valid timestamp is ignored.
pub fn format_date(raw: &str) -> String {
  NaiveDateTime::parse_and_remainder(raw, WP_DATE_FORMAT)
    .map(|(parsed, _)| parsed.format(DISPLAY_DATE_FORMAT).to_string())
    .unwrap_or_else(|_| raw.to_string())
}

/// Names of the first term group that contains a `post_tag` term.
pub fn extract_tags(embedded: Option<&Embedded>) -> Vec<String> {
  embedded
    .and_then(|embedded| embedded.terms.as_ref())
    .and_then(|groups| {
      groups
        .iter()
        .find(|group| group.iter().any(|term| term.taxonomy == TAG_TAXONOMY))
    })
    .map(|group| group.iter().map(|term| strip_html(&term.name)).collect())
    .unwrap_or_default()
}

/// URL of the first featured media entry.
pub fn extract_image_url(embedded: Option<&Embedded>) -> Option<String> {
  embedded
    .and_then(|embedded| embedded.featured_media.as_ref())
    .and_then(|media| media.first())
    .map(|media| media.source_url.clone())
}
