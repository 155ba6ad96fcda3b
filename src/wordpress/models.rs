//! Data transfer objects returned by the WordPress REST API (v2).

use serde::{Deserialize, Serialize};

/// A published post with its rendered fields and optional embedded data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
  /// Numeric post identifier.
  pub id: u64,
  /// Publication timestamp in site-local time (`yyyy-MM-ddTHH:mm:ss`).
  #[serde(rename = "date")]
  pub published_at: String,
  /// Post title as server-rendered HTML.
  pub title: Rendered,
  /// Full post body as server-rendered HTML.
  pub content: Rendered,
  /// Short summary as server-rendered HTML.
  pub excerpt: Rendered,
  /// Related media and taxonomy terms, present when requested with `_embed`.
  #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
  pub embedded: Option<Embedded>,
}

/// A field the server pre-renders to HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
  pub rendered: String,
}

/// Entities embedded inline with a post.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Embedded {
  /// Featured media attachments; the first one is the post image.
  #[serde(rename = "wp:featuredmedia", default)]
  pub featured_media: Option<Vec<FeaturedMedia>>,
  /// One term group per taxonomy queried (categories, tags, ...).
  #[serde(rename = "wp:term", default)]
  pub terms: Option<Vec<Vec<Term>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedMedia {
  pub source_url: String,
}

/// A taxonomy term such as a category or a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
  pub id: u64,
  pub name: String,
  /// Taxonomy the term belongs to (`"category"`, `"post_tag"`, ...).
  pub taxonomy: String,
}

/// A post category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id: u64,
  /// URL-safe identifier such as `"blog"`.
  pub slug: String,
  /// Display name, when the server includes it.
  #[serde(default)]
  pub name: Option<String>,
  /// Number of published posts in the category.
  #[serde(default)]
  pub count: Option<u64>,
}
