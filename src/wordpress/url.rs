//! Helpers for turning a user-supplied site or API URL into REST endpoints.

use url::Url;

use super::api::PostQuery;
use crate::error::{FeedError, Result};

/// Path of the v2 REST namespace relative to the site root.
pub const REST_PREFIX: &str = "wp-json/wp/v2";

/// Base URL of a WordPress REST API plus endpoint builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
  base: Url,
}

impl ApiEndpoints {
  /// Parse a site or API URL into an endpoint builder.
  ///
  /// Accepts:
  /// - `example.com` (scheme defaults to `https://`)
  /// - `https://example.com` (the `wp-json/wp/v2` namespace is appended)
  /// - `https://example.com/wp-json/wp/v2/` (used as-is, trailing slash dropped)
  ///
  /// # Errors
  /// Returns [`FeedError::InvalidUrl`] when the input cannot be parsed, has no
  /// host, or uses a scheme other than `http`/`https`.
  pub fn parse(input: &str) -> Result<Self> {
    let trimmed = input.trim();
    let invalid = |reason: &str| FeedError::InvalidUrl {
      url: trimmed.to_string(),
      reason: reason.to_string(),
    };

    let with_scheme = if trimmed.contains("://") {
      trimmed.to_string()
    } else {
      format!("https://{trimmed}")
    };

    let mut base = Url::parse(&with_scheme).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(base.scheme(), "http" | "https") {
      return Err(invalid("only http and https URLs are supported"));
    }
    if base.host_str().is_none() {
      return Err(invalid("URL is missing a host"));
    }

    base.set_query(None);
    base.set_fragment(None);

    let path = base.path().trim_end_matches('/').to_string();
    if path.contains("/wp-json") {
      base.set_path(&path);
    } else {
      base.set_path(&format!("{path}/{REST_PREFIX}"));
    }

    Ok(Self { base })
  }

  /// The normalized API base, without a trailing slash.
  pub fn base(&self) -> &str {
    self.base.as_str().trim_end_matches('/')
  }

  /// `GET /posts?_embed&page&per_page[&categories]`
  pub fn posts(&self, query: &PostQuery) -> Url {
    let mut url = self.endpoint(&["posts"]);
    {
      let mut pairs = url.query_pairs_mut();
      pairs
        .append_key_only("_embed")
        .append_pair("page", &query.page.to_string())
        .append_pair("per_page", &query.per_page.to_string());
      if let Some(category_id) = query.category_id {
        pairs.append_pair("categories", &category_id.to_string());
      }
    }
    url
  }

  /// `GET /posts/{id}?_embed`
  pub fn post(&self, id: u64) -> Url {
    let mut url = self.endpoint(&["posts", &id.to_string()]);
    url.query_pairs_mut().append_key_only("_embed");
    url
  }

  /// `GET /categories?per_page`
  pub fn categories(&self, per_page: u32) -> Url {
    let mut url = self.endpoint(&["categories"]);
    url.query_pairs_mut().append_pair("per_page", &per_page.to_string());
    url
  }

  fn endpoint(&self, segments: &[&str]) -> Url {
    let mut url = self.base.clone();
    // http(s) URLs with a host always have path segments.
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    url
  }
}
