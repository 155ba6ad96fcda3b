//! HTTP client implementation for talking to the WordPress REST API.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::api::{PostQuery, WordPressApi};
use super::models::{Category, Post};
use super::url::ApiEndpoints;
use crate::error::{FeedError, Result};

/// WordPress API client.
///
/// Constructed explicitly and handed to the state machines; clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct WordPressClient {
  endpoints: ApiEndpoints,
  token: Option<String>,
  client: reqwest::Client,
}

impl WordPressClient {
  /// Create a new WordPress client.
  ///
  /// # Arguments
  /// * `api_url` - Site or REST API URL (e.g., `https://example.com` or
  ///   `https://example.com/wp-json/wp/v2`)
  /// * `token` - Optional bearer token sent with every request
  /// * `timeout_secs` - Request timeout in seconds
  ///
  /// # Errors
  /// Returns an error if the URL is invalid or if the underlying
  /// `reqwest::Client` cannot be built.
  pub fn new(api_url: &str, token: Option<String>, timeout_secs: u64) -> Result<Self> {
    let endpoints = ApiEndpoints::parse(api_url)?;

    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(timeout_secs))
      .user_agent(user_agent())
      .build()
      .map_err(|source| FeedError::Network {
        context: "Failed to create HTTP client".to_string(),
        source,
      })?;

    Ok(Self {
      endpoints,
      token: token.filter(|t| !t.trim().is_empty()),
      client,
    })
  }

  /// The normalized REST API base this client talks to.
  pub fn base_url(&self) -> &str {
    self.endpoints.base()
  }

  fn auth_header(&self) -> Option<String> {
    self.token.as_ref().map(|token| format!("Bearer {token}"))
  }

  /// Perform one GET and decode the JSON body.
  ///
  /// # Arguments
  /// * `url` - Fully built endpoint URL.
  /// * `what` - Short noun used in error messages (`"posts"`, `"post"`).
  async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T> {
    debug!(%url, "GET {what}");

    let mut request = self.client.get(url).header("Accept", "application/json");
    if let Some(auth) = self.auth_header() {
      request = request.header("Authorization", auth);
    }

    let response = request.send().await.map_err(|source| FeedError::Network {
      context: format!("Failed to fetch {what} from WordPress API"),
      source,
    })?;

    let status = response.status();
    if !status.is_success() {
      let body = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("(no error details)"));
      return Err(FeedError::Status { status, body });
    }

    let bytes = response.bytes().await.map_err(|source| FeedError::Network {
      context: format!("Failed to read {what} response body"),
      source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| FeedError::Decode {
      context: format!("Failed to parse {what} response from WordPress API"),
      source,
    })
  }
}

#[async_trait]
impl WordPressApi for WordPressClient {
  async fn list_posts(&self, query: PostQuery) -> Result<Vec<Post>> {
    self.get_json(self.endpoints.posts(&query), "posts").await
  }

  async fn get_post(&self, id: u64) -> Result<Post> {
    self.get_json(self.endpoints.post(id), "post").await
  }

  async fn list_categories(&self, per_page: u32) -> Result<Vec<Category>> {
    self.get_json(self.endpoints.categories(per_page), "categories").await
  }
}

fn user_agent() -> String {
  format!("wpfeed/{} ({})", env!("CARGO_PKG_VERSION"), env!("TARGET"))
}
