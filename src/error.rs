//! Error kinds raised by the WordPress gateway and category resolution.
//!
//! The state machines never let these escape: they are rendered into the
//! `Error { message }` state via their `Display` output.

use reqwest::StatusCode;

/// Convenience alias for results produced by the gateway.
pub type Result<T> = core::result::Result<T, FeedError>;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
  /// The request never produced a response (DNS, TLS, connect, timeout).
  #[error("{context}: {source}")]
  Network {
    context: String,
    #[source]
    source: reqwest::Error,
  },

  /// The server answered with a non-success status.
  #[error("WordPress API returned error {status}: {body}")]
  Status { status: StatusCode, body: String },

  /// The response body did not match the expected JSON shape.
  #[error("{context}: {source}")]
  Decode {
    context: String,
    #[source]
    source: serde_json::Error,
  },

  /// No category carries the requested slug.
  #[error("Category '{slug}' not found")]
  NotFound { slug: String },

  /// The API base URL could not be turned into an endpoint.
  #[error("Invalid API URL '{url}': {reason}")]
  InvalidUrl { url: String, reason: String },
}

impl FeedError {
  /// Whether this error is a transport or HTTP status failure.
  pub fn is_network(&self) -> bool {
    matches!(self, Self::Network { .. } | Self::Status { .. })
  }

  pub fn is_decode(&self) -> bool {
    matches!(self, Self::Decode { .. })
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound { .. })
  }
}
