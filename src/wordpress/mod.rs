//! WordPress module providing the API abstraction, the HTTP client, data
//! models, endpoint building, and category resolution.

pub mod api;
pub mod category;
pub mod client;
pub mod models;
pub mod url;

pub use api::{DEFAULT_CATEGORY_PAGE_SIZE, PostQuery, WordPressApi};
pub use category::{BLOG_SLUG, NEWSLETTER_SLUG, find_category_id, resolve_category_id};
pub use client::WordPressClient;
pub use models::{Category, Embedded, FeaturedMedia, Post, Rendered, Term};
pub use self::url::ApiEndpoints;
