//! Test fixtures for WordPress REST API responses
//!
//! Realistic sample payloads shaped like `GET /wp/v2/posts?_embed` and
//! `GET /wp/v2/categories` responses.

use serde_json::json;
use wpfeed::wordpress::{Category, Post};

pub const BLOG_ID: u64 = 3;
pub const NEWSLETTER_ID: u64 = 7;
pub const UNCATEGORIZED_ID: u64 = 1;

/// Category listing of the sample site.
pub fn sample_categories_response() -> serde_json::Value {
  json!([
    { "id": UNCATEGORIZED_ID, "slug": "uncategorized", "name": "Uncategorized", "count": 0,
      "taxonomy": "category", "link": "https://example.com/category/uncategorized/" },
    { "id": BLOG_ID, "slug": "blog", "name": "Blog", "count": 5,
      "taxonomy": "category", "link": "https://example.com/category/blog/" },
    { "id": NEWSLETTER_ID, "slug": "newsletter", "name": "Newsletter", "count": 2,
      "taxonomy": "category", "link": "https://example.com/category/newsletter/" }
  ])
}

pub fn sample_categories() -> Vec<Category> {
  serde_json::from_value(sample_categories_response()).expect("valid categories fixture")
}

/// A post payload with embedded featured media and a category + tag group.
pub fn post_response(id: u64, category_id: u64, date: &str, title: &str, tags: &[&str]) -> serde_json::Value {
  let tag_terms: Vec<_> = tags
    .iter()
    .enumerate()
    .map(|(index, name)| json!({ "id": 100 + index as u64, "name": name, "taxonomy": "post_tag", "slug": name.to_lowercase() }))
    .collect();

  json!({
    "id": id,
    "date": date,
    "date_gmt": date,
    "slug": format!("post-{id}"),
    "status": "publish",
    "type": "post",
    "link": format!("https://example.com/post-{id}/"),
    "title": { "rendered": title },
    "content": {
      "rendered": format!("<p>Body of post {id}.</p>\n<p>Second paragraph &amp; more.</p>\n"),
      "protected": false
    },
    "excerpt": {
      "rendered": format!("<p>Excerpt of post {id}&hellip;</p>\n"),
      "protected": false
    },
    "categories": [category_id],
    "_embedded": {
      "author": [{ "id": 1, "name": "Editor" }],
      "wp:featuredmedia": [{
        "id": 900 + id,
        "source_url": format!("https://example.com/wp-content/uploads/{id}.jpg"),
        "media_type": "image"
      }],
      "wp:term": [
        [{ "id": category_id, "name": "Category", "taxonomy": "category", "slug": "category" }],
        tag_terms
      ]
    }
  })
}

/// A post payload without `_embedded`.
pub fn bare_post_response(id: u64, title: &str) -> serde_json::Value {
  json!({
    "id": id,
    "date": "2024-02-29T12:00:00",
    "title": { "rendered": title },
    "content": { "rendered": "<p>Bare</p>" },
    "excerpt": { "rendered": "" }
  })
}

pub fn post(id: u64, category_id: u64, date: &str, title: &str, tags: &[&str]) -> Post {
  serde_json::from_value(post_response(id, category_id, date, title, tags)).expect("valid post fixture")
}

/// Five blog posts, newest first.
pub fn sample_blog_posts() -> Vec<Post> {
  vec![
    post(105, BLOG_ID, "2024-05-01T08:00:00", "May &amp; More", &["news"]),
    post(104, BLOG_ID, "2024-04-01T08:00:00", "April Notes", &["notes", "spring"]),
    post(103, BLOG_ID, "2024-03-05T09:30:00", "March <em>Madness</em>", &[]),
    post(102, BLOG_ID, "2024-02-01T08:00:00", "February Recap", &["recap"]),
    post(101, BLOG_ID, "2024-01-01T08:00:00", "Hello World", &[]),
  ]
}

/// Two newsletters, newest first.
pub fn sample_newsletters() -> Vec<Post> {
  vec![
    post(202, NEWSLETTER_ID, "2024-04-15T10:00:00", "Newsletter #2", &["newsletter"]),
    post(201, NEWSLETTER_ID, "2024-03-15T10:00:00", "Newsletter #1", &["newsletter"]),
  ]
}
