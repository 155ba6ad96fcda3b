//! Fake WordPress API client for testing
//!
//! Serves predefined categories and posts without any network access, records
//! when each call starts and finishes, and can inject latency, failures, and
//! scripted responses.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use wpfeed::error::{FeedError, Result};
use wpfeed::wordpress::{Category, Post, PostQuery, WordPressApi};

use crate::common::fixtures;

/// One API call as seen by the fake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
  Categories,
  Posts { page: u32, per_page: u32, category_id: Option<u64> },
  Post { id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
  Started(Request),
  Finished(Request),
}

/// A canned `list_posts` answer consumed by the next call.
pub struct ScriptedPosts {
  pub delay: Duration,
  pub posts: Vec<Post>,
}

/// A fake WordPress client that returns predefined responses for testing
pub struct FakeWordPressClient {
  categories: Mutex<Vec<Category>>,
  posts: Mutex<Vec<(u64, Post)>>,
  scripted: Mutex<VecDeque<ScriptedPosts>>,
  latency: Duration,
  fail_categories: AtomicBool,
  fail_posts: AtomicBool,
  events: Mutex<Vec<Event>>,
}

impl FakeWordPressClient {
  /// Create a new fake client with no categories and no posts
  pub fn new() -> Self {
    Self {
      categories: Mutex::new(Vec::new()),
      posts: Mutex::new(Vec::new()),
      scripted: Mutex::new(VecDeque::new()),
      latency: Duration::ZERO,
      fail_categories: AtomicBool::new(false),
      fail_posts: AtomicBool::new(false),
      events: Mutex::new(Vec::new()),
    }
  }

  /// Create a fake client with the sample categories, blog posts and
  /// newsletters
  pub fn with_sample_site() -> Self {
    let client = Self::new();
    client.set_categories(fixtures::sample_categories());
    client.set_posts(fixtures::BLOG_ID, fixtures::sample_blog_posts());
    client.set_posts(fixtures::NEWSLETTER_ID, fixtures::sample_newsletters());
    client
  }

  /// Delay every call by `latency` between its start and finish events.
  pub fn with_latency(mut self, latency: Duration) -> Self {
    self.latency = latency;
    self
  }

  pub fn set_categories(&self, categories: Vec<Category>) {
    *self.categories.lock().unwrap() = categories;
  }

  /// Replace every post of `category_id` with `posts` (kept in this order).
  pub fn set_posts(&self, category_id: u64, posts: Vec<Post>) {
    let mut all = self.posts.lock().unwrap();
    all.retain(|(category, _)| *category != category_id);
    all.extend(posts.into_iter().map(|post| (category_id, post)));
  }

  /// Queue a response for the next `list_posts` call, regardless of query.
  pub fn push_scripted_posts(&self, delay: Duration, posts: Vec<Post>) {
    self.scripted.lock().unwrap().push_back(ScriptedPosts { delay, posts });
  }

  pub fn set_categories_fail(&self, fail: bool) {
    self.fail_categories.store(fail, Ordering::SeqCst);
  }

  pub fn set_posts_fail(&self, fail: bool) {
    self.fail_posts.store(fail, Ordering::SeqCst);
  }

  pub fn events(&self) -> Vec<Event> {
    self.events.lock().unwrap().clone()
  }

  pub fn clear_events(&self) {
    self.events.lock().unwrap().clear();
  }

  /// Requests in the order they started.
  pub fn requests(&self) -> Vec<Request> {
    self
      .events()
      .into_iter()
      .filter_map(|event| match event {
        Event::Started(request) => Some(request),
        Event::Finished(_) => None,
      })
      .collect()
  }

  async fn record<T>(&self, request: Request, delay: Duration, respond: impl FnOnce() -> Result<T>) -> Result<T> {
    self.events.lock().unwrap().push(Event::Started(request));
    if !delay.is_zero() {
      tokio::time::sleep(delay).await;
    }
    let result = respond();
    self.events.lock().unwrap().push(Event::Finished(request));
    result
  }

  fn server_error() -> FeedError {
    FeedError::Status {
      status: StatusCode::INTERNAL_SERVER_ERROR,
      body: "{\"code\":\"internal_error\"}".to_string(),
    }
  }
}

impl Default for FakeWordPressClient {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl WordPressApi for FakeWordPressClient {
  async fn list_posts(&self, query: PostQuery) -> Result<Vec<Post>> {
    let request = Request::Posts {
      page: query.page,
      per_page: query.per_page,
      category_id: query.category_id,
    };

    let scripted = self.scripted.lock().unwrap().pop_front();
    if let Some(ScriptedPosts { delay, posts }) = scripted {
      return self.record(request, delay, || Ok(posts)).await;
    }

    self
      .record(request, self.latency, || {
        if self.fail_posts.load(Ordering::SeqCst) {
          return Err(Self::server_error());
        }

        let all = self.posts.lock().unwrap();
        let skip = (query.page.saturating_sub(1) * query.per_page) as usize;
        Ok(
          all
            .iter()
            .filter(|(category, _)| query.category_id.is_none_or(|wanted| wanted == *category))
            .map(|(_, post)| post.clone())
            .skip(skip)
            .take(query.per_page as usize)
            .collect(),
        )
      })
      .await
  }

  async fn get_post(&self, id: u64) -> Result<Post> {
    self
      .record(Request::Post { id }, self.latency, || {
        self
          .posts
          .lock()
          .unwrap()
          .iter()
          .find(|(_, post)| post.id == id)
          .map(|(_, post)| post.clone())
          .ok_or_else(|| FeedError::Status {
            status: StatusCode::NOT_FOUND,
            body: "{\"code\":\"rest_post_invalid_id\",\"message\":\"Invalid post ID.\"}".to_string(),
          })
      })
      .await
  }

  async fn list_categories(&self, per_page: u32) -> Result<Vec<Category>> {
    self
      .record(Request::Categories, self.latency, || {
        if self.fail_categories.load(Ordering::SeqCst) {
          return Err(Self::server_error());
        }
        Ok(
          self
            .categories
            .lock()
            .unwrap()
            .iter()
            .take(per_page as usize)
            .cloned()
            .collect(),
        )
      })
      .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_fake_client_empty() {
    let client = FakeWordPressClient::new();
    assert!(client.list_categories(100).await.unwrap().is_empty());
    assert!(client.get_post(1).await.unwrap_err().is_network());
  }

  #[tokio::test]
  async fn test_fake_client_paginates_by_category() {
    let client = FakeWordPressClient::with_sample_site();

    let first = client
      .list_posts(PostQuery::new(1, 2).in_category(fixtures::BLOG_ID))
      .await
      .unwrap();
    let third = client
      .list_posts(PostQuery::new(3, 2).in_category(fixtures::BLOG_ID))
      .await
      .unwrap();

    assert_eq!(first.iter().map(|p| p.id).collect::<Vec<_>>(), vec![105, 104]);
    assert_eq!(third.iter().map(|p| p.id).collect::<Vec<_>>(), vec![101]);
  }

  #[tokio::test]
  async fn test_fake_client_records_calls() {
    let client = FakeWordPressClient::with_sample_site();
    client.get_post(105).await.unwrap();
    assert_eq!(
      client.events(),
      vec![
        Event::Started(Request::Post { id: 105 }),
        Event::Finished(Request::Post { id: 105 })
      ]
    );
  }
}
