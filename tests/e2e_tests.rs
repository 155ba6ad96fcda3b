//! End-to-end flows: fake API, state machines, and terminal rendering.

mod common;

use std::sync::Arc;

use common::fake_wordpress::{FakeWordPressClient, Request};
use common::fixtures::{self, BLOG_ID, NEWSLETTER_ID};
use wpfeed::cli::ColorOption;
use wpfeed::color::ColorScheme;
use wpfeed::commands::home::load_home;
use wpfeed::feed::{FeedState, FeedStateMachine};
use wpfeed::newsletter::NewsletterState;
use wpfeed::render::{render_categories, render_detail, render_items};
use wpfeed::wordpress::WordPressApi;

fn plain() -> ColorScheme {
  ColorScheme::new(ColorOption::Never)
}

#[tokio::test]
async fn test_home_flow_renders_newsletter_and_posts() {
  let fake = Arc::new(FakeWordPressClient::with_sample_site());

  let (feed, newsletters) = load_home(fake.clone(), 2).await;

  let NewsletterState::Success { items: latest } = newsletters.state() else {
    panic!("expected newsletter Success");
  };
  assert_eq!(latest.len(), 1);
  assert_eq!(latest[0].plain_title, "Newsletter #2");

  let FeedState::Success { items, has_more } = feed.state() else {
    panic!("expected feed Success");
  };
  assert!(has_more);
  insta::assert_snapshot!(render_items(&items, &plain()), @r"
  #105 May & More
    May 01, 2024 | news
    Excerpt of post 105…
    https://example.com/wp-content/uploads/105.jpg

  #104 April Notes
    April 01, 2024 | notes, spring
    Excerpt of post 104…
    https://example.com/wp-content/uploads/104.jpg
  ");
}

#[tokio::test]
async fn test_home_flow_lists_categories_once() {
  let fake = Arc::new(FakeWordPressClient::with_sample_site());

  load_home(fake.clone(), 2).await;

  let mut requests = fake.requests();
  assert_eq!(requests.remove(0), Request::Categories);
  requests.sort_by_key(|request| matches!(request, Request::Posts { category_id: Some(id), .. } if *id == BLOG_ID));
  assert_eq!(
    requests,
    vec![
      Request::Posts {
        page: 1,
        per_page: 1,
        category_id: Some(NEWSLETTER_ID)
      },
      Request::Posts {
        page: 1,
        per_page: 2,
        category_id: Some(BLOG_ID)
      },
    ]
  );
}

#[tokio::test]
async fn test_home_flow_reports_missing_category_per_machine() {
  let fake = Arc::new(FakeWordPressClient::with_sample_site());
  fake.set_categories(fixtures::sample_categories().into_iter().filter(|c| c.slug != "newsletter").collect());

  let (feed, newsletters) = load_home(fake, 2).await;

  assert!(matches!(feed.state(), FeedState::Success { .. }));
  assert_eq!(
    newsletters.state(),
    NewsletterState::Error {
      message: "Category 'newsletter' not found".to_string()
    }
  );
}

#[tokio::test]
async fn test_post_detail_renders_plain_text_body() {
  let fake = Arc::new(FakeWordPressClient::with_sample_site());
  let feed = FeedStateMachine::new(fake);

  feed.fetch_post(103).await;

  let FeedState::PostSuccess { detail } = feed.state() else {
    panic!("expected PostSuccess");
  };
  insta::assert_snapshot!(render_detail(&detail, &plain(), false), @r"
  March Madness
  March 05, 2024
  https://example.com/wp-content/uploads/103.jpg

  Body of post 103.
  Second paragraph & more.
  ");
}

#[tokio::test]
async fn test_categories_listing() {
  let fake = FakeWordPressClient::with_sample_site();
  let categories = fake.list_categories(100).await.unwrap();

  assert_eq!(
    render_categories(&categories, &plain()),
    "1  uncategorized  Uncategorized (0)\n3  blog           Blog (5)\n7  newsletter     Newsletter (2)"
  );
  assert_eq!(categories.len(), fixtures::sample_categories().len());
}
