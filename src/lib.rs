//! WordPress feed synchronization library
//!
//! Fetches paginated, categorized posts from the WordPress REST API and
//! exposes them as observable UI states, with a terminal front end on top.

pub mod cli;
pub mod color;
pub mod commands;
pub mod error;
pub mod feed;
pub mod html;
pub mod newsletter;
pub mod render;
pub mod view_model;
pub mod wordpress;
