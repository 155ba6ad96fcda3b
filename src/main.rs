//! wpfeed - Read a WordPress blog from the terminal
//!
//! This is the main entry point for the CLI application.

#[tokio::main]
async fn main() {
  wpfeed::cli::run().await;
}
