//! Command-line interface definitions for wpfeed.
//!
//! Defines the CLI structure using clap derives, initializes logging, and
//! dispatches to the subcommand handlers.

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::color::ColorScheme;
use crate::commands::categories::handle_categories_command;
use crate::commands::completions::handle_completions_command;
use crate::commands::home::handle_home_command;
use crate::commands::newsletter::handle_newsletter_command;
use crate::commands::post::handle_post_command;
use crate::commands::posts::handle_posts_command;
use crate::commands::version::handle_version_command;
use crate::feed::{DEFAULT_PER_PAGE, MAX_PER_PAGE};
use crate::newsletter::DEFAULT_NEWSLETTER_PER_PAGE;
use crate::wordpress::{ApiEndpoints, BLOG_SLUG};

/// wpfeed - Read a WordPress blog from the terminal
#[derive(Debug, Parser)]
#[command(
  name = "wpfeed",
  version,
  about = "Read a WordPress blog from the terminal",
  long_about = "A command-line client for WordPress blogs.\n\
                Lists blog posts page by page, opens single posts, and shows the latest newsletters\n\
                using the public WordPress REST API.",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Subcommand to execute
  #[command(subcommand)]
  pub command: Command,

  /// Connection options
  #[command(flatten)]
  pub connection: ConnectionOptions,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,

  /// Performance options
  #[command(flatten)]
  pub performance: PerformanceOptions,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// List blog posts, page by page
  Posts {
    /// Posts per page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE, value_name = "N")]
    per_page: u32,

    /// Number of pages to load
    #[arg(long, default_value_t = 1, value_name = "N")]
    pages: u32,

    /// Category slug to list
    #[arg(long, default_value = BLOG_SLUG, value_name = "SLUG")]
    category: String,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
  },

  /// Show a single post
  Post {
    /// Numeric post id
    #[arg(value_name = "ID", value_parser = clap::value_parser!(u64).range(1..))]
    id: u64,

    /// Print the post body as HTML instead of plain text
    #[arg(long)]
    html: bool,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
  },

  /// Show the latest newsletters
  Newsletter {
    /// Number of newsletters to load
    #[arg(long, default_value_t = DEFAULT_NEWSLETTER_PER_PAGE, value_name = "N")]
    per_page: u32,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
  },

  /// Show the latest newsletter and the first page of posts
  Home {
    /// Posts per page
    #[arg(long, default_value_t = 10, value_name = "N")]
    per_page: u32,
  },

  /// List the site's categories
  Categories {
    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
  },

  /// Display version and build information
  Version {
    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Show only version number
    #[arg(long)]
    short: bool,
  },

  /// Generate shell completion scripts
  Completions {
    /// Target shell for completions
    #[arg(value_enum)]
    shell: Shell,
  },
}

/// Shells supported by `wpfeed completions`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
  Bash,
  Zsh,
  Fish,
  Powershell,
  Elvish,
}

/// Normalize a site or API URL into the REST API base.
fn normalize_url(url: &str) -> Result<String, String> {
  ApiEndpoints::parse(url)
    .map(|endpoints| endpoints.base().to_string())
    .map_err(|e| e.to_string())
}

/// Connection options
#[derive(Debug, Parser)]
pub struct ConnectionOptions {
  /// WordPress site or REST API URL
  #[arg(long, env = "WORDPRESS_API_URL", value_name = "URL", value_parser = normalize_url)]
  pub url: Option<String>,

  /// Bearer token for the WordPress API
  #[arg(long, env = "WORDPRESS_API_KEY", value_name = "TOKEN", hide_env_values = true)]
  pub token: Option<String>,
}

/// Behavior options
#[derive(Debug, Parser)]
pub struct BehaviorOptions {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Colorize output
  #[arg(long, value_enum, default_value = "auto", value_name = "WHEN")]
  pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
  Auto,
  Always,
  Never,
}

/// Performance options
#[derive(Debug, Parser)]
pub struct PerformanceOptions {
  /// Request timeout in seconds
  #[arg(long, default_value = "30", value_name = "SECONDS")]
  pub timeout: u64,
}

impl Command {
  /// Whether the command talks to a WordPress site.
  pub fn needs_connection(&self) -> bool {
    !matches!(self, Command::Version { .. } | Command::Completions { .. })
  }
}

impl Cli {
  /// Validate CLI arguments
  ///
  /// Returns an error if the CLI configuration is invalid.
  pub fn validate(&self) -> Result<(), String> {
    if self.command.needs_connection() && self.connection.url.is_none() {
      return Err("--url (or WORDPRESS_API_URL) is required to reach a WordPress site".to_string());
    }

    let per_page = match &self.command {
      Command::Posts { per_page, pages, .. } => {
        if *pages == 0 {
          return Err("--pages must be at least 1".to_string());
        }
        Some(*per_page)
      }
      Command::Newsletter { per_page, .. } | Command::Home { per_page } => Some(*per_page),
      _ => None,
    };

    if let Some(per_page) = per_page
      && !(1..=MAX_PER_PAGE).contains(&per_page)
    {
      return Err(format!("--per-page must be between 1 and {MAX_PER_PAGE}"));
    }

    if self.performance.timeout == 0 {
      return Err("--timeout must be at least 1 second".to_string());
    }

    Ok(())
  }
}

/// Parse CLI arguments, initialize logging, and dispatch to the chosen
/// command.
pub async fn run() {
  let cli = Cli::parse();

  init_tracing(&cli.behavior);

  let colors = ColorScheme::new(cli.behavior.color);

  if let Err(e) = cli.validate() {
    eprintln!("{} {}", colors.error("Error:"), e);
    process::exit(4); // Invalid arguments exit code
  }

  match &cli.command {
    Command::Posts {
      per_page,
      pages,
      category,
      json,
    } => handle_posts_command(category, *per_page, *pages, *json, &cli, &colors).await,
    Command::Post { id, html, json } => handle_post_command(*id, *html, *json, &cli, &colors).await,
    Command::Newsletter { per_page, json } => handle_newsletter_command(*per_page, *json, &cli, &colors).await,
    Command::Home { per_page } => handle_home_command(*per_page, &cli, &colors).await,
    Command::Categories { json } => handle_categories_command(*json, &cli, &colors).await,
    Command::Version { json, short } => handle_version_command(*json, *short, &colors),
    Command::Completions { shell } => handle_completions_command(*shell),
  }
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}
