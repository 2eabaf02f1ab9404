use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for signpost
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Signpost: navigation and search for documentation sites"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times) Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(
    short = 'c',
    long = "config-file",
    global = true,
    action = clap::ArgAction::Append
  )]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", global = true, action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,

  /// Number of threads to use for parallel processing.
  #[arg(short = 'p', long = "jobs", global = true)]
  pub jobs: Option<usize>,
}

/// All supported subcommands for the signpost CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new Signpost configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "signpost.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Print the URL anchor for each heading text.
  Slug {
    /// Heading texts, one anchor is printed per argument.
    #[arg(required = true)]
    text: Vec<String>,
  },

  /// Extract the sidebar of a single markdown file.
  Sidebar {
    /// Markdown file to read.
    file: PathBuf,

    /// Page path the anchors belong to.
    #[arg(short, long, default_value = "/")]
    base: String,

    /// Print the sidebar as JSON.
    #[arg(long)]
    json: bool,
  },

  /// Resolve every configured navigation section.
  Resolve {
    /// Print the resolved navigation as JSON.
    #[arg(long)]
    json: bool,
  },

  /// Show the navigation state for a browser location.
  Nav {
    /// Browser pathname, including any base URL.
    path: String,

    /// Current fragment. Without it the sidebar is shown as it renders
    /// before the browser location is known.
    #[arg(long)]
    hash: Option<String>,

    /// Print the navigation state as JSON.
    #[arg(long, conflicts_with = "html")]
    json: bool,

    /// Print the sidebar markup.
    #[arg(long)]
    html: bool,
  },

  /// Query a built search index.
  Search {
    /// Search query.
    query: String,

    /// Directory of the built site holding the search index.
    #[arg(short = 'd', long, default_value = ".")]
    site_dir: PathBuf,

    /// Index URL, overriding the configured one.
    #[arg(short, long)]
    index: Option<String>,

    /// Print suggestions as JSON.
    #[arg(long, conflicts_with = "html")]
    json: bool,

    /// Print suggestion markup.
    #[arg(long)]
    html: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
