use std::io;

use color_eyre::eyre::Result;
use log::LevelFilter;
use signpost::{
  cli::{Cli, Commands},
  commands::{self, OutputFormat},
};
use signpost_config::SiteConfig;

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  let mut stdout = io::stdout().lock();

  // Commands that do not need a site configuration
  match &cli.command {
    Commands::Init {
      output,
      format,
      force,
    } => return commands::init(output, format, *force),
    Commands::Slug { text } => return commands::slug(text, &mut stdout),
    Commands::Sidebar { file, base, json } => {
      return commands::sidebar(
        file,
        base,
        OutputFormat::from_flags(*json, false),
        &mut stdout,
      );
    },
    _ => {},
  }

  let config = SiteConfig::load(&cli.config_files, &cli.config_overrides)?;

  // Setup thread pool once for all parallel operations
  let thread_count = cli.jobs.or(config.jobs).unwrap_or_else(num_cpus::get);
  rayon::ThreadPoolBuilder::new()
    .num_threads(thread_count)
    .build_global()?;

  match &cli.command {
    Commands::Resolve { json } => {
      commands::resolve(
        &config,
        OutputFormat::from_flags(*json, false),
        &mut stdout,
      )
    },
    Commands::Nav {
      path,
      hash,
      json,
      html,
    } => {
      commands::nav(
        &config,
        path,
        hash.as_deref(),
        OutputFormat::from_flags(*json, *html),
        &mut stdout,
      )
    },
    Commands::Search {
      query,
      site_dir,
      index,
      json,
      html,
    } => {
      commands::search(
        &config,
        query,
        site_dir,
        index.as_deref(),
        OutputFormat::from_flags(*json, *html),
        &mut stdout,
      )
    },
    Commands::Init { .. } | Commands::Slug { .. } | Commands::Sidebar { .. } => {
      Ok(())
    },
  }
}
