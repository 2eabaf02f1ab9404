//! Implementations of the `signpost` subcommands.
//!
//! Every command writes its report to the given writer so the binary can
//! hand in a locked stdout and tests can hand in a buffer.
use std::{fs, io::Write, path::Path};

use color_eyre::eyre::{Context, Result, bail};
use log::{debug, info};
use serde::Serialize;
use signpost_config::SiteConfig;
use signpost_markdown::{SidebarItem, extract_sidebar, slugify};
use signpost_nav::{
  ItemState,
  LocationProvider,
  NavigationView,
  RenderedItem,
  SidebarKind,
  SidebarNav,
  html::render_sidebar_html,
  resolve_navigation,
  with_base,
};
use signpost_search::{
  FileIndexLoader,
  NO_RESULTS_TEXT,
  SearchClient,
  SuggestionResult,
};

/// How a command prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  Text,
  Json,
  Html,
}

impl OutputFormat {
  #[must_use]
  pub const fn from_flags(json: bool, html: bool) -> Self {
    if json {
      Self::Json
    } else if html {
      Self::Html
    } else {
      Self::Text
    }
  }
}

/// A fixed browser location, as given on the command line.
#[derive(Debug, Clone)]
pub struct StaticLocation {
  pub pathname: String,
  pub hash:     String,
}

impl LocationProvider for StaticLocation {
  fn pathname(&self) -> String {
    self.pathname.clone()
  }

  fn hash(&self) -> String {
    self.hash.clone()
  }
}

/// Write a starter configuration file.
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or if it
/// cannot be written.
pub fn init(output: &Path, format: &str, force: bool) -> Result<()> {
  if output.exists() && !force {
    bail!(
      "Configuration file already exists: {}. Use --force to overwrite.",
      output.display()
    );
  }

  if let Some(parent) = output.parent()
    && !parent.as_os_str().is_empty()
    && !parent.exists()
  {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create directory: {}", parent.display())
    })?;
    info!("Created directory: {}", parent.display());
  }

  SiteConfig::generate_default_config(format, output).wrap_err_with(|| {
    format!("Failed to generate configuration file: {}", output.display())
  })?;

  info!(
    "Configuration file created successfully. Edit it to describe your \
     site navigation."
  );
  Ok(())
}

/// Print one anchor per heading text. Texts with nothing anchorable print an
/// empty line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn slug(texts: &[String], out: &mut impl Write) -> Result<()> {
  for text in texts {
    writeln!(out, "{}", slugify(text))?;
  }
  Ok(())
}

fn write_items(
  out: &mut impl Write,
  items: &[SidebarItem],
  depth: usize,
) -> Result<()> {
  for item in items {
    writeln!(out, "{}{}  {}", "  ".repeat(depth), item.text, item.href)?;
    write_items(out, &item.items, depth + 1)?;
  }
  Ok(())
}

/// Print the sidebar extracted from one markdown file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or writing fails.
pub fn sidebar(
  file: &Path,
  base: &str,
  format: OutputFormat,
  out: &mut impl Write,
) -> Result<()> {
  let source = fs::read_to_string(file)
    .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
  let items = extract_sidebar(&source, base);
  debug!("Extracted {} top-level items from {}", items.len(), file.display());

  match format {
    OutputFormat::Json => {
      writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
    },
    OutputFormat::Text | OutputFormat::Html => write_items(out, &items, 0)?,
  }
  Ok(())
}

const fn kind_label(kind: Option<SidebarKind>) -> &'static str {
  match kind {
    Some(SidebarKind::Auto) => "auto",
    Some(SidebarKind::Manual) => "manual",
    None => "none",
  }
}

/// Print every resolved navigation section with its sidebar.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn resolve(
  config: &SiteConfig,
  format: OutputFormat,
  out: &mut impl Write,
) -> Result<()> {
  let navigation = resolve_navigation(config);

  if format == OutputFormat::Json {
    writeln!(out, "{}", serde_json::to_string_pretty(&navigation)?)?;
    return Ok(());
  }

  for section in &navigation.sections {
    writeln!(
      out,
      "{} ({}) [{}]",
      section.text,
      section.href,
      kind_label(section.sidebar.as_ref().map(|s| s.kind))
    )?;
    write_items(out, &section.resolved_items(), 1)?;
  }
  Ok(())
}

#[derive(Serialize)]
struct NavReport<'a> {
  service_name: Option<&'a str>,
  service_href: String,
  #[serde(flatten)]
  view:         &'a NavigationView,
  hydrated:     bool,
  items:        Vec<RenderedItem>,
}

const fn state_marker(state: ItemState) -> &'static str {
  match state {
    ItemState::Collapsed => "+",
    ItemState::ExpandedInactive => "-",
    ItemState::ExpandedActive => "*",
  }
}

fn write_rendered(
  out: &mut impl Write,
  items: &[RenderedItem],
  depth: usize,
) -> Result<()> {
  for item in items {
    writeln!(
      out,
      "{}{} {}  {}",
      "  ".repeat(depth),
      state_marker(item.state),
      item.text,
      item.href
    )?;
    write_rendered(out, &item.children, depth + 1)?;
  }
  Ok(())
}

/// Print the navigation state for a browser location.
///
/// Without `hash` the sidebar is reported as it renders before the real
/// location is known. With one, it is reported after hydration.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn nav(
  config: &SiteConfig,
  path: &str,
  hash: Option<&str>,
  format: OutputFormat,
  out: &mut impl Write,
) -> Result<()> {
  let navigation = resolve_navigation(config);
  let view = NavigationView::build(path, &navigation, &config.base_url);

  let mut sidebar = view.sidebar_nav();
  if let (Some(sidebar), Some(hash)) = (sidebar.as_mut(), hash) {
    sidebar.hydrate(&StaticLocation {
      pathname: path.to_string(),
      hash:     hash.to_string(),
    });
  }
  let hydrated = sidebar.as_ref().is_some_and(SidebarNav::is_hydrated);
  let items = sidebar.as_ref().map(SidebarNav::render).unwrap_or_default();

  let service_name = config.header.service_name.as_deref();
  let service_href = with_base(&config.header.service_href, &config.base_url);

  match format {
    OutputFormat::Json => {
      let report = NavReport {
        service_name,
        service_href,
        view: &view,
        hydrated,
        items,
      };
      writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    },
    OutputFormat::Html => {
      writeln!(out, "{}", render_sidebar_html(&items, &config.base_url))?;
    },
    OutputFormat::Text => {
      if let Some(name) = service_name {
        writeln!(out, "Service: {name}  {service_href}")?;
      }
      writeln!(out, "Path: {}", view.pathname)?;
      for service in &view.service {
        let marker = if service.active { "*" } else { " " };
        writeln!(out, "{marker} {}  {}", service.text, service.href)?;
      }
      if let Some(active) = &view.sidebar {
        writeln!(
          out,
          "Sidebar: {} [{}]",
          active.section_text,
          kind_label(Some(active.kind))
        )?;
        write_rendered(out, &items, 1)?;
      }
    },
  }
  Ok(())
}

/// Index URL to query: the explicit one, or the configured one.
///
/// # Errors
///
/// Returns an error if search is disabled and no URL was given.
pub fn index_url(config: &SiteConfig, index: Option<&str>) -> Result<String> {
  if let Some(index) = index {
    return Ok(index.to_string());
  }
  if !config.search.enable {
    bail!("Search is disabled in the configuration");
  }
  Ok(config.search.resolved_index_url())
}

fn write_suggestion(
  out: &mut impl Write,
  result: &SuggestionResult,
) -> Result<()> {
  writeln!(out, "{}  {}", result.label, result.target_url)?;
  if let Some(context) = result.context() {
    writeln!(out, "    {context}")?;
  }
  Ok(())
}

/// Query the search index of a built site.
///
/// # Errors
///
/// Returns an error if search is disabled without an explicit index or if
/// writing fails.
pub fn search(
  config: &SiteConfig,
  query: &str,
  site_dir: &Path,
  index: Option<&str>,
  format: OutputFormat,
  out: &mut impl Write,
) -> Result<()> {
  let url = index_url(config, index)?;
  let loader = FileIndexLoader::new(site_dir);

  // A failed load leaves the client empty, which reads as no results
  let mut client = SearchClient::new(config.base_url.clone());
  client.load_from(&loader, &url);

  let results = client.query(query);
  match format {
    OutputFormat::Json => {
      writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
    },
    OutputFormat::Html => {
      for result in &results {
        writeln!(out, "{}", result.render())?;
      }
    },
    OutputFormat::Text => {
      if results.is_empty() {
        writeln!(out, "{NO_RESULTS_TEXT}")?;
      }
      for result in &results {
        write_suggestion(out, result)?;
      }
    },
  }
  Ok(())
}
