//! Build-time expansion of `auto` sidebars.
use std::{
  fs,
  path::{Path, PathBuf},
};

use log::{info, warn};
use rayon::prelude::*;
use signpost_config::{NavigationSection, SidebarSpec, SiteConfig};
use signpost_markdown::extract_sidebar;

use crate::resolve::{ResolvedNavigation, ResolvedSection, Sidebar};

/// Extensions tried, in order, when looking up an auto sidebar's source.
const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Locate the markdown source for a file stem under `docs_dir`.
#[must_use]
pub fn find_markdown_source(docs_dir: &Path, stem: &str) -> Option<PathBuf> {
  MARKDOWN_EXTENSIONS
    .iter()
    .map(|ext| docs_dir.join(format!("{stem}.{ext}")))
    .find(|candidate| candidate.is_file())
}

fn extract_auto_sidebar(section: &NavigationSection, docs_dir: &Path) -> Sidebar {
  let stem = section.source_stem();
  let Some(path) = find_markdown_source(docs_dir, stem) else {
    warn!(
      "sidebar: \"auto\" on \"{}\" could not find markdown file at {}.(md|mdx)",
      section.base_path(),
      docs_dir.join(stem).display()
    );
    return Sidebar::auto(Vec::new());
  };

  match fs::read_to_string(&path) {
    Ok(content) => Sidebar::auto(extract_sidebar(&content, section.base_path())),
    Err(e) => {
      warn!("Failed to read {} for auto sidebar: {e}", path.display());
      Sidebar::auto(Vec::new())
    },
  }
}

/// Resolve one configured section.
#[must_use]
pub fn resolve_section(
  section: &NavigationSection,
  docs_dir: &Path,
) -> ResolvedSection {
  let sidebar = section.sidebar.as_ref().map(|spec| {
    match spec {
      SidebarSpec::Auto => extract_auto_sidebar(section, docs_dir),
      SidebarSpec::Manual(items) => Sidebar::manual(items.clone()),
    }
  });

  ResolvedSection {
    href: section.base_path().to_string(),
    text: section.text.clone(),
    sidebar,
  }
}

/// Expand every `auto` sidebar in the configuration.
///
/// Each markdown source is read once. A missing or unreadable file is logged
/// and yields an empty auto sidebar so the rest of the site still builds.
/// Sections keep their configured order.
#[must_use]
pub fn resolve_navigation(config: &SiteConfig) -> ResolvedNavigation {
  let sections: Vec<ResolvedSection> = config
    .navigation
    .par_iter()
    .map(|section| resolve_section(section, &config.docs_dir))
    .collect();

  let auto_count = sections
    .iter()
    .filter(|s| s.sidebar.as_ref().is_some_and(Sidebar::is_anchor_based))
    .count();
  info!(
    "Resolved {} navigation sections ({auto_count} auto sidebars)",
    sections.len()
  );

  ResolvedNavigation::new(sections)
}
