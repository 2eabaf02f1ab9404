use log::debug;
use serde::{Deserialize, Serialize};
use signpost_markdown::SidebarItem;

/// Where a sidebar's items came from.
///
/// The two kinds are matched differently on the client: auto sidebars link
/// to anchors inside one page, manual sidebars link to separate pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarKind {
  /// Extracted from the section's markdown headings.
  Auto,
  /// Written by hand in the site configuration.
  Manual,
}

/// A concrete sidebar, after `auto` directives have been expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidebar {
  pub kind:  SidebarKind,
  pub items: Vec<SidebarItem>,
}

impl Sidebar {
  #[must_use]
  pub const fn auto(items: Vec<SidebarItem>) -> Self {
    Self {
      kind: SidebarKind::Auto,
      items,
    }
  }

  #[must_use]
  pub const fn manual(items: Vec<SidebarItem>) -> Self {
    Self {
      kind: SidebarKind::Manual,
      items,
    }
  }

  /// Whether the sidebar links to anchors within a single page.
  #[must_use]
  pub const fn is_anchor_based(&self) -> bool {
    matches!(self.kind, SidebarKind::Auto)
  }
}

/// A navigation section whose sidebar no longer needs the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSection {
  pub href: String,
  pub text: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sidebar: Option<Sidebar>,
}

impl ResolvedSection {
  /// The section href, treating an empty one as the site root.
  #[must_use]
  pub fn base_path(&self) -> &str {
    if self.href.is_empty() { "/" } else { &self.href }
  }

  /// Sidebar items with every href made absolute.
  #[must_use]
  pub fn resolved_items(&self) -> Vec<SidebarItem> {
    self
      .sidebar
      .as_ref()
      .map(|sidebar| resolve_sidebar_paths(&sidebar.items, self.base_path()))
      .unwrap_or_default()
  }
}

/// The whole navigation configuration, resolved once per build and shared
/// read-only by every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedNavigation {
  pub sections: Vec<ResolvedSection>,
}

impl ResolvedNavigation {
  #[must_use]
  pub const fn new(sections: Vec<ResolvedSection>) -> Self {
    Self { sections }
  }

  /// See [`find_active_section`].
  #[must_use]
  pub fn find_active(&self, pathname: &str) -> Option<&ResolvedSection> {
    find_active_section(pathname, &self.sections)
  }
}

/// Join `href` onto `base_path` unless it is already absolute.
#[must_use]
pub fn resolve_path(base_path: &str, href: &str) -> String {
  if href.starts_with('/') {
    return href.to_string();
  }
  if base_path == "/" {
    return format!("/{href}");
  }

  let base = base_path.strip_suffix('/').unwrap_or(base_path);
  format!("{base}/{href}")
}

/// Make every href in a sidebar tree absolute.
///
/// Top-level items resolve against `base_path`; children resolve against
/// their parent's resolved href.
#[must_use]
pub fn resolve_sidebar_paths(
  items: &[SidebarItem],
  base_path: &str,
) -> Vec<SidebarItem> {
  items
    .iter()
    .map(|item| {
      let href = resolve_path(base_path, &item.href);
      let items = resolve_sidebar_paths(&item.items, &href);
      SidebarItem {
        text: item.text.clone(),
        href,
        items,
      }
    })
    .collect()
}

/// Whether `pathname` is the section's own page or one of its sub-paths.
///
/// The separator is required, so `/` only ever matches itself and `/doc`
/// does not match `/docs`.
#[must_use]
pub fn path_in_section(pathname: &str, section_path: &str) -> bool {
  if pathname == section_path {
    return true;
  }

  let prefix = section_path.trim_end_matches('/');
  if prefix.is_empty() {
    return false;
  }

  pathname == prefix
    || pathname
      .strip_prefix(prefix)
      .is_some_and(|rest| rest.starts_with('/'))
}

fn sidebar_contains_path(items: &[SidebarItem], pathname: &str) -> bool {
  items.iter().any(|item| {
    item.href == pathname
      || item.items.iter().any(|nested| nested.href == pathname)
  })
}

/// Pick the section whose sidebar should be shown for `pathname`.
///
/// Sections are tried in configured order and the first match wins. A
/// section matches when the path is inside the section's base path, or,
/// failing that, when one of its resolved sidebar links is exactly the path.
/// The first rule covers auto sidebars, whose fragment links can never equal
/// a bare path; the second covers manual sidebars listing pages outside the
/// section's prefix. Sections without a sidebar never match.
#[must_use]
pub fn find_active_section<'a>(
  pathname: &str,
  sections: &'a [ResolvedSection],
) -> Option<&'a ResolvedSection> {
  let active = sections.iter().find(|section| {
    let Some(sidebar) = &section.sidebar else {
      return false;
    };

    let base_path = section.base_path();
    if path_in_section(pathname, base_path) {
      return true;
    }

    let resolved = resolve_sidebar_paths(&sidebar.items, base_path);
    sidebar_contains_path(&resolved, pathname)
  });

  match active {
    Some(section) => debug!("Active section for {pathname}: {}", section.href),
    None => debug!("No active section for {pathname}"),
  }
  active
}

#[cfg(test)]
mod tests {
  use super::*;

  fn section(href: &str, sidebar: Option<Sidebar>) -> ResolvedSection {
    ResolvedSection {
      href: href.to_string(),
      text: href.to_string(),
      sidebar,
    }
  }

  #[test]
  fn test_resolve_path() {
    assert_eq!(resolve_path("/docs", "foo"), "/docs/foo");
    assert_eq!(resolve_path("/docs/", "foo"), "/docs/foo");
    assert_eq!(resolve_path("/", "foo"), "/foo");
    assert_eq!(resolve_path("/docs", "/abs"), "/abs");
  }

  #[test]
  fn test_children_resolve_against_parent() {
    let items = vec![
      SidebarItem::new("Usage", "usage")
        .with_items(vec![SidebarItem::new("Flags", "flags")]),
    ];
    let resolved = resolve_sidebar_paths(&items, "/guide");

    assert_eq!(resolved[0].href, "/guide/usage");
    assert_eq!(resolved[0].items[0].href, "/guide/usage/flags");
  }

  #[test]
  fn test_path_in_section() {
    assert!(path_in_section("/docs", "/docs"));
    assert!(path_in_section("/docs/page", "/docs"));
    assert!(path_in_section("/docs/page", "/docs/"));
    assert!(path_in_section("/docs", "/docs/"));
    assert!(!path_in_section("/docsets", "/docs"));
    assert!(path_in_section("/", "/"));
    assert!(!path_in_section("/docs", "/"));
  }

  #[test]
  fn test_section_without_sidebar_is_never_active() {
    let sections = vec![section("/about", None)];
    assert!(find_active_section("/about", &sections).is_none());
  }
}
