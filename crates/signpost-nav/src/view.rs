use serde::Serialize;
use signpost_markdown::SidebarItem;

use crate::{
  base::{strip_base_url, with_base},
  resolve::{ResolvedNavigation, SidebarKind},
  state::SidebarNav,
};

/// One link of the top-level service navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceItem {
  pub text:   String,
  /// Link with the deployment prefix applied.
  pub href:   String,
  pub active: bool,
}

/// The active section and its sidebar for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSidebar {
  pub section_href: String,
  pub section_text: String,
  pub kind:         SidebarKind,
  /// Items with site-root hrefs, not yet prefixed with the base URL.
  pub items:        Vec<SidebarItem>,
}

/// Everything the page layout needs to render navigation for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationView {
  /// Request path with the deployment prefix removed.
  pub pathname: String,
  pub base_url: String,
  pub service:  Vec<ServiceItem>,
  /// `None` when no section claims the path; the page then has no sidebar.
  pub sidebar:  Option<ActiveSidebar>,
}

impl NavigationView {
  /// Resolve navigation for a browser pathname.
  #[must_use]
  pub fn build(
    raw_pathname: &str,
    navigation: &ResolvedNavigation,
    base_url: &str,
  ) -> Self {
    let pathname = strip_base_url(raw_pathname, base_url);
    let active = navigation.find_active(pathname);

    let service = navigation
      .sections
      .iter()
      .map(|section| {
        ServiceItem {
          text:   section.text.clone(),
          href:   with_base(section.base_path(), base_url),
          active: active.is_some_and(|a| std::ptr::eq(a, section)),
        }
      })
      .collect();

    let sidebar = active.and_then(|section| {
      section.sidebar.as_ref().map(|sidebar| {
        ActiveSidebar {
          section_href: section.base_path().to_string(),
          section_text: section.text.clone(),
          kind:         sidebar.kind,
          items:        section.resolved_items(),
        }
      })
    });

    Self {
      pathname: pathname.to_string(),
      base_url: base_url.to_string(),
      service,
      sidebar,
    }
  }

  /// Whether the sidebar links to anchors within the section page.
  #[must_use]
  pub fn is_anchor_sidebar(&self) -> bool {
    self
      .sidebar
      .as_ref()
      .is_some_and(|sidebar| sidebar.kind == SidebarKind::Auto)
  }

  /// A pre-hydration sidebar state machine for the active sidebar.
  #[must_use]
  pub fn sidebar_nav(&self) -> Option<SidebarNav> {
    self.sidebar.as_ref().map(|sidebar| {
      SidebarNav::new(sidebar.items.clone(), &self.pathname, &self.base_url)
    })
  }
}
