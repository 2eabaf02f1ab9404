//! Client-side sidebar state.
//!
//! [`SidebarNav`] decides, for every sidebar item, whether it is collapsed,
//! expanded or expanded and active. Before the component has seen the real
//! browser location it renders every group expanded, so a page served
//! without script still exposes its whole sidebar.
use log::debug;
use serde::Serialize;
use signpost_markdown::SidebarItem;

use crate::{base::strip_base_url, resolve::path_in_section};

/// Read access to the hosting environment's current location.
pub trait LocationProvider {
  /// Current pathname, including any deployment prefix.
  fn pathname(&self) -> String;

  /// Current fragment, with or without its leading `#`. Empty when there is
  /// none.
  fn hash(&self) -> String;
}

/// Notifications delivered by the host after the location has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationEvent {
  HashChange,
  PathChange,
}

/// Rendering state of one sidebar item.
///
/// Leaves have nothing to collapse and are always one of the expanded states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemState {
  Collapsed,
  ExpandedInactive,
  ExpandedActive,
}

impl ItemState {
  const fn from_flags(expanded: bool, active: bool) -> Self {
    match (expanded, active) {
      (false, _) => Self::Collapsed,
      (true, false) => Self::ExpandedInactive,
      (true, true) => Self::ExpandedActive,
    }
  }
}

/// A sidebar item together with its rendering state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedItem {
  pub text:  String,
  pub href:  String,
  pub state: ItemState,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub children: Vec<Self>,
}

impl RenderedItem {
  #[must_use]
  pub fn is_active(&self) -> bool {
    self.state == ItemState::ExpandedActive
  }

  #[must_use]
  pub fn is_expanded(&self) -> bool {
    self.state != ItemState::Collapsed
  }
}

/// Whether a sidebar link points at the current location.
///
/// Links with a fragment need both the path and the fragment to match, so they
/// are never active before the fragment is known. Page links match their own
/// path and any sub-path. Hrefs that are not root-relative never match.
#[must_use]
pub fn is_item_active(href: &str, pathname: &str, hash: Option<&str>) -> bool {
  if !href.starts_with('/') {
    return false;
  }

  let (path, fragment) = href.split_once('#').unwrap_or((href, ""));
  if fragment.is_empty() {
    path_in_section(pathname, path)
  } else {
    path == pathname && hash == Some(fragment)
  }
}

fn normalize_hash(raw: &str) -> String {
  raw.strip_prefix('#').unwrap_or(raw).to_string()
}

/// Sidebar state machine for one mounted sidebar.
///
/// `hash` carries the whole state: `None` until the real location has been
/// read, then the current fragment (empty when there is none).
#[derive(Debug, Clone)]
pub struct SidebarNav {
  items:      Vec<SidebarItem>,
  base_url:   String,
  pathname:   String,
  hash:       Option<String>,
  subscribed: bool,
}

impl SidebarNav {
  /// Create the pre-hydration state.
  ///
  /// `items` must already be resolved to site-root hrefs and `pathname` is the
  /// site-root path the page was rendered for.
  #[must_use]
  pub fn new(
    items: Vec<SidebarItem>,
    pathname: impl Into<String>,
    base_url: impl Into<String>,
  ) -> Self {
    Self {
      items,
      base_url: base_url.into(),
      pathname: pathname.into(),
      hash: None,
      subscribed: false,
    }
  }

  #[must_use]
  pub fn items(&self) -> &[SidebarItem] {
    &self.items
  }

  #[must_use]
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  #[must_use]
  pub fn pathname(&self) -> &str {
    &self.pathname
  }

  #[must_use]
  pub fn hash(&self) -> Option<&str> {
    self.hash.as_deref()
  }

  #[must_use]
  pub const fn is_hydrated(&self) -> bool {
    self.hash.is_some()
  }

  #[must_use]
  pub const fn is_subscribed(&self) -> bool {
    self.subscribed
  }

  fn read_location(&mut self, location: &impl LocationProvider) -> bool {
    let raw_pathname = location.pathname();
    let pathname = strip_base_url(&raw_pathname, &self.base_url).to_string();
    let hash = Some(normalize_hash(&location.hash()));

    let changed = pathname != self.pathname || hash != self.hash;
    self.pathname = pathname;
    self.hash = hash;
    changed
  }

  /// First client activation: read the location once and start listening.
  ///
  /// Returns whether the rendered output changes. Calling it again on an
  /// already hydrated sidebar does nothing.
  pub fn hydrate(&mut self, location: &impl LocationProvider) -> bool {
    if self.is_hydrated() {
      return false;
    }

    self.subscribed = true;
    let changed = self.read_location(location);
    debug!(
      "Sidebar hydrated at {} with hash {:?}",
      self.pathname, self.hash
    );
    changed
  }

  /// Handle a location notification.
  ///
  /// Both kinds re-read path and fragment together, so the state always
  /// reflects one consistent location. Events after [`Self::unmount`] or
  /// before [`Self::hydrate`] are ignored. Returns whether a re-render is
  /// needed.
  pub fn handle(
    &mut self,
    event: LocationEvent,
    location: &impl LocationProvider,
  ) -> bool {
    if !self.subscribed {
      debug!("Ignoring {event:?} on an unsubscribed sidebar");
      return false;
    }

    let changed = self.read_location(location);
    debug!("{event:?}: now at {} #{:?}", self.pathname, self.hash);
    changed
  }

  /// Stop listening for location changes.
  pub fn unmount(&mut self) {
    self.subscribed = false;
  }

  fn render_item(&self, item: &SidebarItem) -> RenderedItem {
    let hash = self.hash.as_deref();
    let active = is_item_active(&item.href, &self.pathname, hash);

    let children: Vec<RenderedItem> = item
      .items
      .iter()
      .map(|child| {
        let child_active = is_item_active(&child.href, &self.pathname, hash);
        RenderedItem {
          text:     child.text.clone(),
          href:     child.href.clone(),
          state:    ItemState::from_flags(true, child_active),
          children: Vec::new(),
        }
      })
      .collect();

    let group_active = active || children.iter().any(RenderedItem::is_active);
    let expanded = children.is_empty() || hash.is_none() || group_active;

    RenderedItem {
      text: item.text.clone(),
      href: item.href.clone(),
      state: ItemState::from_flags(expanded, group_active),
      children,
    }
  }

  /// Rendering state for every item, in sidebar order.
  #[must_use]
  pub fn render(&self) -> Vec<RenderedItem> {
    self.items.iter().map(|item| self.render_item(item)).collect()
  }
}
