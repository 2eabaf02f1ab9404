//! Types shared by the extractor and the navigation layer.
use serde::{Deserialize, Serialize};

/// One link in a sidebar tree.
///
/// Sidebars are two levels deep: a top-level item (a level-2 heading or a
/// manually configured page) may own child items, children never do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidebarItem {
  /// Display text, kept exactly as written in the source.
  pub text: String,

  /// Link target. Relative until the navigation layer resolves it.
  pub href: String,

  /// Nested items, in document order.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub items: Vec<Self>,
}

impl SidebarItem {
  /// Create a leaf item.
  #[must_use]
  pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
    Self {
      text:  text.into(),
      href:  href.into(),
      items: Vec::new(),
    }
  }

  /// Builder-style helper for attaching children.
  #[must_use]
  pub fn with_items(mut self, items: Vec<Self>) -> Self {
    self.items = items;
    self
  }
}
