use indexmap::IndexMap;

use crate::document::SearchDocument;

/// Page URL to title lookup derived from the page-root documents of an index.
///
/// Built once per loaded index. The site root is the page-root document with
/// the shortest URL, the first one winning ties.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
  titles:     IndexMap<String, String>,
  root_url:   String,
  root_title: Option<String>,
}

impl PageIndex {
  /// Build the lookup. `fallback_root` is used as the root URL when the index
  /// holds no page roots at all.
  #[must_use]
  pub fn build(documents: &[SearchDocument], fallback_root: &str) -> Self {
    let mut titles = IndexMap::new();
    for doc in documents.iter().filter(|d| d.breadcrumb.is_some()) {
      titles.insert(doc.url.clone(), doc.text.clone());
    }

    let root = titles
      .iter()
      .reduce(|best, candidate| {
        if candidate.0.len() < best.0.len() {
          candidate
        } else {
          best
        }
      })
      .map(|(url, title)| (url.clone(), title.clone()));

    let (root_url, root_title) = match root {
      Some((url, title)) => (url, Some(title)),
      None => (fallback_root.to_string(), None),
    };

    Self {
      titles,
      root_url,
      root_title,
    }
  }

  #[must_use]
  pub fn title(&self, url: &str) -> Option<&str> {
    self.titles.get(url).map(String::as_str)
  }

  #[must_use]
  pub fn root_url(&self) -> &str {
    &self.root_url
  }

  #[must_use]
  pub fn root_title(&self) -> Option<&str> {
    self.root_title.as_deref()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.titles.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.titles.is_empty()
  }

  /// Title of `url` or of `url` with a trailing slash.
  fn title_near(&self, url: &str) -> Option<&str> {
    self
      .title(url)
      .or_else(|| self.title(&format!("{url}/")))
  }

  /// Ancestor page titles of `page_url`, outermost first, followed by the
  /// page's own title.
  ///
  /// The root page title never appears, and neither does any title equal to
  /// `label`.
  #[must_use]
  pub fn context_trail(&self, page_url: &str, label: &str) -> Vec<String> {
    let current = self.title(page_url);
    let normalized_root =
      self.root_url.strip_suffix('/').unwrap_or(&self.root_url);

    let mut ancestors = Vec::new();
    let mut url = page_url.strip_suffix('/').unwrap_or(page_url);

    while let Some(idx) = url.rfind('/').filter(|&idx| idx > 0) {
      url = &url[..idx];
      if url == normalized_root || format!("{url}/") == self.root_url {
        break;
      }

      if let Some(title) = self.title_near(url)
        && Some(title) != current
        && title != label
      {
        ancestors.push(title.to_string());
      }
    }

    ancestors.reverse();

    if let Some(current) = current
      && current != label
      && Some(current) != self.root_title()
    {
      ancestors.push(current.to_string());
    }

    ancestors
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, clippy::unwrap_used, reason = "Fine in tests")]
  use super::*;

  fn page(url: &str, title: &str) -> SearchDocument {
    SearchDocument {
      text: title.to_string(),
      url: url.to_string(),
      breadcrumb: Some(Vec::new()),
      ..SearchDocument::default()
    }
  }

  fn site() -> PageIndex {
    PageIndex::build(
      &[
        page("/map/api/button", "Button definition"),
        page("/map/", "Interactive map"),
        page("/map/api", "API reference"),
        page("/map/guide/", "Guide"),
        page("/map/guide/setup", "Setup"),
      ],
      "/",
    )
  }

  #[test]
  fn test_root_is_shortest_page() {
    let pages = site();
    assert_eq!(pages.root_url(), "/map/");
    assert_eq!(pages.root_title(), Some("Interactive map"));
    assert_eq!(pages.len(), 5);
  }

  #[test]
  fn test_root_ties_keep_first() {
    let pages = PageIndex::build(&[page("/b", "B"), page("/a", "A")], "/");
    assert_eq!(pages.root_url(), "/b");
  }

  #[test]
  fn test_fallback_root_without_pages() {
    let pages = PageIndex::build(&[], "/docs/");
    assert!(pages.is_empty());
    assert_eq!(pages.root_url(), "/docs/");
    assert_eq!(pages.root_title(), None);
  }

  #[test]
  fn test_trail_stops_at_root() {
    let pages = site();
    assert_eq!(pages.context_trail("/map/api/button", "Click handler"), [
      "API reference",
      "Button definition"
    ]);
  }

  #[test]
  fn test_trail_matches_trailing_slash_ancestor() {
    let pages = site();
    assert_eq!(pages.context_trail("/map/guide/setup", "Install"), [
      "Guide", "Setup"
    ]);
  }

  #[test]
  fn test_trail_omits_label_and_root() {
    let pages = site();
    assert_eq!(
      pages.context_trail("/map/api/button", "Button definition"),
      ["API reference"]
    );
    assert!(pages.context_trail("/map/", "Anything").is_empty());
    assert!(pages.context_trail("/map/api", "API reference").is_empty());
  }

  #[test]
  fn test_trail_for_unknown_page() {
    let pages = site();
    assert_eq!(pages.context_trail("/map/api/missing", "Label"), [
      "API reference"
    ]);
  }
}
