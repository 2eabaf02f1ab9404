use log::debug;

use crate::{SidebarItem, frontmatter::strip_front_matter, utils::slugify};

/// Heading text and its level, if the line opens a level-2 or level-3
/// heading with non-blank text.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
  let (level, rest) = if let Some(rest) = line.strip_prefix("### ") {
    (3, rest)
  } else if let Some(rest) = line.strip_prefix("## ") {
    (2, rest)
  } else {
    return None;
  };

  let text = rest.trim();
  if text.is_empty() {
    return None;
  }
  Some((level, text))
}

/// `base_path#anchor`, or just `base_path` when the text has no anchor.
fn anchored_href(base_path: &str, text: &str) -> String {
  let anchor = slugify(text);
  if anchor.is_empty() {
    base_path.to_string()
  } else {
    format!("{base_path}#{anchor}")
  }
}

/// Build a two-level sidebar from the `##` and `###` headings of a markdown
/// document.
///
/// Every `##` heading starts a top-level item; every `###` heading becomes a
/// child of the closest preceding `##` and is dropped when there is none.
/// Hrefs are `base_path#anchor`, without the fragment when the heading text
/// has nothing anchorable. The display text keeps its markdown
/// punctuation, only the anchor goes through [`slugify`]. Duplicate headings
/// are kept as-is, in document order.
#[must_use]
pub fn extract_sidebar(source: &str, base_path: &str) -> Vec<SidebarItem> {
  let body = strip_front_matter(source);
  let mut items: Vec<SidebarItem> = Vec::new();

  for line in body.lines() {
    let Some((level, text)) = parse_heading(line) else {
      continue;
    };

    let item = SidebarItem::new(text, anchored_href(base_path, text));
    if level == 2 {
      items.push(item);
    } else if let Some(parent) = items.last_mut() {
      parent.items.push(item);
    } else {
      debug!("Skipping level-3 heading '{text}' with no preceding level-2");
    }
  }

  items
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_heading_levels() {
    assert_eq!(parse_heading("## Intro"), Some((2, "Intro")));
    assert_eq!(parse_heading("### Detail  "), Some((3, "Detail")));
    assert_eq!(parse_heading("# Title"), None);
    assert_eq!(parse_heading("#### Deep"), None);
    assert_eq!(parse_heading("##    "), None);
    assert_eq!(parse_heading(" ## Indented"), None);
  }

  #[test]
  fn test_anchored_href_with_empty_slug() {
    assert_eq!(anchored_href("/docs", "???"), "/docs");
    assert_eq!(anchored_href("/docs", "Setup"), "/docs#setup");
  }
}
