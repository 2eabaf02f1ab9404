#![allow(clippy::expect_used, clippy::unwrap_used, reason = "Fine in tests")]
use signpost_markdown::{SidebarItem, extract_sidebar, slugify};

#[test]
fn test_front_matter_is_skipped() {
  let md = "---\ntitle: X\n---\n## Intro";
  let items = extract_sidebar(md, "/guide");
  assert_eq!(items, vec![SidebarItem::new("Intro", "/guide#intro")]);
}

#[test]
fn test_horizontal_rules_are_not_front_matter() {
  let md = "## First\n\nSome text\n\n---\n\nmore content\n\n---\n\n## Second";
  let items = extract_sidebar(md, "/api");
  let texts: Vec<_> = items.iter().map(|i| i.text.as_str()).collect();
  assert_eq!(texts, ["First", "Second"]);
}

#[test]
fn test_unclosed_front_matter_keeps_body() {
  let md = "---\n## Still Here\n### Child";
  let items = extract_sidebar(md, "/x");
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].text, "Still Here");
  assert_eq!(items[0].items.len(), 1);
}

#[test]
fn test_two_level_nesting() {
  let items = extract_sidebar("## A\n### B\n## C", "/base");

  assert_eq!(items.len(), 2);
  assert_eq!(items[0].text, "A");
  assert_eq!(items[0].href, "/base#a");
  assert_eq!(items[0].items, vec![SidebarItem::new("B", "/base#b")]);
  assert_eq!(items[1].text, "C");
  assert!(items[1].items.is_empty());
}

#[test]
fn test_serialised_leaf_has_no_items_key() {
  let items = extract_sidebar("## A\n### B\n## C", "/base");
  let json = serde_json::to_value(&items).expect("serialise sidebar");

  assert!(json[0].get("items").is_some());
  assert!(json[1].get("items").is_none());
}

#[test]
fn test_orphan_level_three_is_ignored() {
  let items = extract_sidebar("### Orphan\n## Parent\n### Child", "/p");
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].text, "Parent");
  assert_eq!(items[0].items[0].text, "Child");
}

#[test]
fn test_display_text_keeps_markup() {
  let items = extract_sidebar("## Install with `npm install`", "/start");
  assert_eq!(items[0].text, "Install with `npm install`");
  assert_eq!(items[0].href, "/start#install-with-npm-install");
}

#[test]
fn test_duplicate_headings_are_kept() {
  let items = extract_sidebar("## Usage\n## Usage", "/d");
  assert_eq!(items.len(), 2);
  assert_eq!(items[0].href, items[1].href);
}

#[test]
fn test_other_heading_levels_are_ignored() {
  let md = "# Title\n## Section\n#### Deep\n##### Deeper\n### Sub";
  let items = extract_sidebar(md, "/t");
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].items.len(), 1);
  assert_eq!(items[0].items[0].text, "Sub");
}

#[test]
fn test_crlf_documents() {
  let md = "---\r\nid: x\r\n---\r\n## Windows\r\n### Line Endings\r\n";
  let items = extract_sidebar(md, "/win");
  assert_eq!(items[0].text, "Windows");
  assert_eq!(items[0].items[0].href, "/win#line-endings");
}

#[test]
fn test_hrefs_match_slugify() {
  let md = "## What's *new*?\n### `config.toml` reference";
  let items = extract_sidebar(md, "/changelog");
  assert_eq!(
    items[0].href,
    format!("/changelog#{}", slugify("What's *new*?"))
  );
  assert_eq!(items[0].items[0].href, "/changelog#configtoml-reference");
}
