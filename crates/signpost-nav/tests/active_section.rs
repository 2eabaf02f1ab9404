#![allow(clippy::expect_used, clippy::unwrap_used, reason = "Fine in tests")]
use signpost_markdown::SidebarItem;
use signpost_nav::{
  NavigationView,
  ResolvedNavigation,
  ResolvedSection,
  Sidebar,
  find_active_section,
  resolve_sidebar_paths,
};

fn section(href: &str, text: &str, sidebar: Sidebar) -> ResolvedSection {
  ResolvedSection {
    href:    href.to_string(),
    text:    text.to_string(),
    sidebar: Some(sidebar),
  }
}

fn site() -> ResolvedNavigation {
  ResolvedNavigation::new(vec![
    section("/", "Home", Sidebar::manual(vec![SidebarItem::new(
      "Welcome", "welcome",
    )])),
    section(
      "/docs",
      "Docs",
      Sidebar::manual(vec![
        SidebarItem::new("Page", "page"),
        SidebarItem::new("Elsewhere", "/reference/elsewhere"),
      ]),
    ),
    section(
      "/api",
      "API",
      Sidebar::auto(vec![
        SidebarItem::new("Methods", "/api#methods")
          .with_items(vec![SidebarItem::new("add", "/api#add")]),
      ]),
    ),
  ])
}

#[test]
fn test_relative_and_absolute_hrefs() {
  let relative = resolve_sidebar_paths(&[SidebarItem::new("Foo", "foo")], "/docs");
  assert_eq!(relative[0].href, "/docs/foo");

  let absolute = resolve_sidebar_paths(&[SidebarItem::new("Abs", "/abs")], "/docs");
  assert_eq!(absolute[0].href, "/abs");
}

#[test]
fn test_prefix_beats_root() {
  let nav = site();
  let active = find_active_section("/docs/page", &nav.sections).unwrap();
  assert_eq!(active.href, "/docs");
}

#[test]
fn test_root_only_matches_itself() {
  let nav = site();
  assert_eq!(nav.find_active("/").unwrap().href, "/");
  assert!(nav.find_active("/unknown").is_none());
}

#[test]
fn test_root_matches_its_own_sidebar_pages() {
  let nav = site();
  assert_eq!(nav.find_active("/welcome").unwrap().href, "/");
}

#[test]
fn test_auto_sidebar_matches_by_prefix() {
  let nav = site();
  assert_eq!(nav.find_active("/api").unwrap().href, "/api");
  assert_eq!(nav.find_active("/api/extra").unwrap().href, "/api");
  assert!(nav.find_active("/apis").is_none());
}

#[test]
fn test_manual_item_outside_prefix() {
  let nav = site();
  assert_eq!(nav.find_active("/reference/elsewhere").unwrap().href, "/docs");
}

#[test]
fn test_nested_manual_item_matches_exactly() {
  let nav = ResolvedNavigation::new(vec![section(
    "/guide",
    "Guide",
    Sidebar::manual(vec![
      SidebarItem::new("Usage", "/usage")
        .with_items(vec![SidebarItem::new("Flags", "flags")]),
    ]),
  )]);

  assert_eq!(nav.find_active("/usage/flags").unwrap().href, "/guide");
  assert!(nav.find_active("/usage/flag").is_none());
}

#[test]
fn test_first_configured_section_wins() {
  let nav = ResolvedNavigation::new(vec![
    section("/a", "A", Sidebar::manual(vec![SidebarItem::new("Shared", "/shared")])),
    section("/b", "B", Sidebar::manual(vec![SidebarItem::new("Shared", "/shared")])),
  ]);
  assert_eq!(nav.find_active("/shared").unwrap().text, "A");
}

#[test]
fn test_view_strips_base_and_builds_service_nav() {
  let nav = site();
  let view = NavigationView::build("/handbook/docs/page", &nav, "/handbook/");

  assert_eq!(view.pathname, "/docs/page");
  let service: Vec<_> = view
    .service
    .iter()
    .map(|item| (item.href.as_str(), item.active))
    .collect();
  assert_eq!(service, [
    ("/handbook/", false),
    ("/handbook/docs", true),
    ("/handbook/api", false),
  ]);

  let sidebar = view.sidebar.as_ref().unwrap();
  assert_eq!(sidebar.section_href, "/docs");
  assert_eq!(sidebar.items[0].href, "/docs/page");
  assert_eq!(sidebar.items[1].href, "/reference/elsewhere");
  assert!(!view.is_anchor_sidebar());
}

#[test]
fn test_view_without_active_section_has_no_sidebar() {
  let view = NavigationView::build("/nowhere", &site(), "/");
  assert!(view.sidebar.is_none());
  assert!(view.sidebar_nav().is_none());
  assert!(view.service.iter().all(|item| !item.active));
}

#[test]
fn test_view_marks_auto_sidebar() {
  let view = NavigationView::build("/api", &site(), "/");
  assert!(view.is_anchor_sidebar());

  let nav = view.sidebar_nav().unwrap();
  assert!(!nav.is_hydrated());
  assert_eq!(nav.pathname(), "/api");
}
