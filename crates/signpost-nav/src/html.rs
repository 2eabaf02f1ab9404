use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{base::with_base, state::RenderedItem};

/// Block class of the sidebar markup.
pub const NAV_CLASS: &str = "app-sidebar-nav";

fn push_item(html: &mut String, item: &RenderedItem, base_url: &str) {
  let list_class = format!("{NAV_CLASS}__list");
  let active = if item.is_active() {
    format!(" {list_class}__item--active")
  } else {
    String::new()
  };

  html.push_str(&format!(
    "<li class=\"{list_class}__item{active}\"><a href=\"{}\" \
     class=\"{list_class}__link\">{}</a>",
    encode_double_quoted_attribute(&with_base(&item.href, base_url)),
    encode_text(&item.text)
  ));

  if item.is_expanded() && !item.children.is_empty() {
    html.push_str(&format!("<ul class=\"{list_class}__subitems\">"));
    for child in &item.children {
      push_item(html, child, base_url);
    }
    html.push_str("</ul>");
  }

  html.push_str("</li>");
}

/// Render a sidebar as a `<nav>` fragment.
///
/// Hrefs get the deployment prefix; collapsed groups leave out their
/// sub-list entirely.
#[must_use]
pub fn render_sidebar_html(items: &[RenderedItem], base_url: &str) -> String {
  let mut html =
    format!("<nav class=\"{NAV_CLASS}\"><ul class=\"{NAV_CLASS}__list\">");
  for item in items {
    push_item(&mut html, item, base_url);
  }
  html.push_str("</ul></nav>");
  html
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::state::ItemState;

  fn item(text: &str, href: &str, state: ItemState) -> RenderedItem {
    RenderedItem {
      text: text.to_string(),
      href: href.to_string(),
      state,
      children: Vec::new(),
    }
  }

  #[test]
  fn test_collapsed_group_omits_children() {
    let mut group = item("Methods", "/api#methods", ItemState::Collapsed);
    group.children =
      vec![item("add", "/api#add", ItemState::ExpandedInactive)];

    let html = render_sidebar_html(&[group], "/");
    assert!(html.contains("href=\"/api#methods\""));
    assert!(!html.contains("__subitems"));
    assert!(!html.contains("/api#add"));
  }

  #[test]
  fn test_active_item_and_base_prefix() {
    let mut group = item("Methods", "/api#methods", ItemState::ExpandedActive);
    group.children = vec![item("add", "/api#add", ItemState::ExpandedActive)];

    let html = render_sidebar_html(&[group], "/map/");
    assert!(html.contains("href=\"/map/api#add\""));
    assert!(html.contains("app-sidebar-nav__list__subitems"));
    assert_eq!(html.matches("__item--active").count(), 2);
  }

  #[test]
  fn test_text_is_escaped() {
    let html = render_sidebar_html(
      &[item("<T> & \"U\"", "/a?b=\"c\"", ItemState::ExpandedInactive)],
      "/",
    );
    assert!(html.contains("&lt;T&gt; &amp; \"U\""));
    assert!(html.contains("href=\"/a?b=&quot;c&quot;\""));
  }
}
