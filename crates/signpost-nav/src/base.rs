//! Deployment prefix handling.
//!
//! Navigation is configured and matched in site-root paths (`/guide/setup`).
//! A site deployed under a prefix (`/handbook/`) sees prefixed paths from the
//! browser and must emit prefixed links, so the prefix is removed on the way
//! in and added back on the way out.

/// Trailing-slash-free form of a base URL; empty for the root.
fn base_prefix(base_url: &str) -> &str {
  base_url.trim_end_matches('/')
}

/// Remove the deployment prefix from a browser pathname.
///
/// A root base URL leaves the path untouched. A path that is exactly the
/// prefix becomes `/`. Paths outside the prefix are returned unchanged.
#[must_use]
pub fn strip_base_url<'a>(pathname: &'a str, base_url: &str) -> &'a str {
  let prefix = base_prefix(base_url);
  if prefix.is_empty() {
    return pathname;
  }

  match pathname.strip_prefix(prefix) {
    Some("") => "/",
    Some(rest) if rest.starts_with('/') => rest,
    _ => pathname,
  }
}

/// Prefix a site-root href with the deployment base URL.
///
/// Empty hrefs and external `http(s)` links pass through unchanged; an href
/// without a leading slash is treated as site-root relative.
#[must_use]
pub fn with_base(href: &str, base_url: &str) -> String {
  if href.is_empty() || href.starts_with("http") {
    return href.to_string();
  }

  let prefix = base_prefix(base_url);
  if href.starts_with('/') {
    format!("{prefix}{href}")
  } else {
    format!("{prefix}/{href}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_strip_root_base_is_noop() {
    assert_eq!(strip_base_url("/guide", "/"), "/guide");
    assert_eq!(strip_base_url("/guide", ""), "/guide");
  }

  #[test]
  fn test_strip_prefixed_path() {
    assert_eq!(strip_base_url("/handbook/guide", "/handbook/"), "/guide");
    assert_eq!(strip_base_url("/handbook/guide", "/handbook"), "/guide");
    assert_eq!(strip_base_url("/handbook", "/handbook/"), "/");
    assert_eq!(strip_base_url("/handbook/", "/handbook/"), "/");
  }

  #[test]
  fn test_strip_requires_segment_boundary() {
    assert_eq!(strip_base_url("/handbooks/x", "/handbook/"), "/handbooks/x");
    assert_eq!(strip_base_url("/other", "/handbook/"), "/other");
  }

  #[test]
  fn test_with_base() {
    assert_eq!(with_base("/guide", "/"), "/guide");
    assert_eq!(with_base("/guide#setup", "/handbook/"), "/handbook/guide#setup");
    assert_eq!(with_base("guide", "/handbook"), "/handbook/guide");
    assert_eq!(with_base("", "/handbook/"), "");
    assert_eq!(
      with_base("https://example.com/x", "/handbook/"),
      "https://example.com/x"
    );
  }
}
