use serde::{Deserialize, Serialize};

/// Placeholder in [`SearchConfig::index_url`] replaced by
/// [`SearchConfig::dir`].
pub const DIR_PLACEHOLDER: &str = "{dir}";

/// Configuration for the search client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
  /// Whether search functionality is enabled
  pub enable: bool,

  /// Site-root relative URL of the search index.
  ///
  /// The indexer emits a template such as `search-index{dir}.json`; the
  /// `{dir}` token stands for the docs directory of a multi-docs site.
  pub index_url: String,

  /// Value substituted for `{dir}`. Empty for a single-docs site.
  pub dir: String,
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      enable:    true,
      index_url: format!("search-index{DIR_PLACEHOLDER}.json"),
      dir:       String::new(),
    }
  }
}

impl SearchConfig {
  /// The index URL with the `{dir}` token filled in.
  #[must_use]
  pub fn resolved_index_url(&self) -> String {
    self.index_url.replace(DIR_PLACEHOLDER, &self.dir)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_template_resolves_without_dir() {
    let config = SearchConfig::default();
    assert_eq!(config.resolved_index_url(), "search-index.json");
  }

  #[test]
  fn test_dir_is_substituted() {
    let config = SearchConfig {
      index_url: "{dir}/search-index-fa7ba571.json".to_string(),
      dir: "docs".to_string(),
      ..Default::default()
    };
    assert_eq!(config.resolved_index_url(), "docs/search-index-fa7ba571.json");
  }
}
