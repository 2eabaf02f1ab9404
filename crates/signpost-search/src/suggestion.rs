use html_escape::encode_double_quoted_attribute;
use serde::Serialize;

/// Text shown when a query yields no suggestions.
pub const NO_RESULTS_TEXT: &str = "No results found";

/// Separator between context trail entries.
pub const TRAIL_SEPARATOR: &str = " › ";

/// One ranked search suggestion. Built fresh for every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionResult {
  pub label:         String,
  pub context_trail: Option<Vec<String>>,
  pub target_url:    String,
}

impl SuggestionResult {
  /// The context trail joined for display.
  #[must_use]
  pub fn context(&self) -> Option<String> {
    self
      .context_trail
      .as_ref()
      .map(|trail| trail.join(TRAIL_SEPARATOR))
  }

  /// Value placed in the search input when this suggestion is chosen.
  #[must_use]
  pub fn input_value(&self) -> &str {
    &self.label
  }

  /// Suggestion markup for the autocomplete menu.
  #[must_use]
  pub fn render(&self) -> String {
    let title = format!(
      r#"<span class="app-search__title">{}</span>"#,
      encode_double_quoted_attribute(&self.label)
    );

    match self.context() {
      Some(context) => {
        format!(
          r#"{title}<span class="app-search__context">{}</span>"#,
          encode_double_quoted_attribute(&context)
        )
      },
      None => title,
    }
  }
}
