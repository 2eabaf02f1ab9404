use std::sync::OnceLock;

use regex::Regex;

/// Inline code span, captured without its backticks.
fn inline_code_regex() -> &'static Regex {
  static INLINE_CODE: OnceLock<Regex> = OnceLock::new();
  INLINE_CODE.get_or_init(|| {
    #[allow(
      clippy::unwrap_used,
      reason = "regex pattern is statically known to be valid"
    )]
    Regex::new(r"`([^`]*)`").unwrap()
  })
}

fn whitespace_regex() -> &'static Regex {
  static WHITESPACE: OnceLock<Regex> = OnceLock::new();
  WHITESPACE.get_or_init(|| {
    #[allow(
      clippy::unwrap_used,
      reason = "regex pattern is statically known to be valid"
    )]
    Regex::new(r"\s+").unwrap()
  })
}

/// Inline markdown syntax removed before anchoring.
const MARKUP_CHARS: [char; 7] = ['*', '_', '[', ']', '(', ')', '!'];

/// Derive the URL anchor for a heading.
///
/// The steps run in a fixed order so that no later step can reintroduce
/// something an earlier one removed:
///
/// 1. unwrap inline code spans, keeping their content
/// 2. drop `* _ [ ] ( ) !`
/// 3. lowercase
/// 4. trim
/// 5. turn whitespace runs into a single `-`
/// 6. drop anything that is not `[a-z0-9_-]`
/// 7. collapse repeated `-`
/// 8. drop one leading and one trailing `-`
///
/// Input that has nothing anchorable left (empty text, pure punctuation)
/// yields an empty string; callers treat that as "no fragment".
#[must_use]
pub fn slugify(text: &str) -> String {
  let unwrapped = inline_code_regex().replace_all(text, "$1");

  let stripped: String = unwrapped
    .chars()
    .filter(|c| !MARKUP_CHARS.contains(c))
    .collect();

  let lowered = stripped.to_lowercase();
  let hyphenated = whitespace_regex().replace_all(lowered.trim(), "-");

  let mut slug = String::with_capacity(hyphenated.len());
  for c in hyphenated.chars() {
    let keep = c.is_ascii_alphanumeric() || c == '_' || c == '-';
    if !keep || (c == '-' && slug.ends_with('-')) {
      continue;
    }
    slug.push(c);
  }

  let slug = slug.strip_prefix('-').unwrap_or(&slug);
  let slug = slug.strip_suffix('-').unwrap_or(slug);
  slug.to_string()
}
