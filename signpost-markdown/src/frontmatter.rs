//! Front matter detection.
//!
//! Only a block that opens at byte zero counts as front matter. Plenty of
//! documents use `---` as a horizontal rule further down, and a greedy match
//! would swallow everything between two rules.

/// Return the document body with a leading `---` front matter block removed.
///
/// The opening delimiter must be the very first line (`---` followed by `\n`
/// or `\r\n`). The block ends at the next line that starts with `---`; that
/// line and a single newline after it are dropped too. Without a closing
/// delimiter the whole input is returned untouched.
#[must_use]
pub fn strip_front_matter(content: &str) -> &str {
  if !(content.starts_with("---\n") || content.starts_with("---\r\n")) {
    return content;
  }

  // Search from the end of the opening `---` so its own newline can start the
  // closing match, which keeps an empty `---\n---` block valid.
  let Some(close) = content[3..].find("\n---").map(|idx| idx + 3) else {
    log::debug!("Opening front matter delimiter has no closing line");
    return content;
  };

  let rest = &content[close + 4..];
  rest
    .strip_prefix("\r\n")
    .or_else(|| rest.strip_prefix('\n'))
    .unwrap_or(rest)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_strips_leading_block() {
    let doc = "---\ntitle: X\n---\n## Intro";
    assert_eq!(strip_front_matter(doc), "## Intro");
  }

  #[test]
  fn test_strips_crlf_block() {
    let doc = "---\r\ntitle: X\r\n---\r\n## Intro";
    assert_eq!(strip_front_matter(doc), "## Intro");
  }

  #[test]
  fn test_empty_block() {
    assert_eq!(strip_front_matter("---\n---\n## A"), "## A");
  }

  #[test]
  fn test_unclosed_block_keeps_everything() {
    let doc = "---\ntitle: X\n## Intro";
    assert_eq!(strip_front_matter(doc), doc);
  }

  #[test]
  fn test_rule_not_at_offset_zero_is_body() {
    let doc = "# Title\n---\nmore content\n---\n## Intro";
    assert_eq!(strip_front_matter(doc), doc);
  }

  #[test]
  fn test_leading_dashes_without_newline_is_body() {
    let doc = "----\n## Intro";
    assert_eq!(strip_front_matter(doc), doc);
  }
}
