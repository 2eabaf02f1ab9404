use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SearchError;

/// What a search document stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
  /// A whole page. Carries a breadcrumb.
  PageRoot,
  /// A heading inside a page. Carries an anchor hash and a parent page.
  Heading,
  /// Body text under a section label, optionally with an anchor hash.
  Paragraph,
}

/// One entry of the external search index.
///
/// Field names follow the indexer's compact schema:
///
/// | kind        | fields                |
/// |-------------|-----------------------|
/// | page root   | `b, i, t, u`          |
/// | heading     | `h, i, p, t, u`       |
/// | paragraph   | `i, p, s, t, u`       |
/// | para+anchor | `h, i, p, s, t, u`    |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
  #[serde(rename = "i", default, skip_serializing_if = "Option::is_none")]
  pub id: Option<u64>,

  /// Page title, heading text or body text depending on the kind.
  #[serde(rename = "t", default)]
  pub text: String,

  /// Page URL.
  #[serde(rename = "u", default)]
  pub url: String,

  #[serde(rename = "b", default, skip_serializing_if = "Option::is_none")]
  pub breadcrumb: Option<Vec<String>>,

  /// Anchor hash as written by the indexer. Its presence, even when empty,
  /// marks a document that deep-links into its page.
  #[serde(rename = "h", default, skip_serializing_if = "Option::is_none")]
  pub hash: Option<String>,

  #[serde(rename = "p", default, skip_serializing_if = "Option::is_none")]
  pub parent: Option<u64>,

  /// Section heading or page title a paragraph belongs to.
  #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
  pub section: Option<String>,
}

impl SearchDocument {
  #[must_use]
  pub const fn kind(&self) -> DocumentKind {
    if self.breadcrumb.is_some() {
      DocumentKind::PageRoot
    } else if self.hash.is_some() && self.section.is_none() {
      DocumentKind::Heading
    } else {
      DocumentKind::Paragraph
    }
  }

  /// Text matched against queries: the section label when there is one,
  /// otherwise the document text.
  #[must_use]
  pub fn label(&self) -> &str {
    self.section.as_deref().unwrap_or(&self.text)
  }

  /// The document URL without any fragment.
  #[must_use]
  pub fn page_url(&self) -> &str {
    self.url.split_once('#').map_or(self.url.as_str(), |(page, _)| page)
  }

  /// Whether a suggestion for this document should link to an anchor.
  ///
  /// Page roots link to the page itself. Headings always carry a hash;
  /// paragraphs only deep-link when the indexer gave them one.
  #[must_use]
  pub const fn deep_links(&self) -> bool {
    match self.kind() {
      DocumentKind::PageRoot => false,
      DocumentKind::Heading => true,
      DocumentKind::Paragraph => self.hash.is_some(),
    }
  }
}

/// Collect the documents of every bucket in a search index.
///
/// The index is an object (or array) of buckets, each with a `documents`
/// array. Buckets without documents and documents that do not fit the schema
/// are skipped. Bucket and document order is preserved.
///
/// # Errors
///
/// Returns an error if `json` is not valid JSON.
pub fn flatten_index(json: &str) -> Result<Vec<SearchDocument>, SearchError> {
  let value: Value = serde_json::from_str(json)?;

  let buckets: Vec<&Value> = match &value {
    Value::Object(map) => map.values().collect(),
    Value::Array(items) => items.iter().collect(),
    _ => Vec::new(),
  };

  let mut documents = Vec::new();
  for bucket in buckets {
    let Some(entries) = bucket.get("documents").and_then(Value::as_array)
    else {
      continue;
    };

    for entry in entries {
      match SearchDocument::deserialize(entry) {
        Ok(doc) => documents.push(doc),
        Err(e) => debug!("Skipping malformed search document: {e}"),
      }
    }
  }

  Ok(documents)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, clippy::unwrap_used, reason = "Fine in tests")]
  use serde_json::json;

  use super::*;

  fn doc(value: Value) -> SearchDocument {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn test_kinds() {
    let page = doc(json!({ "i": 1, "t": "API", "u": "/api", "b": [] }));
    let heading =
      doc(json!({ "i": 2, "t": "Methods", "u": "/api", "h": "#methods", "p": 1 }));
    let paragraph =
      doc(json!({ "i": 3, "t": "Body", "u": "/api", "s": "Methods", "p": 1 }));
    let anchored = doc(
      json!({ "i": 4, "t": "Body", "u": "/api", "s": "Methods", "h": "", "p": 1 }),
    );

    assert_eq!(page.kind(), DocumentKind::PageRoot);
    assert_eq!(heading.kind(), DocumentKind::Heading);
    assert_eq!(paragraph.kind(), DocumentKind::Paragraph);
    assert_eq!(anchored.kind(), DocumentKind::Paragraph);

    assert!(!page.deep_links());
    assert!(heading.deep_links());
    assert!(!paragraph.deep_links());
    assert!(anchored.deep_links());
  }

  #[test]
  fn test_deep_links_follow_kind() {
    // A breadcrumb wins over a stray hash: page roots never deep-link
    let page_with_hash =
      doc(json!({ "t": "API", "u": "/api", "b": [], "h": "#api" }));
    assert_eq!(page_with_hash.kind(), DocumentKind::PageRoot);
    assert!(!page_with_hash.deep_links());

    let empty_hash_heading = doc(json!({ "t": "?!", "u": "/api", "h": "" }));
    assert_eq!(empty_hash_heading.kind(), DocumentKind::Heading);
    assert!(empty_hash_heading.deep_links());
  }

  #[test]
  fn test_label_prefers_section() {
    let paragraph = doc(json!({ "t": "Long body text", "u": "/a", "s": "Setup" }));
    assert_eq!(paragraph.label(), "Setup");

    let heading = doc(json!({ "t": "Setup", "u": "/a", "h": "#setup" }));
    assert_eq!(heading.label(), "Setup");
  }

  #[test]
  fn test_page_url_drops_fragment() {
    let d = doc(json!({ "t": "x", "u": "/a/b#c" }));
    assert_eq!(d.page_url(), "/a/b");
  }

  #[test]
  fn test_flatten_keeps_bucket_order_and_skips_junk() {
    let json = r#"{
      "b": { "documents": [ { "i": 1, "t": "First", "u": "/1" } ] },
      "a": { "documents": [ { "i": "bad", "t": 5 }, { "i": 2, "t": "Second", "u": "/2" } ] },
      "c": { "other": true },
      "d": null
    }"#;

    let docs = flatten_index(json).unwrap();
    let texts: Vec<_> = docs.iter().map(|d| d.text.as_str()).collect();
    assert_eq!(texts, ["First", "Second"]);
  }

  #[test]
  fn test_flatten_array_index() {
    let json = r#"[ { "documents": [ { "t": "Only", "u": "/" } ] } ]"#;
    assert_eq!(flatten_index(json).unwrap().len(), 1);
  }

  #[test]
  fn test_flatten_invalid_json() {
    assert!(flatten_index("{ not json").is_err());
    assert!(flatten_index("42").unwrap().is_empty());
  }
}
