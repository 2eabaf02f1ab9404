use std::fmt;

use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  Serializer,
  de::{self, SeqAccess, Visitor},
};
use signpost_markdown::SidebarItem;

/// The keyword that asks for a sidebar extracted from the section's page.
pub const AUTO_KEYWORD: &str = "auto";

/// How a section's sidebar is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarSpec {
  /// Extract `##`/`###` headings from the section's markdown source at build
  /// time. Written as `sidebar = "auto"`.
  Auto,

  /// Hand-written items. Hrefs may be relative to the section's base path.
  Manual(Vec<SidebarItem>),
}

impl SidebarSpec {
  #[must_use]
  pub const fn is_auto(&self) -> bool {
    matches!(self, Self::Auto)
  }
}

impl Serialize for SidebarSpec {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Self::Auto => serializer.serialize_str(AUTO_KEYWORD),
      Self::Manual(items) => items.serialize(serializer),
    }
  }
}

impl<'de> Deserialize<'de> for SidebarSpec {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct SidebarSpecVisitor;

    impl<'de> Visitor<'de> for SidebarSpecVisitor {
      type Value = SidebarSpec;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
          formatter,
          "the string \"{AUTO_KEYWORD}\" or a list of sidebar items"
        )
      }

      fn visit_str<E>(self, value: &str) -> Result<SidebarSpec, E>
      where
        E: de::Error,
      {
        if value == AUTO_KEYWORD {
          Ok(SidebarSpec::Auto)
        } else {
          Err(de::Error::invalid_value(de::Unexpected::Str(value), &self))
        }
      }

      fn visit_seq<A>(self, mut seq: A) -> Result<SidebarSpec, A::Error>
      where
        A: SeqAccess<'de>,
      {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<SidebarItem>()? {
          items.push(item);
        }
        Ok(SidebarSpec::Manual(items))
      }
    }

    deserializer.deserialize_any(SidebarSpecVisitor)
  }
}

/// One entry of the site's top-level navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationSection {
  /// Base path of the section, from the site root (e.g. `/guide`).
  #[serde(default = "default_section_href")]
  pub href: String,

  /// Label shown in the service navigation.
  pub text: String,

  /// Sidebar shown while the section is active. A section without one only
  /// appears in the service navigation.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sidebar: Option<SidebarSpec>,
}

fn default_section_href() -> String {
  "/".to_string()
}

impl NavigationSection {
  /// The section href, treating an empty one as the site root.
  #[must_use]
  pub fn base_path(&self) -> &str {
    if self.href.is_empty() { "/" } else { &self.href }
  }

  /// Markdown file stem for an auto sidebar: the href without its leading
  /// slash, or `index` for the root section.
  #[must_use]
  pub fn source_stem(&self) -> &str {
    let stem = self.base_path().trim_start_matches('/');
    if stem.is_empty() { "index" } else { stem }
  }
}
