//! # signpost-markdown
//!
//! Build-time helpers that turn markdown documentation sources into sidebar
//! navigation trees.
//!
//! ## Quick Start
//!
//! ```rust
//! use signpost_markdown::{extract_sidebar, slugify};
//!
//! let items = extract_sidebar("## Getting Started\n### Install\n", "/guide");
//!
//! assert_eq!(items[0].href, "/guide#getting-started");
//! assert_eq!(items[0].items[0].href, "/guide#install");
//! assert_eq!(slugify("`npm install`"), "npm-install");
//! ```
//!
//! ## Anchors
//!
//! Every anchor produced by this crate comes from [`slugify`]. The runtime
//! search client derives its deep links from the same function, so anchors
//! written at build time and links generated at query time always agree.

pub mod frontmatter;
pub mod sidebar;
mod types;
pub mod utils;

pub use crate::{
  frontmatter::strip_front_matter,
  sidebar::extract_sidebar,
  types::SidebarItem,
  utils::slugify,
};
