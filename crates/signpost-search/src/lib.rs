//! Search suggestions for Signpost sites.
//!
//! The index is produced by an external indexer as JSON buckets of flat
//! documents. [`SearchClient`] loads it once, answers every keystroke with a
//! ranked, per-page deduplicated list of [`SuggestionResult`]s and derives
//! deep links with the same anchor rule the sidebar uses.
pub mod client;
pub mod document;
pub mod error;
pub mod loader;
pub mod pages;
pub mod suggestion;

pub use crate::{
  client::{LoadTicket, MAX_RESULTS, MIN_QUERY_LEN, Navigator, SearchClient},
  document::{DocumentKind, SearchDocument, flatten_index},
  error::SearchError,
  loader::{FileIndexLoader, IndexLoader},
  pages::PageIndex,
  suggestion::{NO_RESULTS_TEXT, SuggestionResult},
};
