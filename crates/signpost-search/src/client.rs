use std::collections::HashSet;

use log::{debug, info, warn};
use signpost_markdown::slugify;

use crate::{
  document::SearchDocument,
  error::SearchError,
  loader::IndexLoader,
  pages::PageIndex,
  suggestion::SuggestionResult,
};

/// Queries shorter than this yield no suggestions.
pub const MIN_QUERY_LEN: usize = 2;

/// Upper bound on suggestions per query.
pub const MAX_RESULTS: usize = 8;

/// Client-side navigation target for a confirmed suggestion.
pub trait Navigator {
  fn navigate(&mut self, url: &str);
}

/// Identifies one index load started with [`SearchClient::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Search suggestion engine over one loaded index.
///
/// Starts empty and answers every query with no results until an index load
/// completes. A load that completes after [`SearchClient::unmount`], or after
/// a newer load was started, is discarded.
#[derive(Debug)]
pub struct SearchClient {
  fallback_root: String,
  documents:     Vec<SearchDocument>,
  pages:         PageIndex,
  pending:       Option<LoadTicket>,
  next_ticket:   u64,
  mounted:       bool,
}

impl SearchClient {
  /// Create an empty client. `fallback_root` is the site root URL used when
  /// the index has no page roots.
  #[must_use]
  pub fn new(fallback_root: impl Into<String>) -> Self {
    let fallback_root = fallback_root.into();
    Self {
      pages: PageIndex::build(&[], &fallback_root),
      fallback_root,
      documents: Vec::new(),
      pending: None,
      next_ticket: 0,
      mounted: true,
    }
  }

  /// Create a client over documents that are already loaded.
  #[must_use]
  pub fn with_documents(
    fallback_root: impl Into<String>,
    documents: Vec<SearchDocument>,
  ) -> Self {
    let mut client = Self::new(fallback_root);
    client.set_documents(documents);
    client
  }

  #[must_use]
  pub fn documents(&self) -> &[SearchDocument] {
    &self.documents
  }

  #[must_use]
  pub const fn pages(&self) -> &PageIndex {
    &self.pages
  }

  #[must_use]
  pub const fn is_mounted(&self) -> bool {
    self.mounted
  }

  #[must_use]
  pub const fn is_loading(&self) -> bool {
    self.pending.is_some()
  }

  /// Replace the document list and rebuild the page lookup.
  pub fn set_documents(&mut self, documents: Vec<SearchDocument>) {
    self.pages = PageIndex::build(&documents, &self.fallback_root);
    self.documents = documents;
    debug!(
      "Search index holds {} documents across {} pages",
      self.documents.len(),
      self.pages.len()
    );
  }

  /// Start a load. Any earlier pending load becomes stale.
  pub const fn begin_load(&mut self) -> LoadTicket {
    self.next_ticket += 1;
    let ticket = LoadTicket(self.next_ticket);
    self.pending = Some(ticket);
    ticket
  }

  /// Deliver the outcome of a load.
  ///
  /// Returns `true` if the documents were installed. Failures are logged and
  /// leave the client with whatever it held before.
  pub fn finish_load(
    &mut self,
    ticket: LoadTicket,
    result: Result<Vec<SearchDocument>, SearchError>,
  ) -> bool {
    if !self.mounted || self.pending != Some(ticket) {
      debug!("Discarding stale search index load");
      return false;
    }
    self.pending = None;

    match result {
      Ok(documents) => {
        self.set_documents(documents);
        true
      },
      Err(e) => {
        warn!("Could not load search index: {e}");
        false
      },
    }
  }

  /// Load the index at `url` through `loader` in one step.
  pub fn load_from(&mut self, loader: &impl IndexLoader, url: &str) -> bool {
    let ticket = self.begin_load();
    let result = loader.load(url);
    let loaded = self.finish_load(ticket, result);
    if loaded {
      info!("Loaded search index from {url}");
    }
    loaded
  }

  /// Stop accepting loads.
  pub const fn unmount(&mut self) {
    self.mounted = false;
    self.pending = None;
  }

  /// Ranked suggestions for `query`.
  ///
  /// Documents match when their label contains the query, ignoring case.
  /// Each page contributes at most one suggestion, from its first matching
  /// document.
  #[must_use]
  pub fn query(&self, query: &str) -> Vec<SuggestionResult> {
    if query.chars().count() < MIN_QUERY_LEN {
      return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for doc in &self.documents {
      let label = doc.label();
      if !label.to_lowercase().contains(&needle) {
        continue;
      }

      let page_url = doc.page_url();
      if !seen.insert(page_url) {
        continue;
      }

      let trail = self.pages.context_trail(page_url, label);
      let anchor = if doc.deep_links() {
        slugify(label)
      } else {
        String::new()
      };
      let target_url = if anchor.is_empty() {
        page_url.to_string()
      } else {
        format!("{page_url}#{anchor}")
      };

      results.push(SuggestionResult {
        label: label.to_string(),
        context_trail: (!trail.is_empty()).then_some(trail),
        target_url,
      });

      if results.len() == MAX_RESULTS {
        break;
      }
    }

    results
  }

  /// Navigate to a chosen suggestion. Nothing happens without a selection.
  pub fn confirm(
    &self,
    selected: Option<&SuggestionResult>,
    navigator: &mut impl Navigator,
  ) -> bool {
    match selected {
      Some(result) if !result.target_url.is_empty() => {
        navigator.navigate(&result.target_url);
        true
      },
      _ => false,
    }
  }
}
