use std::{
  fs,
  path::{Path, PathBuf},
};

use log::debug;

use crate::{
  document::{SearchDocument, flatten_index},
  error::SearchError,
};

/// Source of search index documents.
pub trait IndexLoader {
  /// Fetch and flatten the index published at `url`.
  ///
  /// # Errors
  ///
  /// Returns an error if the index cannot be read or is not valid JSON.
  fn load(&self, url: &str) -> Result<Vec<SearchDocument>, SearchError>;
}

/// Loads an index from a built site directory, mapping root-relative URLs to
/// files under `root`.
#[derive(Debug, Clone)]
pub struct FileIndexLoader {
  root: PathBuf,
}

impl FileIndexLoader {
  #[must_use]
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  #[must_use]
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Path on disk for a root-relative index URL. Query strings and fragments
  /// are ignored.
  #[must_use]
  pub fn path_for(&self, url: &str) -> PathBuf {
    let path = url
      .split(['?', '#'])
      .next()
      .unwrap_or_default()
      .trim_start_matches('/');
    self.root.join(path)
  }
}

impl IndexLoader for FileIndexLoader {
  fn load(&self, url: &str) -> Result<Vec<SearchDocument>, SearchError> {
    let path = self.path_for(url);
    if !path.is_file() {
      return Err(SearchError::NotFound(path.display().to_string()));
    }

    debug!("Reading search index from {}", path.display());
    let content = fs::read_to_string(&path)?;
    flatten_index(&content)
  }
}
