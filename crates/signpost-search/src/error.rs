use std::io;

use thiserror::Error;

/// Error type for loading a search index
#[derive(Debug, Error)]
pub enum SearchError {
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Invalid search index: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Search index not found: {0}")]
  NotFound(String),
}
