//! Error types for tagging operations.
//!
//! This module provides the main error type [`PlacardError`] which wraps
//! the error conditions that can occur while loading a document,
//! configuring a run, or committing a view's tags.

use std::io;

use thiserror::Error;

use crate::document::DocumentError;

/// The main error type for tagging operations.
///
/// Per-element problems (missing locations, unresolved tag definitions) are
/// never errors - the pipeline skips those silently. What surfaces here is
/// the fatal remainder: I/O, unparseable documents or configuration, and
/// failed atomic commits.
#[derive(Debug, Error)]
pub enum PlacardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Tagging view '{view}' failed: {source}")]
    ViewBatch {
        view: String,
        #[source]
        source: DocumentError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlacardError {
    /// Create a new `ViewBatch` error for the named view.
    pub fn new_view_batch_error(view: impl Into<String>, source: DocumentError) -> Self {
        Self::ViewBatch {
            view: view.into(),
            source,
        }
    }
}
