//! Error adapter for converting PlacardError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Tagging
//! errors carry no source-code spans, so the adapter contributes diagnostic
//! codes and help text only.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use placard::PlacardError;

/// Adapter wrapping a [`PlacardError`] for miette rendering.
pub struct Reportable<'a>(&'a PlacardError);

impl<'a> Reportable<'a> {
    /// Create a new adapter for the given error.
    pub fn new(err: &'a PlacardError) -> Self {
        Self(err)
    }
}

impl fmt::Debug for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PlacardError::Io(_) => "placard::io",
            PlacardError::Document(_) => "placard::document",
            PlacardError::ViewBatch { .. } => "placard::batch",
            PlacardError::Config(_) => "placard::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            PlacardError::ViewBatch { .. } => Some(Box::new(
                "no tags from the failed view were placed; \
                 set failure.on-batch-error = \"skip-view\" to continue past failing views",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
