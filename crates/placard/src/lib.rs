//! Placard - rule-driven annotation tagging for design documents.
//!
//! Placard walks the views of a design document and places annotation tags
//! on eligible elements: which categories are tagged depends on the view's
//! kind, which tag definition is used depends on the element's (possibly
//! remapped) category, and where the tag lands is derived from the
//! element's location geometry plus category-specific head offsets. Each
//! view's tags are committed as one atomic batch.

pub mod catalog;
pub mod config;
pub mod document;
pub mod policy;
pub mod rules;

mod error;
mod pipeline;

pub use placard_core::{geometry, identifier, model};

pub use error::PlacardError;
pub use pipeline::{RunReporter, RunSummary, ViewOutcome};

use log::info;

use config::AppConfig;
use document::Document;

/// Facade for running tagging passes over documents.
///
/// A `Tagger` owns its configuration and is reusable: each call to
/// [`run`](Tagger::run) is an independent pass that borrows the document
/// for its duration and caches nothing beyond it.
///
/// # Examples
///
/// ```
/// use placard::{Tagger, config::AppConfig, document::InMemoryDocument};
/// use placard::geometry::Point;
/// use placard::identifier::Id;
/// use placard::model::{Category, Element, Location, View, ViewKind};
///
/// let mut document = InMemoryDocument::new()
///     .with_tag_family("M_Room Tag")
///     .with_view(
///         View::new(Id::new("Level 1"), ViewKind::FloorPlan).with_element(
///             Element::new(Id::new("room-101"), Category::Rooms)
///                 .with_location(Location::Point(Point::new(0.0, 0.0, 0.0))),
///         ),
///     );
///
/// // With custom config
/// let config = AppConfig::default();
/// let tagger = Tagger::new(config);
///
/// let summary = tagger.run(&mut document, &mut ()).expect("Failed to tag");
/// assert_eq!(summary.total(), 1);
///
/// // Or use default config
/// let tagger = Tagger::default();
/// ```
#[derive(Default)]
pub struct Tagger {
    config: AppConfig,
}

impl Tagger {
    /// Create a new tagger with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Run configuration covering reporting and failure handling
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the tagger's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run a full tagging pass over a document.
    ///
    /// Eligible views are processed in enumeration order; each view's tags
    /// are committed atomically and reported through `reporter`. Pass
    /// `&mut ()` as the reporter to rely on the returned [`RunSummary`]
    /// alone.
    ///
    /// # Arguments
    ///
    /// * `document` - The document to tag, borrowed for the duration of the run
    /// * `reporter` - Receiver for per-view progress reports
    ///
    /// # Errors
    ///
    /// Returns `PlacardError` when a view's batch fails to commit and the
    /// configured failure mode is abort.
    pub fn run<D: Document, R: RunReporter>(
        &self,
        document: &mut D,
        reporter: &mut R,
    ) -> Result<RunSummary, PlacardError> {
        info!("Starting tagging run");

        let summary = pipeline::Pipeline::new(&self.config).run(document, reporter)?;

        info!(
            views = summary.views().len(),
            total = summary.total();
            "Tagging run complete"
        );
        Ok(summary)
    }
}
