//! The tagging pipeline.
//!
//! Orchestrates a full run over a document: collect eligible views, filter
//! each view's elements through the category rules, resolve geometry and
//! tag definitions per element, create placements through the policy, and
//! commit each view's batch atomically. Per-element problems are skips;
//! only a failed commit can abort anything, and what it aborts is governed
//! by [`BatchFailureMode`].
//!
//! The run is single-threaded and strictly sequential: views process in
//! document enumeration order, elements within a view likewise, and no
//! creation scopes for different views are ever open at the same time.

use log::{debug, info, warn};

use placard_core::model::{TagOrientation, View};

use crate::{
    catalog::TagCatalog,
    config::{AppConfig, BatchFailureMode, ReportMode},
    document::{Document, TagBatch},
    error::PlacardError,
    policy::{self, TagPath},
    rules,
};

/// Receiver for per-view progress reports.
///
/// Called once per successfully processed view with a human-readable count;
/// which count depends on [`ReportMode`]. The unit implementation discards
/// reports, for callers that only want the returned [`RunSummary`].
pub trait RunReporter {
    /// Reports the count for one processed view.
    fn view_processed(&mut self, view: &str, count: usize);
}

impl RunReporter for () {
    fn view_processed(&mut self, _view: &str, _count: usize) {}
}

/// Run-scoped tag counter.
///
/// Accumulates across all processed views; a view's tags are folded in only
/// once its batch has committed, so aborted batches never count.
#[derive(Debug, Default)]
struct RunCounter {
    total: usize,
}

impl RunCounter {
    fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, created: usize) {
        self.total += created;
    }

    fn total(&self) -> usize {
        self.total
    }
}

/// Outcome of one processed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOutcome {
    view: String,
    added: usize,
    total: usize,
}

impl ViewOutcome {
    /// Returns the view's name.
    pub fn view(&self) -> &str {
        &self.view
    }

    /// Returns the number of tags added in this view.
    pub fn added(&self) -> usize {
        self.added
    }

    /// Returns the cumulative run total after this view committed.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Summary of a completed tagging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    views: Vec<ViewOutcome>,
    total: usize,
}

impl RunSummary {
    /// Outcomes of the processed views, in processing order.
    ///
    /// Views skipped before processing (templates, unrecognized kinds) and
    /// views whose batch failed under [`BatchFailureMode::SkipView`] have
    /// no outcome here.
    pub fn views(&self) -> &[ViewOutcome] {
        &self.views
    }

    /// Total number of tags placed by the run.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// The run orchestrator. Borrows its configuration from the facade.
pub(crate) struct Pipeline<'a> {
    config: &'a AppConfig,
}

impl<'a> Pipeline<'a> {
    pub(crate) fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Runs the full tagging pass over a document.
    pub(crate) fn run<D: Document, R: RunReporter>(
        &self,
        document: &mut D,
        reporter: &mut R,
    ) -> Result<RunSummary, PlacardError> {
        let catalog = TagCatalog::build(document);
        debug!(resolved = catalog.len(); "Tag catalog built");

        let views: Vec<View> = document
            .views()
            .into_iter()
            .filter(|view| {
                if view.is_template() {
                    debug!(view = view.name().to_string(); "Skipping template view");
                    return false;
                }
                if rules::categories_for(view.kind()).is_none() {
                    debug!(view = view.name().to_string(), kind = view.kind().to_string(); "Skipping view without rules");
                    return false;
                }
                true
            })
            .collect();
        info!(views_count = views.len(); "Collected views to tag");

        let mut counter = RunCounter::new();
        let mut outcomes = Vec::new();

        for view in &views {
            let Some(categories) = rules::categories_for(view.kind()) else {
                continue;
            };

            let mut batch = TagBatch::new(view.name());
            for element in view
                .elements()
                .iter()
                .filter(|element| categories.contains(&element.category()))
            {
                let plan = policy::classify(element);

                let Some(anchor) = element.insertion_point() else {
                    debug!(element = element.id().to_string(); "Skipping element without a usable location");
                    continue;
                };
                let Some(definition) = catalog.lookup(plan.category()) else {
                    debug!(
                        element = element.id().to_string(),
                        category = plan.category().to_string();
                        "Skipping element without a tag definition"
                    );
                    continue;
                };

                match plan.path() {
                    TagPath::Region => {
                        let planar = anchor.to_uv();
                        let handle = batch.tag_region(definition, element, planar);
                        batch.set_head_position(handle, planar.to_point());
                    }
                    TagPath::Reference { leader } => {
                        let handle = batch.tag_reference(
                            definition,
                            element,
                            leader,
                            TagOrientation::Horizontal,
                            anchor,
                        );
                        let offset = policy::head_offset(plan.category(), view.kind());
                        if !offset.is_zero() {
                            batch.set_head_position(handle, anchor.add_point(offset));
                        }
                    }
                }
            }

            let added = batch.len();
            let name = view.name().to_string();

            if let Err(err) = document.commit(batch) {
                match self.config.failure().on_batch_error() {
                    BatchFailureMode::Abort => {
                        return Err(PlacardError::new_view_batch_error(name, err));
                    }
                    BatchFailureMode::SkipView => {
                        warn!(view = name.as_str(), err = err.to_string(); "View batch failed, skipping view");
                        continue;
                    }
                }
            }
            counter.add(added);

            let reported = match self.config.report().mode() {
                ReportMode::PerView => added,
                ReportMode::Cumulative => counter.total(),
            };
            reporter.view_processed(&name, reported);
            info!(view = name.as_str(), added, total = counter.total(); "View tagged");

            outcomes.push(ViewOutcome {
                view: name,
                added,
                total: counter.total(),
            });
        }

        Ok(RunSummary {
            views: outcomes,
            total: counter.total(),
        })
    }
}
