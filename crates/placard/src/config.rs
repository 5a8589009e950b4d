//! Configuration types for tagging runs.
//!
//! This module provides the configuration structures that control run
//! behavior where the observed system left a choice open. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining report and failure settings.
//! - [`ReportConfig`] / [`ReportMode`] - Which count the per-view report carries.
//! - [`FailureConfig`] / [`BatchFailureMode`] - What a failed view commit does to the run.
//!
//! # Example
//!
//! ```
//! # use placard::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Deserialize;

/// Top-level configuration for a tagging run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Reporting configuration section.
    #[serde(default)]
    report: ReportConfig,

    /// Failure-handling configuration section.
    #[serde(default)]
    failure: FailureConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(report: ReportConfig, failure: FailureConfig) -> Self {
        Self { report, failure }
    }

    /// Returns the reporting configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    /// Returns the failure-handling configuration.
    pub fn failure(&self) -> &FailureConfig {
        &self.failure
    }
}

/// Reporting configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Which count the per-view report carries.
    #[serde(default)]
    mode: ReportMode,
}

impl ReportConfig {
    /// Creates a new [`ReportConfig`] with the specified mode.
    pub fn new(mode: ReportMode) -> Self {
        Self { mode }
    }

    /// Returns the configured [`ReportMode`].
    pub fn mode(&self) -> ReportMode {
        self.mode
    }
}

/// Which count a processed view reports.
///
/// Per-view counts are the default; `cumulative` keeps reporting the
/// running total after every view instead, for callers that depend on the
/// legacy report lines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportMode {
    /// Report the number of tags added in the view just processed (default)
    #[default]
    PerView,
    /// Report the cumulative run total after each view (legacy behavior)
    Cumulative,
}

impl FromStr for ReportMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-view" => Ok(Self::PerView),
            "cumulative" => Ok(Self::Cumulative),
            _ => Err("Unsupported report mode"),
        }
    }
}

impl From<ReportMode> for &'static str {
    fn from(val: ReportMode) -> Self {
        match val {
            ReportMode::PerView => "per-view",
            ReportMode::Cumulative => "cumulative",
        }
    }
}

impl Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Failure-handling configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FailureConfig {
    /// What a failed view commit does to the run.
    #[serde(default)]
    on_batch_error: BatchFailureMode,
}

impl FailureConfig {
    /// Creates a new [`FailureConfig`] with the specified mode.
    pub fn new(on_batch_error: BatchFailureMode) -> Self {
        Self { on_batch_error }
    }

    /// Returns the configured [`BatchFailureMode`].
    pub fn on_batch_error(&self) -> BatchFailureMode {
        self.on_batch_error
    }
}

/// What a failed view commit does to the rest of the run.
///
/// Either way the failed view's batch is discarded in full; the modes only
/// differ in whether the remaining views are still processed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchFailureMode {
    /// Abort the whole run, propagating the failure (default)
    #[default]
    Abort,
    /// Log the failure and continue with the remaining views
    SkipView,
}

impl FromStr for BatchFailureMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(Self::Abort),
            "skip-view" => Ok(Self::SkipView),
            _ => Err("Unsupported batch failure mode"),
        }
    }
}

impl From<BatchFailureMode> for &'static str {
    fn from(val: BatchFailureMode) -> Self {
        match val {
            BatchFailureMode::Abort => "abort",
            BatchFailureMode::SkipView => "skip-view",
        }
    }
}

impl Display for BatchFailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
