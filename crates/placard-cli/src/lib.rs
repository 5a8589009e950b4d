//! CLI logic for the Placard tagging tool.
//!
//! This module contains the core CLI logic for the Placard tagging tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use placard::{PlacardError, RunReporter, RunSummary, Tagger, document::InMemoryDocument};

/// Reporter printing one line per processed view to standard output.
pub struct ConsoleReporter;

impl RunReporter for ConsoleReporter {
    fn view_processed(&mut self, view: &str, count: usize) {
        println!("Added {count} tags to view '{view}'");
    }
}

/// Run the Placard CLI application
///
/// This function loads the input model file, runs the tagging pass over it,
/// and writes the tagged model to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PlacardError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Model file parsing errors
/// - Failed view commits
pub fn run(args: &Args) -> Result<RunSummary, PlacardError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Tagging model"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Load the input model
    let mut document = InMemoryDocument::from_path(&args.input)?;

    // Run the tagging pass, reporting each view on the console
    let tagger = Tagger::new(app_config);
    let summary = tagger.run(&mut document, &mut ConsoleReporter)?;

    // Write the tagged model back out
    document.write_to_path(&args.output)?;

    info!(output_file = args.output, total = summary.total(); "Tagged model written");

    Ok(summary)
}
