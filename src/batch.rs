//! Batch orchestration
//!
//! Processes the selected source files strictly in order: each file's
//! overwrite decision is resolved, and the file reordered and written,
//! before the next file is considered. The overwrite state lives here for
//! the duration of one batch and nowhere else.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::overwrite::{Decision, OverwritePolicy};
use crate::pdf::reorder_file;
use crate::prompt::Prompter;

/// How output filenames are derived from source filenames.
#[derive(Debug, Clone)]
pub enum OutputNaming {
    /// `{destination}/{source_stem}{suffix}.pdf`
    Suffix(String),
    /// `{destination}/{name}.pdf`, for a batch of exactly one file
    Explicit(String),
}

/// Options for one batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Source PDF paths, processed in order
    pub sources: Vec<PathBuf>,
    /// Destination directory for the reordered files
    pub destination: PathBuf,
    /// Output filename derivation
    pub naming: OutputNaming,
}

/// Counters for one completed batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Derive the output path for one source file.
pub fn output_path(destination: &Path, source: &Path, naming: &OutputNaming) -> PathBuf {
    let name = match naming {
        OutputNaming::Suffix(suffix) => {
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("{}{}.pdf", stem, suffix)
        }
        OutputNaming::Explicit(name) => format!("{}.pdf", name),
    };
    destination.join(name)
}

/// Run one batch with a fresh overwrite policy.
pub fn run_batch(options: &BatchOptions, prompter: &mut dyn Prompter) -> Result<BatchSummary> {
    run_batch_with_policy(options, OverwritePolicy::new(), prompter)
}

/// Run one batch starting from the given overwrite policy.
///
/// A source that fails to decode, or an output that fails to write, is
/// reported and counted; the batch moves on to the next file.
pub fn run_batch_with_policy(
    options: &BatchOptions,
    mut policy: OverwritePolicy,
    prompter: &mut dyn Prompter,
) -> Result<BatchSummary> {
    if options.sources.is_empty() {
        return Err(Error::NoSources);
    }

    let mut summary = BatchSummary::default();

    for source in &options.sources {
        let output = output_path(&options.destination, source, &options.naming);

        match policy.decide(&output, prompter)? {
            Decision::Skip => {
                eprintln!("Skipping {} (not overwriting)", output.display());
                summary.skipped += 1;
            }
            Decision::Write => match reorder_file(source, &output) {
                Ok(report) => {
                    eprintln!("Created: {}", output.display());
                    if report.dropped_page() {
                        eprintln!(
                            "Warning: {} has {} pages; the trailing page was left out of the reordered output",
                            source.display(),
                            report.source_pages
                        );
                    }
                    summary.written += 1;
                }
                Err(e) => {
                    eprintln!("Error processing {}: {}", source.display(), e);
                    summary.failed += 1;
                }
            },
        }
    }

    Ok(summary)
}
