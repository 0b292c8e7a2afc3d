//! PDF Spreads Library
//!
//! Reorders the pages of a PDF so that two-page view shows spreads in the
//! correct visual order for right-to-left reading (manga scans). This
//! library provides functionality to:
//! - Reorder a page sequence for right-to-left spreads
//! - Rewrite a PDF file with the corrected page order
//! - Decide per file whether an existing output may be overwritten,
//!   with batch-wide sticky "all"/"never" answers
//! - Process a batch of files strictly in order
//!
//! # Example
//!
//! ```no_run
//! use pdf_spreads::batch::{run_batch, BatchOptions, OutputNaming};
//! use pdf_spreads::prompt::ConsolePrompter;
//! use std::path::PathBuf;
//!
//! let options = BatchOptions {
//!     sources: vec![
//!         PathBuf::from("volume-1.pdf"),
//!         PathBuf::from("volume-2.pdf"),
//!     ],
//!     destination: PathBuf::from("fixed"),
//!     naming: OutputNaming::Suffix("-updated".to_string()),
//! };
//!
//! let summary = run_batch(&options, &mut ConsolePrompter).expect("batch failed");
//! eprintln!("{} written, {} skipped", summary.written, summary.skipped);
//! ```

pub mod batch;
pub mod error;
pub mod overwrite;
pub mod pdf;
pub mod prompt;
pub mod reorder;

// Re-export commonly used items
pub use error::{Error, Result};
