//! PDF Spreads CLI tool
//!
//! A command-line tool for reordering PDF pages for right-to-left
//! two-page viewing.

use anyhow::bail;
use clap::{Parser, Subcommand};
use glob::glob;
use std::path::PathBuf;
use std::process;

use pdf_spreads::batch::{run_batch_with_policy, BatchOptions, OutputNaming};
use pdf_spreads::overwrite::OverwritePolicy;
use pdf_spreads::pdf::page_count;
use pdf_spreads::prompt::ConsolePrompter;
use pdf_spreads::reorder::reordered_len;

/// PDF Spreads - Reorder PDF pages for right-to-left two-page view
#[derive(Parser)]
#[command(name = "pdf-spreads")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Reorder one volume, picking the output name
    pdf-spreads reorder volume-1.pdf -d fixed --name \"volume-1 (rtl)\"

    # Reorder a whole series into ./fixed, appending -updated to each name
    pdf-spreads reorder -d fixed \"volume-*.pdf\"

    # Re-run without prompting, overwriting earlier output
    pdf-spreads reorder -d fixed --overwrite \"volume-*.pdf\"

    # See what a reorder would do to a file
    pdf-spreads info volume-1.pdf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reorder pages of one or more PDFs for right-to-left reading
    Reorder {
        /// Input PDF files (in order). Supports glob patterns like "*.pdf"
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Destination directory for the reordered files
        #[arg(short, long, default_value = ".")]
        destination: PathBuf,

        /// Appended to each source filename (before .pdf)
        #[arg(long, default_value = "-updated")]
        suffix: String,

        /// Output filename without the .pdf extension (single input only)
        #[arg(long)]
        name: Option<String>,

        /// Overwrite existing outputs without prompting
        #[arg(long, conflicts_with = "skip_existing")]
        overwrite: bool,

        /// Skip existing outputs without prompting
        #[arg(long)]
        skip_existing: bool,
    },

    /// Show a PDF's page count and what a reorder would produce
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Reorder {
            inputs,
            destination,
            suffix,
            name,
            overwrite,
            skip_existing,
        } => cmd_reorder(inputs, destination, suffix, name, overwrite, skip_existing),
        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Expand glob patterns in input paths
fn expand_globs(patterns: Vec<String>) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        // Check if pattern contains glob characters
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let mut matched = false;
            for entry in glob(&pattern)? {
                match entry {
                    Ok(path) => {
                        paths.push(path);
                        matched = true;
                    }
                    Err(e) => eprintln!("Warning: glob error for {}: {}", pattern, e),
                }
            }
            if !matched {
                bail!("No files matched pattern: {}", pattern);
            }
        } else {
            // No glob characters, treat as literal path
            paths.push(PathBuf::from(pattern));
        }
    }

    // Sort paths for consistent ordering
    paths.sort();

    Ok(paths)
}

/// Reorder a batch of PDFs
fn cmd_reorder(
    inputs: Vec<String>,
    destination: PathBuf,
    suffix: String,
    name: Option<String>,
    overwrite: bool,
    skip_existing: bool,
) -> anyhow::Result<()> {
    // Expand glob patterns
    let sources = expand_globs(inputs)?;

    // Validate inputs exist
    for path in &sources {
        if !path.exists() {
            bail!("Input file not found: {}", path.display());
        }
    }

    let naming = match name {
        Some(name) => {
            if sources.len() > 1 {
                bail!("--name only applies to a single input; use --suffix for batches");
            }
            OutputNaming::Explicit(name)
        }
        None => OutputNaming::Suffix(suffix),
    };

    let policy = if overwrite {
        OverwritePolicy::always()
    } else if skip_existing {
        OverwritePolicy::never()
    } else {
        OverwritePolicy::new()
    };

    eprintln!("Reordering {} PDF file(s)...", sources.len());

    let options = BatchOptions {
        sources,
        destination,
        naming,
    };

    let summary = run_batch_with_policy(&options, policy, &mut ConsolePrompter)?;

    eprintln!(
        "Done: {} written, {} skipped, {} failed",
        summary.written, summary.skipped, summary.failed
    );

    if summary.failed > 0 {
        bail!("{} file(s) could not be processed", summary.failed);
    }

    Ok(())
}

/// Show information about a PDF and the reorder it would get
fn cmd_info(input: PathBuf) -> anyhow::Result<()> {
    if !input.exists() {
        bail!("Input file not found: {}", input.display());
    }

    let pages = page_count(&input)?;
    let after = reordered_len(pages);

    println!("File: {}", input.display());
    println!("Pages: {}", pages);
    println!("Pages after reorder: {}", after);

    if after < pages {
        println!("Note: the trailing page is left out of the reordered output");
    }

    Ok(())
}
