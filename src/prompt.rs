//! Interactive overwrite prompting
//!
//! The batch loop never talks to stdin directly; it goes through the
//! [`Prompter`] trait so tests can substitute a scripted responder.

use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;

/// Answer to the overwrite prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAnswer {
    /// Overwrite this file
    Yes,
    /// Skip this file (the default)
    No,
    /// Overwrite this file and every later one without asking again
    All,
    /// Skip this file and every later one without asking again
    Never,
}

impl PromptAnswer {
    /// Parse a response line. Unrecognized input, including an empty
    /// line, is the default `No`.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => PromptAnswer::Yes,
            "a" | "all" => PromptAnswer::All,
            "v" | "never" => PromptAnswer::Never,
            _ => PromptAnswer::No,
        }
    }
}

/// Asks the user whether an existing output file may be overwritten.
pub trait Prompter {
    fn ask(&mut self, path: &Path) -> Result<PromptAnswer>;
}

/// Prompter backed by stdin/stdout.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn ask(&mut self, path: &Path) -> Result<PromptAnswer> {
        print!(
            "Overwrite {}? [y]es/[N]o/[a]ll/ne[v]er: ",
            path.display()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(PromptAnswer::parse(&input))
    }
}
