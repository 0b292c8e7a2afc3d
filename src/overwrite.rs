//! Overwrite decision state machine
//!
//! Decides, for each candidate output path in a batch, whether to write or
//! skip. The state is batch-scoped and sticky: once the user answers "all"
//! or "never", later files are decided without prompting.

use std::path::Path;

use crate::error::Result;
use crate::prompt::{PromptAnswer, Prompter};

/// Per-file outcome of an overwrite decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Write,
    Skip,
}

/// Batch-scoped overwrite state. `AlwaysOverwrite` and `NeverOverwrite`
/// are sticky: they are never left for the remainder of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteState {
    Normal,
    AlwaysOverwrite,
    NeverOverwrite,
}

/// Owns the overwrite state for one batch run.
#[derive(Debug)]
pub struct OverwritePolicy {
    state: OverwriteState,
}

impl OverwritePolicy {
    /// Start a batch in the prompting state.
    pub fn new() -> Self {
        OverwritePolicy {
            state: OverwriteState::Normal,
        }
    }

    /// Start a batch that overwrites without ever prompting.
    pub fn always() -> Self {
        OverwritePolicy {
            state: OverwriteState::AlwaysOverwrite,
        }
    }

    /// Start a batch that skips existing files without ever prompting.
    pub fn never() -> Self {
        OverwritePolicy {
            state: OverwriteState::NeverOverwrite,
        }
    }

    pub fn state(&self) -> OverwriteState {
        self.state
    }

    /// Decide whether `output_path` may be written.
    ///
    /// The existence check comes before everything else: a path that is
    /// not on disk is always written, whatever the state, and the prompter
    /// is not consulted. Otherwise a sticky state decides outright, and
    /// the `Normal` state asks the prompter exactly once, recording an
    /// "all"/"never" answer for the rest of the batch.
    pub fn decide(
        &mut self,
        output_path: &Path,
        prompter: &mut dyn Prompter,
    ) -> Result<Decision> {
        if !output_path.exists() {
            return Ok(Decision::Write);
        }

        match self.state {
            OverwriteState::AlwaysOverwrite => Ok(Decision::Write),
            OverwriteState::NeverOverwrite => Ok(Decision::Skip),
            OverwriteState::Normal => match prompter.ask(output_path)? {
                PromptAnswer::Yes => Ok(Decision::Write),
                PromptAnswer::No => Ok(Decision::Skip),
                PromptAnswer::All => {
                    self.state = OverwriteState::AlwaysOverwrite;
                    Ok(Decision::Write)
                }
                PromptAnswer::Never => {
                    self.state = OverwriteState::NeverOverwrite;
                    Ok(Decision::Skip)
                }
            },
        }
    }
}

impl Default for OverwritePolicy {
    fn default() -> Self {
        Self::new()
    }
}
