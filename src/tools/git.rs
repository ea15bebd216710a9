use crate::error::AppError;

use super::process::capture;

/// Source-control queries needed to stamp a build
pub(crate) trait Vcs {
    /// Short name of the currently checked-out branch
    fn current_branch(&self) -> Result<String, AppError>;

    /// Abbreviated hash of the current revision
    fn short_revision(&self) -> Result<String, AppError>;
}

/// `Vcs` backed by the git command line
#[derive(Debug, Clone)]
pub(crate) struct Git {
    program: String,
}

impl Git {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Vcs for Git {
    fn current_branch(&self) -> Result<String, AppError> {
        capture("git", &self.program, &["symbolic-ref", "--short", "HEAD"])
    }

    fn short_revision(&self) -> Result<String, AppError> {
        capture("git", &self.program, &["rev-parse", "--short", "HEAD"])
    }
}
