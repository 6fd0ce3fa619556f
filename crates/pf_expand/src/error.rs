//! Failure taxonomy for the generation pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a generation run.
///
/// All variants are fatal: the batch is one-shot and a half-generated
/// output set is worse than none, so nothing is retried or resumed.
#[derive(Debug, Error)]
pub enum GenError {
    /// The hand-authored base source for a pairing is missing or unreadable.
    #[error("template {} not found or unreadable", path.display())]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A required substitution pattern never occurred in the source being
    /// transformed. This usually means a hand-edit changed the literal
    /// shape of a template.
    #[error("pattern `{pattern}` not found while generating {unit}")]
    PatternMismatch { pattern: String, unit: String },

    /// A generated unit could not be persisted.
    #[error("failed to write {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
