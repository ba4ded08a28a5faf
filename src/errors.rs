//! Error types surfaced at the library boundary.
//!
//! Alignment, projection and patch synthesis are total, so only parsing and
//! input acquisition can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Malformed configuration text. No partial tree is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line is nested more than one level below the section it follows.
    #[error("line {line}: depth {depth} skips a level below depth {parent_depth}: {content:?}")]
    IndentationSkip {
        line: usize,
        depth: usize,
        parent_depth: usize,
        content: String,
    },

    /// A verbatim block (e.g. a banner) whose delimiter never reappears.
    #[error("line {line}: verbatim block is never terminated by {delimiter:?}: {content:?}")]
    UnterminatedVerbatim {
        line: usize,
        delimiter: String,
        content: String,
    },
}

impl ParseError {
    /// 1-based number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            ParseError::IndentationSkip { line, .. } => *line,
            ParseError::UnterminatedVerbatim { line, .. } => *line,
        }
    }
}

/// A configuration text could not be obtained.
#[derive(Error, Debug)]
#[error("failed to read {}: {}", .path.display(), .source)]
pub struct InputError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
