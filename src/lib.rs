//! Structural comparison of indentation-based device configurations
//!
//! The crate is organised the same way a repository tool would be:
//!
//! - `artifacts`: the data structures and algorithms (parser, aligner,
//!   view projector, patch synthesizer, rendering)
//! - `areas`: the I/O boundary (input files, output targets) and the
//!   per-invocation `Comparison` context
//! - `commands`: one user-facing verb per module, implemented on `Comparison`

/// Macro for debug logging that is enabled only with the `debug_align` feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("aligned {} siblings", count);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_align")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

#[cfg(test)]
mod test_support;

pub use artifacts::diff::aligned_tree::AlignedTree;
pub use artifacts::diff::membership::Membership;
pub use artifacts::section::section_tree::{Section, SectionId, SectionTree};
pub use errors::{InputError, ParseError};

/// Compares two configuration texts and returns the aligned tree
pub fn compare(first: &str, second: &str) -> anyhow::Result<AlignedTree> {
    let first = SectionTree::parse(first)?;
    let second = SectionTree::parse(second)?;

    Ok(artifacts::diff::tree_aligner::TreeAligner::new(&first, &second).align())
}
