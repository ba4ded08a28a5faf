//! User-facing verbs
//!
//! Each verb lives in its own module as an `impl Comparison` block:
//!
//! - `first` / `second`: Lines unique to one file, with their context
//! - `common`: Lines present in both files
//! - `diff`: Every line, marked by the file it came from
//! - `merge`: The union of both configurations
//! - `patch`: Commands turning the first configuration into the second

pub mod common;
pub mod diff;
pub mod first;
pub mod merge;
pub mod patch;
pub mod second;

use crate::areas::comparison::Comparison;
use crate::artifacts::diff::aligned_tree::AlignedTree;
use crate::artifacts::render::{LinePrefixes, Renderer};
use std::io::Write;

impl Comparison {
    /// Renders `tree` with `prefixes`, or without any markers when `raw` is set
    pub(crate) fn print(
        &self,
        tree: &AlignedTree,
        prefixes: LinePrefixes,
        raw: bool,
    ) -> anyhow::Result<()> {
        let prefixes = if raw {
            prefixes.without_markers()
        } else {
            prefixes
        };
        let output = Renderer::new(&prefixes, self.color()).render(tree);

        let mut writer = self.writer();
        writer.write_all(output.as_bytes())?;
        writer.flush()?;

        Ok(())
    }
}
