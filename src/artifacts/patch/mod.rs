//! Patch synthesis: commands that turn the first configuration into the second
//!
//! A [`Patch`] is both a flat, ordered command list and a renderable tree in
//! which the untouched parents of every command appear as context lines.

pub mod synthesizer;

use crate::artifacts::diff::aligned_tree::AlignedTree;
use derive_new::new;

/// IOS removes a line by repeating it after `no `
pub const DEFAULT_NEGATION_MARKER: &str = "no ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatchAction {
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PatchCommand {
    pub action: PatchAction,
    /// Depth of the line in the configuration it applies to
    pub depth: usize,
    /// Command to issue; already negated for removals
    pub text: String,
    /// Texts of the enclosing sections that must be entered first, outermost first
    pub context: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Patch {
    commands: Vec<PatchCommand>,
    tree: AlignedTree,
}

impl Patch {
    pub fn commands(&self) -> &[PatchCommand] {
        &self.commands
    }

    /// Commands nested under their context; removals are `FIRST`, additions `SECOND`
    pub fn tree(&self) -> &AlignedTree {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
