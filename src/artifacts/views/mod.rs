//! Read-only projections of an aligned tree
//!
//! Each view keeps the per-node membership so the renderer can pick a prefix
//! and a color for every line.

pub mod projector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Lines present in both inputs
    CommonToBoth,
    /// Lines only in the first input, with their enclosing context
    UniqueToFirst,
    /// Lines only in the second input, with their enclosing context
    UniqueToSecond,
    /// Every line, tagged for a diff listing
    Differences,
    /// Every line, read as the union of both configurations
    Merged,
}
