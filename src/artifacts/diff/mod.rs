//! Structural comparison of two section trees
//!
//! - `membership`: bitflags recording which input contributed a node
//! - `lcs`: longest-common-subsequence alignment of one sibling level
//! - `aligned_tree`: the merged tree with a membership per node
//! - `tree_aligner`: level-by-level alignment of two parsed trees

pub mod aligned_tree;
pub mod lcs;
pub mod membership;
pub mod tree_aligner;
