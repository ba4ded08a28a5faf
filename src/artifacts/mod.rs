//! Configuration data structures and algorithms
//!
//! - `section`: Section trees and the indentation parser
//! - `diff`: Sibling alignment and the aligned tree
//! - `views`: Common and unique projections of an aligned tree
//! - `patch`: Negation-based patch synthesis
//! - `render`: Prefixed, optionally colored text output
//! - `core`: Shared utilities (pager wrapper)

pub mod core;
pub mod diff;
pub mod patch;
pub mod render;
pub mod section;
pub mod views;
