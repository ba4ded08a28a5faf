//! I/O boundary of a comparison
//!
//! - `workspace`: Reading the two configuration files
//! - `output`: Choosing between an output file, the pager and plain stdout
//! - `comparison`: The per-invocation context every command runs against

pub mod comparison;
pub mod output;
pub mod workspace;
