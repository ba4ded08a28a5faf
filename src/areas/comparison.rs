use crate::artifacts::diff::aligned_tree::AlignedTree;
use crate::artifacts::diff::tree_aligner::TreeAligner;
use crate::artifacts::section::section_tree::SectionTree;
use std::cell::{RefCell, RefMut};
use std::io::Write;

/// Two parsed configurations, their alignment and the place output goes
///
/// Every command is implemented as a method on this type.
pub struct Comparison {
    writer: RefCell<Box<dyn Write>>,
    aligned: AlignedTree,
    color: bool,
}

impl Comparison {
    pub fn new(
        first: &SectionTree,
        second: &SectionTree,
        writer: Box<dyn Write>,
        color: bool,
    ) -> Self {
        Comparison {
            writer: RefCell::new(writer),
            aligned: TreeAligner::new(first, second).align(),
            color,
        }
    }

    pub fn aligned(&self) -> &AlignedTree {
        &self.aligned
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn color(&self) -> bool {
        self.color
    }
}
