use crate::artifacts::diff::membership::Membership;
use crate::artifacts::section::section_tree::{ROOT, SectionId, SectionTree};

/// A section tree in which every node records which input(s) contributed it
///
/// The membership table is indexed by the [`SectionId`]s of `section`; the
/// synthetic root is always `BOTH`.
#[derive(Debug, Clone)]
pub struct AlignedTree {
    section: SectionTree,
    membership: Vec<Membership>,
}

impl Default for AlignedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl AlignedTree {
    pub fn new() -> Self {
        AlignedTree {
            section: SectionTree::new(),
            membership: vec![Membership::BOTH],
        }
    }

    pub fn section(&self) -> &SectionTree {
        &self.section
    }

    pub fn membership(&self, id: SectionId) -> Membership {
        self.membership[id]
    }

    pub fn is_empty(&self) -> bool {
        self.section.is_empty()
    }

    pub(crate) fn push_child(
        &mut self,
        parent: SectionId,
        text: impl Into<String>,
        membership: Membership,
    ) -> SectionId {
        let id = self.section.push_child(parent, text);
        self.membership.push(membership);
        id
    }

    /// Preorder `(depth, membership, text)` listing
    pub fn outline(&self) -> Vec<(usize, Membership, &str)> {
        self.section
            .descendants()
            .map(|id| {
                let section = self.section.section(id);
                (section.depth(), self.membership(id), section.text())
            })
            .collect()
    }

    /// Copies the nodes selected by `keep`, descending only into kept nodes
    ///
    /// The copy is built in preorder, so its ids follow document order.
    pub(crate) fn retain(&self, keep: impl Fn(SectionId) -> bool) -> AlignedTree {
        let mut retained = AlignedTree::new();
        let mut stack = self
            .section
            .children(ROOT)
            .iter()
            .rev()
            .map(|id| (*id, ROOT))
            .collect::<Vec<_>>();

        while let Some((id, parent)) = stack.pop() {
            if !keep(id) {
                continue;
            }

            let copy = retained.push_child(
                parent,
                self.section.section(id).text(),
                self.membership(id),
            );
            stack.extend(
                self.section
                    .children(id)
                    .iter()
                    .rev()
                    .map(|child| (*child, copy)),
            );
        }

        retained
    }

    /// Same tree with FIRST and SECOND exchanged
    pub fn swapped(&self) -> AlignedTree {
        AlignedTree {
            section: self.section.clone(),
            membership: self.membership.iter().map(Membership::swapped).collect(),
        }
    }
}

impl PartialEq for AlignedTree {
    fn eq(&self, other: &Self) -> bool {
        self.outline() == other.outline()
    }
}

impl Eq for AlignedTree {}
