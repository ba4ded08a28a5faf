use crate::artifacts::diff::aligned_tree::AlignedTree;
use crate::artifacts::diff::membership::Membership;
use crate::artifacts::views::View;
use derive_new::new;

/// Derives filtered views of an aligned tree, never re-running any matching
#[derive(Debug, Clone, new)]
pub struct ViewProjector<'a> {
    aligned: &'a AlignedTree,
}

impl<'a> ViewProjector<'a> {
    pub fn project(&self, view: View) -> AlignedTree {
        match view {
            View::CommonToBoth => self.common_to_both(),
            View::UniqueToFirst => self.unique_to(Membership::FIRST),
            View::UniqueToSecond => self.unique_to(Membership::SECOND),
            View::Differences | View::Merged => self.aligned.clone(),
        }
    }

    /// Only `BOTH` nodes; the children of a kept node are filtered the same way
    pub fn common_to_both(&self) -> AlignedTree {
        self.aligned.retain(|id| self.aligned.membership(id).is_both())
    }

    /// Nodes tagged exactly `side`, plus the ancestors needed to reach them
    pub fn unique_to(&self, side: Membership) -> AlignedTree {
        let section = self.aligned.section();
        let mut keep = vec![false; section.len() + 1];

        // parents precede children in preorder, so the reverse walk settles
        // every child before its parent
        let preorder = section.descendants().collect::<Vec<_>>();
        for id in preorder.into_iter().rev() {
            keep[id] = self.aligned.membership(id) == side
                || section.children(id).iter().any(|child| keep[*child]);
        }

        self.aligned.retain(|id| keep[id])
    }
}
