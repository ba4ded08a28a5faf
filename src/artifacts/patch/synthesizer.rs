use crate::artifacts::diff::aligned_tree::AlignedTree;
use crate::artifacts::diff::membership::Membership;
use crate::artifacts::patch::{Patch, PatchAction, PatchCommand};
use crate::artifacts::section::section_tree::{ROOT, SectionId};
use derive_new::new;

/// Walks an aligned tree in preorder and emits the commands turning the first
/// configuration into the second
///
/// A first-only node is removed with its negated form and its subtree is left
/// alone; a second-only node is added together with its whole subtree; a
/// common node only contributes the commands found below it.
#[derive(Debug, Clone, new)]
pub struct PatchSynthesizer<'a> {
    aligned: &'a AlignedTree,
    negation_marker: &'a str,
}

impl<'a> PatchSynthesizer<'a> {
    pub fn synthesize(&self) -> Patch {
        let section = self.aligned.section();
        let mut commands = Vec::new();
        let mut tree = AlignedTree::new();

        // aligned id -> id of its copy in the patch tree, once it has one
        let mut copies: Vec<Option<SectionId>> = vec![None; section.len() + 1];
        copies[ROOT] = Some(ROOT);

        let mut stack = section.children(ROOT).iter().rev().copied().collect::<Vec<_>>();

        while let Some(id) = stack.pop() {
            let membership = self.aligned.membership(id);
            let node = section.section(id);

            if membership.is_both() {
                stack.extend(section.children(id).iter().rev().copied());
                continue;
            }

            let parent = self.materialize(node.parent().unwrap_or(ROOT), &mut tree, &mut copies);
            let context = section
                .ancestors(id)
                .into_iter()
                .rev()
                .map(|ancestor| section.section(ancestor).text().to_string())
                .collect::<Vec<_>>();

            if membership.is_first_only() {
                let text = self.negate(node.text());
                tree.push_child(parent, text.as_str(), Membership::FIRST);
                commands.push(PatchCommand::new(
                    PatchAction::Remove,
                    node.depth(),
                    text,
                    context,
                ));
            } else {
                copies[id] = Some(tree.push_child(parent, node.text(), Membership::SECOND));
                commands.push(PatchCommand::new(
                    PatchAction::Add,
                    node.depth(),
                    node.text().to_string(),
                    context,
                ));
                stack.extend(section.children(id).iter().rev().copied());
            }
        }

        Patch::new(commands, tree)
    }

    /// Removal form of a line; an already negated line loses its marker instead
    ///
    /// A verbatim block is removed by its opening line alone, so its body is
    /// never replayed as commands.
    pub fn negate(&self, text: &str) -> String {
        let head = text.lines().next().unwrap_or(text);

        match head.strip_prefix(self.negation_marker) {
            Some(positive) if !self.negation_marker.is_empty() => positive.to_string(),
            _ => format!("{}{}", self.negation_marker, head),
        }
    }

    /// Copies the common ancestors of `id` into the patch tree as context lines
    fn materialize(
        &self,
        id: SectionId,
        tree: &mut AlignedTree,
        copies: &mut [Option<SectionId>],
    ) -> SectionId {
        let section = self.aligned.section();

        let mut missing = Vec::new();
        let mut current = id;
        let mut anchor = loop {
            match copies[current] {
                Some(copy) => break copy,
                None => {
                    missing.push(current);
                    current = section.parent(current).unwrap_or(ROOT);
                }
            }
        };

        for ancestor in missing.into_iter().rev() {
            anchor = tree.push_child(
                anchor,
                section.section(ancestor).text(),
                self.aligned.membership(ancestor),
            );
            copies[ancestor] = Some(anchor);
        }

        anchor
    }
}
