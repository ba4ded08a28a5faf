use crate::artifacts::diff::aligned_tree::AlignedTree;
use crate::artifacts::diff::lcs::{DiffAlgorithm, Edit, LcsDiff};
use crate::artifacts::diff::membership::Membership;
use crate::artifacts::section::section_tree::{ROOT, SectionId, SectionTree};
use crate::debug_log;
use derive_new::new;

/// Pending work for the aligner's explicit stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlignJob {
    /// Align the children of a matched pair under `target`
    Pair {
        first: SectionId,
        second: SectionId,
        target: SectionId,
    },
    /// Copy the children of a one-sided section under `target`, keeping its side
    Copy {
        source: SectionId,
        target: SectionId,
        membership: Membership,
    },
}

/// Aligns two section trees level by level
///
/// At each level the sibling texts are matched with an LCS. Matched pairs
/// become `BOTH` nodes whose children are aligned in turn; unmatched sections
/// bring their entire subtree along with their own side's membership, whatever
/// the other tree contains below them.
#[derive(Debug, Clone, new)]
pub struct TreeAligner<'t> {
    first: &'t SectionTree,
    second: &'t SectionTree,
}

impl<'t> TreeAligner<'t> {
    pub fn align(&self) -> AlignedTree {
        let mut aligned = AlignedTree::new();
        let mut jobs = vec![AlignJob::Pair {
            first: ROOT,
            second: ROOT,
            target: ROOT,
        }];

        while let Some(job) = jobs.pop() {
            let pending = match job {
                AlignJob::Pair {
                    first,
                    second,
                    target,
                } => self.align_children(first, second, target, &mut aligned),
                AlignJob::Copy {
                    source,
                    target,
                    membership,
                } => self.copy_children(source, target, membership, &mut aligned),
            };

            // reversed so the first child is processed next
            jobs.extend(pending.into_iter().rev());
        }

        aligned
    }

    fn source(&self, membership: Membership) -> &'t SectionTree {
        if membership.is_second_only() {
            self.second
        } else {
            self.first
        }
    }

    fn align_children(
        &self,
        first: SectionId,
        second: SectionId,
        target: SectionId,
        aligned: &mut AlignedTree,
    ) -> Vec<AlignJob> {
        let first_ids = self.first.children(first);
        let second_ids = self.second.children(second);

        let first_texts = first_ids
            .iter()
            .map(|id| self.first.section(*id).text())
            .collect::<Vec<_>>();
        let second_texts = second_ids
            .iter()
            .map(|id| self.second.section(*id).text())
            .collect::<Vec<_>>();

        let script = LcsDiff::new(&first_texts, &second_texts).diff();
        let mut pending = Vec::with_capacity(script.len());

        for edit in script {
            let job = match edit {
                Edit::Equal { a, b } => AlignJob::Pair {
                    first: first_ids[a],
                    second: second_ids[b],
                    target: aligned.push_child(target, first_texts[a], Membership::BOTH),
                },
                Edit::Delete { a } => AlignJob::Copy {
                    source: first_ids[a],
                    target: aligned.push_child(target, first_texts[a], Membership::FIRST),
                    membership: Membership::FIRST,
                },
                Edit::Insert { b } => AlignJob::Copy {
                    source: second_ids[b],
                    target: aligned.push_child(target, second_texts[b], Membership::SECOND),
                    membership: Membership::SECOND,
                },
            };
            pending.push(job);
        }

        debug_log!(
            "aligned {} / {} siblings at depth {}: {} matched",
            first_ids.len(),
            second_ids.len(),
            self.first.section(first).depth() + 1,
            pending
                .iter()
                .filter(|job| matches!(job, AlignJob::Pair { .. }))
                .count()
        );

        pending
    }

    fn copy_children(
        &self,
        source: SectionId,
        target: SectionId,
        membership: Membership,
        aligned: &mut AlignedTree,
    ) -> Vec<AlignJob> {
        let tree = self.source(membership);

        tree.children(source)
            .iter()
            .map(|child| AlignJob::Copy {
                source: *child,
                target: aligned.push_child(target, tree.section(*child).text(), membership),
                membership,
            })
            .collect()
    }
}
