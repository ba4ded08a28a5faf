use derive_new::new;
use std::collections::HashSet;
use std::hash::Hash;

/// One step of a sibling alignment, expressed as indices into the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Delete { a: usize },
    Insert { b: usize },
    Equal { a: usize, b: usize },
}

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;
    type EditScript;

    fn compute_table(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Self::EditScript;
}

/// Suffix LCS lengths over the part of the inputs left after removing the
/// common prefix and suffix
///
/// Only elements that also occur in the other window get a row or a column;
/// `a_keep` and `b_keep` map those back to indices into the full inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    prefix: usize,
    suffix: usize,
    a_keep: Vec<usize>,
    b_keep: Vec<usize>,
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    /// LCS length of the kept elements from `a_keep[i]` and `b_keep[j]` onwards
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }

    pub fn len(&self) -> usize {
        self.prefix + self.suffix + self.cells.first().copied().unwrap_or(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Longest-common-subsequence alignment of two sibling sequences
///
/// Every element is its own token, so repeated equal elements are matched by
/// position rather than collapsed by content.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq> LcsDiff<'d, T> {
    fn trimmed(&self) -> (usize, usize) {
        let prefix = self
            .a
            .iter()
            .zip(self.b.iter())
            .take_while(|(x, y)| x == y)
            .count();

        let max_suffix = self.a.len().min(self.b.len()) - prefix;
        let suffix = self
            .a
            .iter()
            .rev()
            .zip(self.b.iter().rev())
            .take(max_suffix)
            .take_while(|(x, y)| x == y)
            .count();

        (prefix, suffix)
    }
}

impl<'d, T: Ord + Hash> DiffAlgorithm<'d, T> for LcsDiff<'d, T> {
    type Trace = LcsTable;
    type EditPath = Vec<(usize, usize)>;
    type EditScript = Vec<Edit>;

    fn compute_table(&self) -> Self::Trace {
        let (prefix, suffix) = self.trimmed();
        let a = &self.a[prefix..self.a.len() - suffix];
        let b = &self.b[prefix..self.b.len() - suffix];

        // an element missing from the other window can never be matched
        let a_values = a.iter().collect::<HashSet<_>>();
        let b_values = b.iter().collect::<HashSet<_>>();
        let a_keep = a
            .iter()
            .enumerate()
            .filter(|(_, x)| b_values.contains(x))
            .map(|(i, _)| prefix + i)
            .collect::<Vec<_>>();
        let b_keep = b
            .iter()
            .enumerate()
            .filter(|(_, y)| a_values.contains(y))
            .map(|(j, _)| prefix + j)
            .collect::<Vec<_>>();

        let cols = b_keep.len() + 1;
        let mut cells = vec![0u32; (a_keep.len() + 1) * cols];

        for i in (0..a_keep.len()).rev() {
            for j in (0..b_keep.len()).rev() {
                cells[i * cols + j] = if self.a[a_keep[i]] == self.b[b_keep[j]] {
                    cells[(i + 1) * cols + j + 1] + 1
                } else {
                    cells[(i + 1) * cols + j].max(cells[i * cols + j + 1])
                };
            }
        }

        LcsTable {
            prefix,
            suffix,
            a_keep,
            b_keep,
            cols,
            cells,
        }
    }

    /// Matched index pairs, ascending in both coordinates
    ///
    /// On a tie the element that sorts lower is skipped, so swapping the
    /// inputs yields the mirrored path.
    fn backtrack(&self) -> Self::EditPath {
        let table = self.compute_table();
        let (n, m) = (self.a.len(), self.b.len());
        let (a_end, b_end) = (n - table.suffix, m - table.suffix);

        let mut path = (0..table.prefix).map(|k| (k, k)).collect::<Vec<_>>();

        let (mut i, mut j) = (0, 0);
        while i < table.a_keep.len() && j < table.b_keep.len() {
            let (x, y) = (table.a_keep[i], table.b_keep[j]);

            if self.a[x] == self.b[y] {
                path.push((x, y));
                i += 1;
                j += 1;
                continue;
            }

            let skip_first = table.get(i + 1, j);
            let skip_second = table.get(i, j + 1);
            if skip_first > skip_second || (skip_first == skip_second && self.a[x] < self.b[y]) {
                i += 1;
            } else {
                j += 1;
            }
        }

        path.extend((0..table.suffix).map(|k| (a_end + k, b_end + k)));
        path
    }

    /// Edit script where each run of deletions precedes the run of insertions
    /// sharing the same gap between matches
    fn diff(&self) -> Self::EditScript {
        let mut script = Vec::with_capacity(self.a.len() + self.b.len());
        let (mut x, mut y) = (0, 0);

        let anchors = self
            .backtrack()
            .into_iter()
            .chain(std::iter::once((self.a.len(), self.b.len())));

        for (a_match, b_match) in anchors {
            script.extend((x..a_match).map(|a| Edit::Delete { a }));
            script.extend((y..b_match).map(|b| Edit::Insert { b }));

            if a_match < self.a.len() && b_match < self.b.len() {
                script.push(Edit::Equal {
                    a: a_match,
                    b: b_match,
                });
            }

            (x, y) = (a_match + 1, b_match + 1);
        }

        script
    }
}
