use crate::artifacts::section::section_tree::{ROOT, SectionId, SectionTree};
use proptest::prelude::*;

const VOCABULARY: [&str; 6] = [
    "interface Gi0/1",
    "shutdown",
    "description uplink",
    "ip address 10.0.0.1 255.255.255.0",
    "router ospf 1",
    "!",
];

/// Turns requested depths into a valid sequence (never deeper than previous + 1)
fn valid_depths(requests: &[usize]) -> Vec<usize> {
    let mut previous = 0;
    requests
        .iter()
        .map(|request| {
            previous = (request + 1).min(previous + 1);
            previous
        })
        .collect()
}

pub(crate) fn render_lines(lines: &[(usize, String)]) -> String {
    lines
        .iter()
        .map(|(depth, text)| format!("{:indent$}{}\n", "", text, indent = depth - 1))
        .collect()
}

/// Well-formed configuration text drawn from a small vocabulary, so repeated
/// and shared lines are frequent
pub(crate) fn config_text() -> impl Strategy<Value = String> {
    proptest::collection::vec((0usize..4, 0..VOCABULARY.len()), 0..16).prop_map(|lines| {
        let requests = lines.iter().map(|(depth, _)| *depth).collect::<Vec<_>>();
        let depths = valid_depths(&requests);

        let lines = depths
            .into_iter()
            .zip(lines)
            .map(|(depth, (_, word))| (depth, VOCABULARY[word].to_string()))
            .collect::<Vec<_>>();
        render_lines(&lines)
    })
}

/// Like [`config_text`] but no two siblings share a text
pub(crate) fn sibling_distinct_config_text() -> impl Strategy<Value = String> {
    config_text().prop_map(|text| dedupe_siblings(&text))
}

/// Configuration lines whose texts are all distinct
pub(crate) fn distinct_config_lines() -> impl Strategy<Value = Vec<(usize, String)>> {
    proptest::collection::vec(0usize..4, 1..24).prop_map(|requests| {
        valid_depths(&requests)
            .into_iter()
            .enumerate()
            .map(|(index, depth)| (depth, format!("line {index}")))
            .collect()
    })
}

/// Removes every line whose mask bit is false, together with its nested lines
pub(crate) fn drop_lines(lines: &[(usize, String)], mask: &[bool]) -> Vec<(usize, String)> {
    let mut kept = Vec::new();
    let mut dropping_below: Option<usize> = None;

    for (index, (depth, text)) in lines.iter().enumerate() {
        if let Some(dropped_depth) = dropping_below {
            if *depth > dropped_depth {
                continue;
            }
            dropping_below = None;
        }

        if mask.get(index).copied().unwrap_or(true) {
            kept.push((*depth, text.clone()));
        } else {
            dropping_below = Some(*depth);
        }
    }

    kept
}

fn dedupe_siblings(text: &str) -> String {
    let tree = SectionTree::parse(text).expect("generated text is well formed");
    let mut lines = Vec::new();
    let mut stack = vec![ROOT];

    while let Some(id) = stack.pop() {
        let mut seen = Vec::new();
        let mut unique: Vec<SectionId> = Vec::new();

        for child in tree.children(id) {
            let text = tree.section(*child).text();
            if !seen.contains(&text) {
                seen.push(text);
                unique.push(*child);
            }
        }

        if id != ROOT {
            let section = tree.section(id);
            lines.push((section.depth(), section.text().to_string()));
        }
        stack.extend(unique.into_iter().rev());
    }

    render_lines(&lines)
}

/// Root-to-node text paths of every section
pub(crate) fn paths(tree: &SectionTree) -> Vec<Vec<String>> {
    tree.descendants()
        .map(|id| {
            let mut path = tree
                .ancestors(id)
                .into_iter()
                .rev()
                .map(|ancestor| tree.section(ancestor).text().to_string())
                .collect::<Vec<_>>();
            path.push(tree.section(id).text().to_string());
            path
        })
        .collect()
}

#[test]
fn drop_lines_removes_nested_lines() {
    let lines = vec![
        (1, "a".to_string()),
        (2, "a1".to_string()),
        (3, "a11".to_string()),
        (2, "a2".to_string()),
        (1, "b".to_string()),
    ];

    let kept = drop_lines(&lines, &[true, false, true, true, true]);

    assert_eq!(
        kept,
        vec![(1, "a".to_string()), (2, "a2".to_string()), (1, "b".to_string())]
    );
}

#[test]
fn dedupe_keeps_first_sibling_occurrence() {
    assert_eq!(
        dedupe_siblings("a\n x\n x\n  y\nb\na\n"),
        "a\n x\nb\n".to_string()
    );
}
