//! Text rendering of aligned trees
//!
//! Every visible node becomes `prefix + indentation + text`, one physical
//! line per embedded line, with the prefix picked by the node's membership.

use crate::artifacts::diff::aligned_tree::AlignedTree;
use crate::artifacts::diff::membership::Membership;
use colored::{Color, Colorize};
use derive_new::new;

/// Marker written before a line and the color the whole line takes
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LinePrefix {
    marker: &'static str,
    color: Option<Color>,
}

/// Prefixes for second-only (`add`), first-only (`remove`) and common lines,
/// plus a marker written once after the last line
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LinePrefixes {
    add: LinePrefix,
    remove: LinePrefix,
    common: LinePrefix,
    done: &'static str,
}

impl LinePrefixes {
    /// `> ` for lines of the second file, `< ` for lines of the first
    pub fn diff() -> Self {
        LinePrefixes::new(
            LinePrefix::new("> ", Some(Color::Green)),
            LinePrefix::new("< ", Some(Color::Red)),
            LinePrefix::new("  ", None),
            "",
        )
    }

    /// Unique lines of the first file read as `+ `
    pub fn unique_to_first() -> Self {
        LinePrefixes::new(
            LinePrefix::new("- ", Some(Color::Red)),
            LinePrefix::new("+ ", Some(Color::Green)),
            LinePrefix::new("  ", None),
            "",
        )
    }

    /// Unique lines of the second file read as `+ `
    pub fn unique_to_second() -> Self {
        LinePrefixes::new(
            LinePrefix::new("+ ", Some(Color::Green)),
            LinePrefix::new("- ", Some(Color::Red)),
            LinePrefix::new("  ", None),
            "",
        )
    }

    /// Same colors, no markers
    pub fn without_markers(&self) -> Self {
        let strip = |prefix: &LinePrefix| LinePrefix::new("", prefix.color);

        LinePrefixes::new(
            strip(&self.add),
            strip(&self.remove),
            strip(&self.common),
            self.done,
        )
    }

    fn for_membership(&self, membership: Membership) -> &LinePrefix {
        if membership.is_both() {
            &self.common
        } else if membership.contains(Membership::FIRST) {
            &self.remove
        } else {
            &self.add
        }
    }
}

#[derive(Debug, Clone, new)]
pub struct Renderer<'p> {
    prefixes: &'p LinePrefixes,
    color: bool,
}

impl Renderer<'_> {
    pub fn render(&self, tree: &AlignedTree) -> String {
        let section = tree.section();
        let mut output = String::new();

        for id in section.descendants() {
            let node = section.section(id);
            let prefix = self.prefixes.for_membership(tree.membership(id));

            for line in node.lines() {
                let rendered = format!(
                    "{}{:indent$}{}",
                    prefix.marker,
                    "",
                    line,
                    indent = node.depth() - 1
                );

                match prefix.color {
                    Some(color) if self.color => {
                        output.push_str(&rendered.color(color).to_string());
                    }
                    _ => output.push_str(&rendered),
                }
                output.push('\n');
            }
        }

        output.push_str(self.prefixes.done);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn address_change() -> AlignedTree {
        compare(
            "interface Gi0/1\n ip address 10.0.0.1 255.255.255.0\n",
            "interface Gi0/1\n ip address 10.0.0.2 255.255.255.0\n",
        )
        .unwrap()
    }

    #[rstest]
    fn diff_prefixes_by_side(address_change: AlignedTree) {
        let prefixes = LinePrefixes::diff();
        let output = Renderer::new(&prefixes, false).render(&address_change);

        assert_eq!(
            output,
            "  interface Gi0/1\n<  ip address 10.0.0.1 255.255.255.0\n>  ip address 10.0.0.2 255.255.255.0\n"
        );
    }

    #[rstest]
    fn unique_prefixes_mark_own_lines_with_plus(address_change: AlignedTree) {
        let first = LinePrefixes::unique_to_first();
        let second = LinePrefixes::unique_to_second();

        assert_eq!(
            Renderer::new(&first, false).render(&address_change),
            "  interface Gi0/1\n+  ip address 10.0.0.1 255.255.255.0\n-  ip address 10.0.0.2 255.255.255.0\n"
        );
        assert_eq!(
            Renderer::new(&second, false).render(&address_change),
            "  interface Gi0/1\n-  ip address 10.0.0.1 255.255.255.0\n+  ip address 10.0.0.2 255.255.255.0\n"
        );
    }

    #[rstest]
    fn without_markers_is_plain_configuration(address_change: AlignedTree) {
        let prefixes = LinePrefixes::diff().without_markers();

        assert_eq!(
            Renderer::new(&prefixes, false).render(&address_change),
            address_change.section().to_string()
        );
    }

    #[test]
    fn verbatim_lines_share_prefix() {
        let aligned = compare("", "banner motd ^C\nline one\n  line two\n^C\n").unwrap();
        let prefixes = LinePrefixes::diff();

        assert_eq!(
            Renderer::new(&prefixes, false).render(&aligned),
            "> banner motd ^C\n> line one\n>   line two\n> ^C\n"
        );
    }

    #[test]
    fn done_marker_closes_output() {
        let aligned = compare("hostname r1\n", "hostname r1\n").unwrap();
        let prefixes = LinePrefixes::new(
            LinePrefix::new("+", None),
            LinePrefix::new("-", None),
            LinePrefix::new("=", None),
            "end\n",
        );

        assert_eq!(
            Renderer::new(&prefixes, false).render(&aligned),
            "=hostname r1\nend\n"
        );
    }

    #[rstest]
    fn color_wraps_one_sided_lines(address_change: AlignedTree) {
        colored::control::set_override(true);
        let prefixes = LinePrefixes::diff();
        let output = Renderer::new(&prefixes, true).render(&address_change);
        colored::control::unset_override();

        assert_eq!(
            output,
            "  interface Gi0/1\n\u{1b}[31m<  ip address 10.0.0.1 255.255.255.0\u{1b}[0m\n\u{1b}[32m>  ip address 10.0.0.2 255.255.255.0\u{1b}[0m\n"
        );
    }
}
