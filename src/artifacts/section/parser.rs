use crate::artifacts::section::section_tree::{ROOT, SectionId, SectionTree};
use crate::artifacts::section::{BANNER_KINDS, BANNER_REGEX, CONTROL_C_DELIMITER};
use crate::debug_log;
use crate::errors::ParseError;
use anyhow::Context;
use regex::Regex;

/// Builds a [`SectionTree`] out of indentation-structured text
///
/// One leading space is one nesting level. Unindented `banner` lines open a
/// verbatim block that swallows raw lines up to the closing delimiter.
#[derive(Debug, Clone)]
pub struct SectionParser {
    banner: Regex,
}

/// Where a verbatim block stops
#[derive(Debug, Clone, PartialEq, Eq)]
struct VerbatimStart {
    delimiter: String,
    closed_on_first_line: bool,
}

impl SectionParser {
    pub fn try_new() -> anyhow::Result<Self> {
        let banner = Regex::new(BANNER_REGEX)
            .with_context(|| format!("invalid banner regex: {BANNER_REGEX}"))?;

        Ok(SectionParser { banner })
    }

    pub fn parse(&self, text: &str) -> Result<SectionTree, ParseError> {
        let mut tree = SectionTree::new();
        // one open section per depth, the root sits at depth 0
        let mut open: Vec<SectionId> = vec![ROOT];
        let mut lines = text.lines().enumerate();

        while let Some((index, line)) = lines.next() {
            let line_number = index + 1;

            if line.trim().is_empty() {
                continue;
            }

            if let Some(start) = self.verbatim_start(line) {
                let block = Self::read_verbatim(line, line_number, &start, &mut lines)?;
                debug_log!(
                    "verbatim block at line {} spans {} lines",
                    line_number,
                    block.lines().count()
                );

                open.truncate(1);
                let id = tree.push_child(ROOT, block);
                open.push(id);
                continue;
            }

            let content = line.trim_start_matches(' ');
            let depth = line.len() - content.len() + 1;

            // the stack holds consecutive depths 0..open.len(), so the parent
            // of a section at `depth` is the entry at index `depth - 1`
            if depth > open.len() {
                return Err(ParseError::IndentationSkip {
                    line: line_number,
                    depth,
                    parent_depth: open.len() - 1,
                    content: line.to_string(),
                });
            }

            open.truncate(depth);
            let parent = open[depth - 1];
            let id = tree.push_child(parent, content);
            open.push(id);
        }

        Ok(tree)
    }

    fn verbatim_start(&self, line: &str) -> Option<VerbatimStart> {
        let captures = self.banner.captures(line)?;
        let kind = captures.name("kind")?.as_str();

        if !BANNER_KINDS.contains(kind) {
            return None;
        }

        let body = captures.name("body")?.as_str();
        let delimiter = if body.starts_with(CONTROL_C_DELIMITER) {
            CONTROL_C_DELIMITER.to_string()
        } else {
            body.chars().next()?.to_string()
        };
        let closed_on_first_line = body[delimiter.len()..].contains(&delimiter);

        Some(VerbatimStart {
            delimiter,
            closed_on_first_line,
        })
    }

    fn read_verbatim<'l>(
        first_line: &str,
        line_number: usize,
        start: &VerbatimStart,
        lines: &mut impl Iterator<Item = (usize, &'l str)>,
    ) -> Result<String, ParseError> {
        let mut block = first_line.to_string();

        if start.closed_on_first_line {
            return Ok(block);
        }

        for (_, line) in lines.by_ref() {
            block.push('\n');
            block.push_str(line);

            if line.contains(&start.delimiter) {
                return Ok(block);
            }
        }

        Err(ParseError::UnterminatedVerbatim {
            line: line_number,
            delimiter: start.delimiter.clone(),
            content: first_line.to_string(),
        })
    }
}
