use crate::artifacts::section::parser::SectionParser;
use std::fmt;

/// Index of a section inside its owning [`SectionTree`]
pub type SectionId = usize;

/// The synthetic root always lives at index 0
pub const ROOT: SectionId = 0;

/// One configuration entry
///
/// `text` is normally a single line; verbatim blocks (banners) keep their whole
/// multi-line body here. `parent` is only used to walk upwards, the tree owns
/// every section through the `children` lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    text: String,
    depth: usize,
    parent: Option<SectionId>,
    children: Vec<SectionId>,
}

impl Section {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<SectionId> {
        self.parent
    }

    pub fn children(&self) -> &[SectionId] {
        &self.children
    }

    /// Physical lines of the entry (more than one for verbatim blocks)
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Arena holding a parsed configuration, rooted at a depth 0 section
#[derive(Debug, Clone)]
pub struct SectionTree {
    sections: Vec<Section>,
}

impl Default for SectionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTree {
    pub fn new() -> Self {
        SectionTree {
            sections: vec![Section {
                text: String::new(),
                depth: 0,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let parser = SectionParser::try_new()?;
        Ok(parser.parse(text)?)
    }

    pub fn root(&self) -> SectionId {
        ROOT
    }

    /// # Panics
    ///
    /// Panics when `id` was not produced by this tree.
    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id]
    }

    pub fn children(&self, id: SectionId) -> &[SectionId] {
        &self.sections[id].children
    }

    pub fn parent(&self, id: SectionId) -> Option<SectionId> {
        self.sections[id].parent
    }

    /// Number of sections, root excluded
    pub fn len(&self) -> usize {
        self.sections.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a new last child under `parent` and returns its id
    pub(crate) fn push_child(&mut self, parent: SectionId, text: impl Into<String>) -> SectionId {
        let id = self.sections.len();
        let depth = self.sections[parent].depth + 1;

        self.sections.push(Section {
            text: text.into(),
            depth,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.sections[parent].children.push(id);

        id
    }

    /// Preorder walk over every section except the root
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack = self.children(self.root()).to_vec();
        stack.reverse();

        Descendants { tree: self, stack }
    }

    /// Ids of `id`'s ancestors, nearest first, root excluded
    pub fn ancestors(&self, id: SectionId) -> Vec<SectionId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);

        while let Some(parent) = current
            && parent != ROOT
        {
            ancestors.push(parent);
            current = self.parent(parent);
        }

        ancestors
    }

    /// Preorder `(depth, text)` listing, the shape-and-content identity of the tree
    pub fn outline(&self) -> Vec<(usize, &str)> {
        self.descendants()
            .map(|id| {
                let section = self.section(id);
                (section.depth, section.text.as_str())
            })
            .collect()
    }
}

impl PartialEq for SectionTree {
    fn eq(&self, other: &Self) -> bool {
        self.outline() == other.outline()
    }
}

impl Eq for SectionTree {}

/// Raw rendering: indentation and text only, one physical line per embedded line
impl fmt::Display for SectionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.descendants() {
            let section = self.section(id);
            for line in section.lines() {
                writeln!(f, "{:indent$}{}", "", line, indent = section.depth - 1)?;
            }
        }

        Ok(())
    }
}

pub struct Descendants<'t> {
    tree: &'t SectionTree,
    stack: Vec<SectionId>,
}

impl Iterator for Descendants<'_> {
    type Item = SectionId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.children(id).iter().rev().copied());

        Some(id)
    }
}
