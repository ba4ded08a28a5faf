use crate::artifacts::section::section_tree::SectionTree;
use crate::errors::InputError;
use anyhow::Context;
use std::path::{Path, PathBuf};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Resolves input paths against a base directory and reads them as text
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn resolve(&self, file: &Path) -> PathBuf {
        self.path.join(file)
    }

    /// Reads and parses a configuration file
    pub fn parse_config(&self, file: &Path) -> anyhow::Result<SectionTree> {
        let text = self.read_config(file)?;

        SectionTree::parse(&text).with_context(|| format!("failed to parse {}", file.display()))
    }

    /// Reads a whole configuration file; a leading byte order mark is dropped
    pub fn read_config(&self, file: &Path) -> Result<String, InputError> {
        let path = self.resolve(file);

        match std::fs::read_to_string(&path) {
            Ok(text) => match text.strip_prefix(BYTE_ORDER_MARK) {
                Some(stripped) => Ok(stripped.to_string()),
                None => Ok(text),
            },
            Err(source) => Err(InputError { path, source }),
        }
    }
}
