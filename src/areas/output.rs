use crate::artifacts::core::PagerWriter;
use anyhow::Context;
use is_terminal::IsTerminal;
use minus::Pager;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where a command's rendered output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Pager,
    Stdout,
}

impl OutputTarget {
    /// Picks the target from the command line and the environment
    ///
    /// The pager is only used on an interactive stdout and can be turned off
    /// by setting `NO_PAGER`.
    pub fn detect(output_file: Option<&Path>) -> Self {
        Self::select(
            output_file,
            io::stdout().is_terminal(),
            std::env::var_os("NO_PAGER").is_some(),
        )
    }

    pub fn select(output_file: Option<&Path>, interactive: bool, pager_disabled: bool) -> Self {
        match output_file {
            Some(path) => OutputTarget::File(path.to_path_buf()),
            None if interactive && !pager_disabled => OutputTarget::Pager,
            None => OutputTarget::Stdout,
        }
    }

    /// Color is never written to files; on stdout it needs a terminal
    pub fn supports_color(&self) -> bool {
        match self {
            OutputTarget::File(_) => false,
            OutputTarget::Pager => true,
            OutputTarget::Stdout => io::stdout().is_terminal(),
        }
    }

    pub fn open(&self) -> anyhow::Result<Output> {
        match self {
            OutputTarget::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;

                Ok(Output::new(Box::new(BufWriter::new(file)), None))
            }
            OutputTarget::Pager => {
                let pager = Pager::new();

                Ok(Output::new(
                    Box::new(PagerWriter::new(pager.clone())),
                    Some(pager),
                ))
            }
            OutputTarget::Stdout => Ok(Output::new(Box::new(io::stdout()), None)),
        }
    }
}

/// An opened target: the writer commands print to, plus the pager to run
/// once everything has been written
pub struct Output {
    writer: Option<Box<dyn Write>>,
    pager: Option<Pager>,
}

impl Output {
    fn new(writer: Box<dyn Write>, pager: Option<Pager>) -> Self {
        Output {
            writer: Some(writer),
            pager,
        }
    }

    /// Hands out the writer; a second call gets a sink
    pub fn writer(&mut self) -> Box<dyn Write> {
        self.writer.take().unwrap_or_else(|| Box::new(io::sink()))
    }

    /// Shows the paged output, if any, and blocks until the user quits
    pub fn finish(self) -> anyhow::Result<()> {
        if let Some(pager) = self.pager {
            minus::page_all(pager).context("failed to run the pager")?;
        }

        Ok(())
    }
}
