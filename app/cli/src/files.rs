//! File materialization into the working directory.

use anyhow::{Context, Result};
use lantern::FileSink;
use std::path::PathBuf;

/// Writes materialized responses as `new{stem}.{extension}` under a
/// root directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// A workspace rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// A workspace rooted at the current working directory.
    pub fn current() -> Self {
        Self::new(".")
    }
}

impl FileSink for Workspace {
    fn write_new(&self, content: &str, extension: &str, stem: &str) -> Result<String> {
        let name = format!("new{stem}.{}", extension.replace('.', ""));
        let path = self.root.join(&name);
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(name)
    }
}
