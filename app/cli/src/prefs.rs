//! Persisted settings store at `~/.config/lantern/cli.toml`.
//!
//! The file is re-read on every access, so a change made by a second
//! invocation is visible immediately; writes are last-write-wins
//! single-key updates. Store operations never fail from the caller's
//! point of view — unreadable or malformed state degrades to an empty
//! table with a warning.

use lantern::Store;
use std::path::PathBuf;

/// TOML file-backed key-value store.
#[derive(Debug, Clone)]
pub struct TomlStore {
    path: PathBuf,
}

impl TomlStore {
    /// Open the store at the default path.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// Open the store at an explicit path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default path: `~/.config/lantern/cli.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("lantern")
            .join("cli.toml")
    }

    fn table(&self) -> toml::Table {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return toml::Table::new();
        };
        contents.parse().unwrap_or_else(|err| {
            tracing::warn!("ignoring malformed {}: {err}", self.path.display());
            toml::Table::new()
        })
    }
}

impl Store for TomlStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.table().get(key)? {
            toml::Value::String(value) => Some(value.clone()),
            // Hand-edited scalars still read back; coercion is the
            // reader's job.
            toml::Value::Integer(value) => Some(value.to_string()),
            toml::Value::Float(value) => Some(value.to_string()),
            toml::Value::Boolean(value) => Some(value.to_string()),
            _ => None,
        }
    }

    fn update(&self, key: &str, value: &str) {
        let mut table = self.table();
        table.insert(key.to_owned(), toml::Value::String(value.to_owned()));

        if let Some(parent) = self.path.parent()
            && let Err(err) = std::fs::create_dir_all(parent)
        {
            tracing::warn!("creating {}: {err}", parent.display());
            return;
        }
        if let Err(err) = std::fs::write(&self.path, table.to_string()) {
            tracing::warn!("writing {}: {err}", self.path.display());
        }
    }
}
