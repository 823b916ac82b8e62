//! Persisted language preference.
//!
//! One key, one value: the language code the visitor last resolved to,
//! stored under `site_active_lang` and carried across page loads. The
//! resolver is the only reader and writer of this key.
//!
//! Store failures never fail a resolution pass: the resolver logs them and
//! carries on as if no value were stored.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key the preference is stored under.
pub const PREFERENCE_KEY: &str = "site_active_lang";

/// Errors a store adapter can surface.
///
/// Callers are expected to degrade on every variant: a failing store means
/// "no stored preference", never a failed pass.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read preference store: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write preference store: {0}")]
    Write(#[source] io::Error),

    #[error("preference store is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Key-value access to the persisted language preference.
pub trait PreferenceStore {
    /// The stored language, if any.
    fn get(&self) -> Result<Option<String>, StoreError>;

    /// Persist a language as the stored preference.
    fn set(&mut self, language: &str) -> Result<(), StoreError>;

    /// Clear the stored preference.
    fn remove(&mut self) -> Result<(), StoreError>;
}

/// On-disk file format: a single small JSON object.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    site_active_lang: Option<String>,
}

/// File-backed store: one JSON object in a host-configured location.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<StoreFile, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(StoreFile::default()),
            Err(e) => Err(StoreError::Read(e)),
        }
    }

    fn persist(&self, contents: &StoreFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StoreError::Write)?;
            }
        }

        let json = serde_json::to_string_pretty(contents)?;
        fs::write(&self.path, json).map_err(StoreError::Write)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.site_active_lang)
    }

    fn set(&mut self, language: &str) -> Result<(), StoreError> {
        // A corrupt store file is replaced wholesale on the next write.
        let mut contents = self.load().unwrap_or_default();
        contents.site_active_lang = Some(language.to_string());
        self.persist(&contents)
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Ok(());
        }

        let mut contents = self.load().unwrap_or_default();
        contents.site_active_lang = None;
        self.persist(&contents)
    }
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_value(language: impl Into<String>) -> Self {
        Self {
            value: Some(language.into()),
        }
    }

    /// The stored value, bypassing the trait's `Result` wrapping.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value.clone())
    }

    fn set(&mut self, language: &str) -> Result<(), StoreError> {
        self.value = Some(language.to_string());
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        self.value = None;
        Ok(())
    }
}
