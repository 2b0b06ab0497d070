//! Flat-file persistence for the collection document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt};

const EMPTY_COLLECTION: &str = "[]";

/// Errors that can occur while interacting with the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{}` does not contain valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode document for `{}`: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_owned(),
            source,
        }
    }

    fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.to_owned(),
            source,
        }
    }

    fn encode(path: &Path, source: serde_json::Error) -> Self {
        Self::Encode {
            path: path.to_owned(),
            source,
        }
    }

    fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_owned(),
            source,
        }
    }
}

/// Result of ensuring the backing document exists at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// No document was present; one was created holding an empty collection.
    Created,
    /// A document was already present and was left untouched.
    Existing,
}

/// Filesystem-backed store holding one JSON document.
///
/// The store is deliberately shape-agnostic: it hands back whatever JSON the
/// file parses to and persists whatever JSON it is given. Concurrent writers
/// are not coordinated; the last write wins wholesale.
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Create a store over the given document path. No filesystem access
    /// happens until [`DocumentStore::ensure_exists`] or an operation runs.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the backing document exists, initialising a missing one to
    /// an empty collection. Existing content is never modified.
    pub async fn ensure_exists(&self) -> Result<InitOutcome, StoreError> {
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(mut file) => {
                file.write_all(EMPTY_COLLECTION.as_bytes())
                    .await
                    .map_err(|err| StoreError::write(&self.path, err))?;
                file.flush()
                    .await
                    .map_err(|err| StoreError::write(&self.path, err))?;
                Ok(InitOutcome::Created)
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(InitOutcome::Existing),
            Err(err) => Err(StoreError::write(&self.path, err)),
        }
    }

    /// Read and parse the whole document.
    pub async fn load(&self) -> Result<Value, StoreError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|err| StoreError::read(&self.path, err))?;
        serde_json::from_slice(&bytes).map_err(|err| StoreError::parse(&self.path, err))
    }

    /// Replace the whole document with `document`, pretty-printed so the file
    /// stays readable when opened by hand.
    pub async fn replace(&self, document: &Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|err| StoreError::encode(&self.path, err))?;
        fs::write(&self.path, bytes)
            .await
            .map_err(|err| StoreError::write(&self.path, err))
    }
}
