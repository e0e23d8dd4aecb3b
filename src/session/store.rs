// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed bearer token persistence.

use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};

/// Stores the single bearer token for this install.
///
/// One file, one token: a new login overwrites whatever was there.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the token lives on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the token, replacing any previous one.
    pub async fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Storage(format!("create {}: {}", parent.display(), e)))?;
        }
        tokio::fs::write(&self.path, token)
            .await
            .map_err(|e| AppError::Storage(format!("write {}: {}", self.path.display(), e)))?;
        tracing::debug!(path = %self.path.display(), "Token persisted");
        Ok(())
    }

    /// Load the persisted token, if any.
    ///
    /// A missing or empty file reads as no token.
    pub async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.is_empty() => Ok(None),
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Remove the persisted token. Succeeds when nothing was stored.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
