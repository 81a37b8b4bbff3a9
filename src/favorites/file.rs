// ABOUTME: File-backed favorites store persisting the id list as a JSON array
// ABOUTME: Missing or corrupt files load as an empty set; writes go through a temp file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};
use vitalflow_core::json;

use super::{FavoriteSet, FavoritesStore};
use crate::errors::{AppError, AppResult};

/// Favorites kept in a local JSON file
#[derive(Debug, Clone)]
pub struct FileFavoritesStore {
    path: PathBuf,
}

impl FileFavoritesStore {
    /// Store backed by `path`; the file and its directory are created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the favorites file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse stored bytes; anything other than an array of ids is treated as corrupt
fn parse_favorites(bytes: &[u8]) -> Option<FavoriteSet> {
    match serde_json::from_slice::<Value>(bytes).ok()? {
        Value::Array(items) => Some(items.iter().filter_map(json::id_string).collect()),
        _ => None,
    }
}

#[async_trait]
impl FavoritesStore for FileFavoritesStore {
    async fn load(&self) -> FavoriteSet {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No favorites file yet");
                return FavoriteSet::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Cannot read favorites file");
                return FavoriteSet::new();
            }
        };

        parse_favorites(&bytes).unwrap_or_else(|| {
            warn!(path = %self.path.display(), "Favorites file is corrupt, starting empty");
            FavoriteSet::new()
        })
    }

    async fn save(&self, favorites: &FavoriteSet) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!("Cannot create {}: {e}", parent.display())).with_source(e)
            })?;
        }

        let bytes = serde_json::to_vec(favorites)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), count = favorites.len(), "Saved favorites");
        Ok(())
    }
}
