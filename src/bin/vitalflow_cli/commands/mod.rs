// ABOUTME: Command modules for vitalflow-cli and the context they share
// ABOUTME: CliContext bundles the API client with the selected favorites store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

pub mod challenges;
pub mod favorites;
pub mod plan;
pub mod profile;
pub mod recipes;

use anyhow::Result;
use vitalflow::client::ApiClient;
use vitalflow::config::ClientConfig;
use vitalflow::favorites::{FavoritesStore, FileFavoritesStore, RemoteFavoritesStore};

/// Shared state for every command
pub struct CliContext {
    pub client: ApiClient,
    pub favorites: Box<dyn FavoritesStore>,
}

impl CliContext {
    pub fn new(config: ClientConfig, server_favorites: bool) -> Result<Self> {
        let client = ApiClient::new(&config)?;
        let favorites: Box<dyn FavoritesStore> = if server_favorites {
            client.require_token()?;
            Box::new(RemoteFavoritesStore::new(client.clone()))
        } else {
            Box::new(FileFavoritesStore::new(config.favorites_path))
        };
        Ok(Self { client, favorites })
    }
}
