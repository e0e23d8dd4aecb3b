// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state: the persisted bearer token and what it says about us.

pub mod claims;
pub mod store;

pub use claims::{decode_claims, Identity};
pub use store::TokenStore;

use crate::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared session context.
///
/// Cheap to clone; every service holds one and sees the same token.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    store: TokenStore,
    token: RwLock<Option<String>>,
}

impl Session {
    /// Open the session at app launch, restoring any persisted token.
    pub async fn launch(store: TokenStore) -> Result<Self> {
        let token = store.load().await?;
        if token.is_some() {
            tracing::info!("Restored persisted session token");
        }
        Ok(Self {
            inner: Arc::new(SessionInner {
                store,
                token: RwLock::new(token),
            }),
        })
    }

    /// Persist a fresh token and make it the active one.
    ///
    /// The write to disk happens first; the in-memory token only changes
    /// once persistence succeeded.
    pub async fn establish(&self, token: &str) -> Result<()> {
        self.inner.store.save(token).await?;
        *self.inner.token.write().await = Some(token.to_string());
        tracing::info!("Session established");
        Ok(())
    }

    /// Drop the active token from memory and disk.
    pub async fn clear(&self) -> Result<()> {
        self.inner.store.clear().await?;
        *self.inner.token.write().await = None;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// The active bearer token, if signed in.
    pub async fn token(&self) -> Option<String> {
        self.inner.token.read().await.clone()
    }

    /// Identity claims decoded from the active token.
    pub async fn identity(&self) -> Option<Identity> {
        let token = self.inner.token.read().await;
        token.as_deref().and_then(decode_claims)
    }

    /// Account ID claimed by the active token.
    pub async fn account_id(&self) -> Option<String> {
        self.identity().await.and_then(|identity| identity.id)
    }
}
