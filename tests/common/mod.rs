// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for the integration suites.

use fitlink_client::config::Config;
use fitlink_client::routing::{Destination, Navigator};
use fitlink_client::session::{Session, TokenStore};
use fitlink_client::FitLinkClient;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Forge a signed token with arbitrary claims.
///
/// The signing key is irrelevant: the client decodes payloads without
/// verifying signatures.
#[allow(dead_code)]
pub fn forge_token(claims: &serde_json::Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(b"test-signing-key"),
    )
    .expect("Failed to encode test token")
}

/// Forge a token for an account with the given ID and role.
#[allow(dead_code)]
pub fn forge_role_token(id: &str, role: &str) -> String {
    forge_token(&serde_json::json!({
        "id": id,
        "role": role,
        "name": "Test Account",
        "sub": "test@example.com",
    }))
}

/// Token store in a throwaway directory.
///
/// Keep the `TempDir` alive for the duration of the test.
#[allow(dead_code)]
pub fn temp_store() -> (TempDir, TokenStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = TokenStore::new(dir.path().join("accessToken"));
    (dir, store)
}

/// Fresh session backed by a throwaway store.
#[allow(dead_code)]
pub async fn temp_session() -> (TempDir, Session) {
    let (dir, store) = temp_store();
    let session = Session::launch(store)
        .await
        .expect("Failed to open session");
    (dir, session)
}

/// Config pointing both API bases at the same mock server, with the
/// token stored under the given temp dir.
#[allow(dead_code)]
pub fn test_config(api_url: &str, dir: &TempDir) -> Config {
    Config {
        api_url: api_url.to_string(),
        meals_api_url: api_url.to_string(),
        token_path: dir.path().join("accessToken"),
        http_timeout_secs: 5,
    }
}

/// Assembled client against a mock server, with a recording navigator
/// attached.
#[allow(dead_code)]
pub async fn test_client(api_url: &str) -> (TempDir, FitLinkClient, Arc<RecordingNavigator>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let navigator = RecordingNavigator::new();
    let client = FitLinkClient::launch(test_config(api_url, &dir))
        .await
        .expect("Failed to launch client")
        .with_navigator(navigator.clone());
    (dir, client, navigator)
}

/// Navigator that records every dispatch instead of rendering anything.
pub struct RecordingNavigator {
    dispatches: Mutex<Vec<Destination>>,
}

impl RecordingNavigator {
    #[allow(dead_code)]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            dispatches: Mutex::new(Vec::new()),
        })
    }

    /// Destinations dispatched so far, in order.
    #[allow(dead_code)]
    pub fn dispatched(&self) -> Vec<Destination> {
        self.dispatches.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: Destination) {
        self.dispatches.lock().unwrap().push(destination);
    }
}
