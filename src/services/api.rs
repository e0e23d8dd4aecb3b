// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Low-level HTTP client for the FitLink API.
//!
//! Handles:
//! - URL construction against a configured base
//! - Bearer auth from the shared session
//! - Response classification (network vs. server vs. decode)

use crate::error::{AppError, Result};
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP client bound to one base URL and the shared session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client for the given base URL.
    ///
    /// Every request through this client carries the configured timeout;
    /// the mobile network is not allowed to hang a screen forever.
    pub fn new(base_url: &str, timeout: Duration, session: Session) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Generic GET request with JSON response.
    pub async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = self
            .authorize(request)
            .await
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// POST a JSON body and parse a JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .await
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// POST a JSON body where only success or failure matters.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<()> {
        let mut request = self.http.post(self.url(path)).json(body);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = self
            .authorize(request)
            .await
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the session's bearer token when one is active.
    async fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            return Ok(());
        }
        Err(self.api_error(response).await)
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            return Err(self.api_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Decode(format!("JSON parse error: {}", e)))
    }

    async fn api_error(&self, response: reqwest::Response) -> AppError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status, "FitLink API request rejected");
        AppError::Api { status, message }
    }
}
