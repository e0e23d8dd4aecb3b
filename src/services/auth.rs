// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login and registration flows.
//!
//! Both flows share one tail: persist the issued token, decode who the
//! token says we are, and dispatch the role's landing screen through the
//! navigator. A response without a token short-circuits before any of
//! that, leaving the session untouched.

use crate::error::Result;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::routing::{self, Destination, Navigator};
use crate::services::ApiClient;
use crate::session::{decode_claims, Identity, Session};
use std::sync::Arc;
use validator::Validate;

/// Outcome of a successful login or registration.
#[derive(Debug, Clone)]
pub struct AuthSuccess {
    /// Raw response body from the auth endpoint
    pub response: AuthResponse,
    /// Claims decoded from the issued token, when one was issued and
    /// decodable
    pub identity: Option<Identity>,
    /// Landing screen dispatched to the navigator, if any
    pub destination: Option<Destination>,
}

impl AuthSuccess {
    /// True when the server issued a bearer token and the session now
    /// holds it.
    pub fn signed_in(&self) -> bool {
        self.response.access_token.is_some()
    }
}

/// Gateway for the auth endpoints.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    session: Session,
    navigator: Option<Arc<dyn Navigator>>,
}

impl AuthService {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self {
            api,
            session,
            navigator: None,
        }
    }

    /// Attach the navigation hook that receives landing dispatches.
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Log in with username (email) and password.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSuccess> {
        let response: AuthResponse = self.api.post_json("/api/auth/login", request).await?;
        self.complete("login", response).await
    }

    /// Register a new account.
    ///
    /// The backend issues a token straight from registration, so a
    /// successful register behaves exactly like a login.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSuccess> {
        request.validate()?;
        let response: AuthResponse = self.api.post_json("/api/auth/register", request).await?;
        self.complete("register", response).await
    }

    /// Sign out: drop the persisted token.
    pub async fn logout(&self) -> Result<()> {
        self.session.clear().await
    }

    /// Shared tail of both auth flows.
    async fn complete(&self, flow: &'static str, response: AuthResponse) -> Result<AuthSuccess> {
        let Some(token) = response.access_token.clone() else {
            tracing::warn!(flow, "Auth response carried no access token");
            return Ok(AuthSuccess {
                response,
                identity: None,
                destination: None,
            });
        };

        self.session.establish(&token).await?;

        let identity = decode_claims(&token);
        if identity.is_none() {
            tracing::warn!(flow, "Issued token is not decodable; signed in without claims");
        }

        let destination = match &identity {
            Some(identity) => routing::landing_destination(identity).map_err(|e| {
                tracing::warn!(flow, error = %e, "Refusing navigation for unrecognized role");
                e
            })?,
            None => None,
        };

        if let Some(destination) = destination {
            if let Some(navigator) = &self.navigator {
                navigator.navigate(destination);
            }
            tracing::info!(flow, screen = destination.path(), "Auth flow complete");
        } else {
            tracing::info!(flow, "Auth flow complete; no landing screen");
        }

        Ok(AuthSuccess {
            response,
            identity,
            destination,
        })
    }
}
