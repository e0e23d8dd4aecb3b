// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FitLink client core: auth, session, and resource access for the
//! FitLink coaching apps.
//!
//! This crate is the service layer the mobile shells embed. It signs
//! accounts in, keeps the bearer token on disk, decodes the token's
//! claims to pick the dashboard to land on, and wraps the resource
//! endpoints (trainer search, enrollment, meal plans, client rosters).

pub mod config;
pub mod error;
pub mod models;
pub mod routing;
pub mod services;
pub mod session;

use config::Config;
use error::Result;
use routing::Navigator;
use services::{ApiClient, AuthService, ClientService, MealService, TrainerService};
use session::{Session, TokenStore};
use std::sync::Arc;

/// Assembled client: one shared session plus every service wired to it.
pub struct FitLinkClient {
    pub config: Config,
    pub session: Session,
    pub auth: AuthService,
    pub clients: ClientService,
    pub trainer: TrainerService,
    pub meals: MealService,
}

impl FitLinkClient {
    /// Boot the client core at app launch: restore any persisted session
    /// and wire every service to it.
    pub async fn launch(config: Config) -> Result<Self> {
        let store = TokenStore::new(config.token_path.clone());
        let session = Session::launch(store).await?;
        Self::with_session(config, session)
    }

    /// Assemble the client around an existing session context.
    pub fn with_session(config: Config, session: Session) -> Result<Self> {
        let timeout = config.request_timeout();
        let api = ApiClient::new(&config.api_url, timeout, session.clone())?;
        let meals_api = ApiClient::new(&config.meals_api_url, timeout, session.clone())?;

        Ok(Self {
            auth: AuthService::new(api.clone(), session.clone()),
            clients: ClientService::new(api.clone(), session.clone()),
            trainer: TrainerService::new(api, session.clone()),
            meals: MealService::new(meals_api, session.clone()),
            session,
            config,
        })
    }

    /// Attach the navigation hook auth flows dispatch landing screens to.
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.auth = self.auth.with_navigator(navigator);
        self
    }
}
