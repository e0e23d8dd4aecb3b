// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trainer-side API: the client roster.

use crate::error::{AppError, Result};
use crate::models::ClientSummary;
use crate::services::ApiClient;
use crate::session::Session;

/// API surface for accounts with the TRAINER role.
#[derive(Clone)]
pub struct TrainerService {
    api: ApiClient,
    session: Session,
}

impl TrainerService {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self { api, session }
    }

    /// Fetch the roster of clients enrolled with the signed-in trainer.
    pub async fn client_details(&self) -> Result<Vec<ClientSummary>> {
        let trainer_id = self
            .session
            .account_id()
            .await
            .ok_or(AppError::Unauthorized)?;

        self.api
            .get_json(&format!("/api/trainer/getClientDetails/{}", trainer_id), &[])
            .await
    }
}
