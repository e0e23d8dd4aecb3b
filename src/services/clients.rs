// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side API: trainer discovery and enrollment.

use crate::error::{AppError, Result};
use crate::models::{TrainerEnrollment, TrainerSummary};
use crate::services::ApiClient;
use crate::session::Session;
use validator::Validate;

/// API surface for accounts with the CLIENT role.
#[derive(Clone)]
pub struct ClientService {
    api: ApiClient,
    session: Session,
}

impl ClientService {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self { api, session }
    }

    /// Search trainers by (partial) name.
    pub async fn search_trainers(&self, name: &str) -> Result<Vec<TrainerSummary>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "search name must not be empty".to_string(),
            ));
        }

        self.api
            .get_json("/api/clients/searchTrainers", &[("name", name)])
            .await
    }

    /// Enroll the signed-in client with a trainer.
    ///
    /// The enrollment's `client_id` is overwritten with the account ID
    /// from the session token; an unauthenticated session cannot enroll.
    pub async fn register_with_trainer(
        &self,
        trainer_id: u64,
        enrollment: &TrainerEnrollment,
    ) -> Result<()> {
        enrollment.validate()?;

        let client_id = self
            .session
            .account_id()
            .await
            .ok_or(AppError::Unauthorized)?;

        let mut payload = enrollment.clone();
        payload.client_id = Some(client_id);

        let trainer_id = trainer_id.to_string();
        self.api
            .post(
                "/api/clients/registerTrainer",
                &[("trainerId", trainer_id.as_str())],
                &payload,
            )
            .await?;

        tracing::info!(trainer_id = %trainer_id, "Registered with trainer");
        Ok(())
    }
}
