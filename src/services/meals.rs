// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal-plan API.
//!
//! The nutrition service is deployed separately in some environments, so
//! this service gets its own `ApiClient` bound to `meals_api_url`.

use crate::error::{AppError, Result};
use crate::models::MealPlan;
use crate::services::ApiClient;
use crate::session::Session;

/// API surface for meal plans.
#[derive(Clone)]
pub struct MealService {
    api: ApiClient,
    session: Session,
}

impl MealService {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self { api, session }
    }

    /// Meal plans assigned to the signed-in client.
    pub async fn meal_plans(&self) -> Result<Vec<MealPlan>> {
        let client_id = self
            .session
            .account_id()
            .await
            .ok_or(AppError::Unauthorized)?;

        self.meal_plans_for(&client_id).await
    }

    /// Meal plans for a specific client (trainer and admin views).
    pub async fn meal_plans_for(&self, client_id: &str) -> Result<Vec<MealPlan>> {
        self.api
            .get_json(&format!("/api/meals/getMealPlansById/{}", client_id), &[])
            .await
    }
}
