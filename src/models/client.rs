// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side enrollment payloads and the trainer's roster view.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Intake form a client submits when enrolling with a trainer.
///
/// `client_id` is filled in from the active session by
/// `ClientService::register_with_trainer`; callers leave it `None`.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrainerEnrollment {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 10, message = "contact number must be at least 10 digits"))]
    pub contact_number: String,
    /// Body weight in kilograms
    #[validate(range(exclusive_min = 0.0, message = "weight must be positive"))]
    pub weight: f64,
    /// Height in centimeters
    #[validate(range(exclusive_min = 0.0, message = "height must be positive"))]
    pub height: f64,
    #[validate(length(min = 1, message = "gender is required"))]
    pub gender: String,
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: u32,
    /// Account ID of the enrolling client, derived from the session token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl TrainerEnrollment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        contact_number: impl Into<String>,
        weight: f64,
        height: f64,
        gender: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
            contact_number: contact_number.into(),
            weight,
            height,
            gender: gender.into(),
            age,
            client_id: None,
        }
    }
}

/// One client row in a trainer's roster.
///
/// The backend omits fields a client never filled in, so everything is
/// optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_age: Option<u32>,
    pub client_gender: Option<String>,
    /// Body weight in kilograms
    pub client_weight: Option<f64>,
    pub client_contact_number: Option<String>,
    pub client_address: Option<String>,
}
