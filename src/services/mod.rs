// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API access layer.

pub mod api;
pub mod auth;
pub mod clients;
pub mod meals;
pub mod trainer;

pub use api::ApiClient;
pub use auth::{AuthService, AuthSuccess};
pub use clients::ClientService;
pub use meals::MealService;
pub use trainer::TrainerService;
