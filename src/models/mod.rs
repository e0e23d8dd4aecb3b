// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod auth;
pub mod client;
pub mod meal;
pub mod role;
pub mod trainer;

pub use auth::{password_strength, AuthResponse, LoginRequest, PasswordStrength, RegisterRequest};
pub use client::{ClientSummary, TrainerEnrollment};
pub use meal::{FoodItem, Meal, MealPlan};
pub use role::Role;
pub use trainer::TrainerSummary;
