// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trainer directory entries.

use crate::models::Role;
use serde::{Deserialize, Serialize};

/// Trainer row returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerSummary {
    /// Server-side account ID
    pub id: u64,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Always `Trainer` in practice; kept explicit because the endpoint
    /// echoes the account role
    #[serde(rename = "appUserRole")]
    pub role: Role,
}
