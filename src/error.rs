// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent classification.
//!
//! Every fallible operation in the crate returns [`AppError`], so callers
//! can tell a transport failure from a server rejection from a local
//! validation problem without string matching.

/// Application error type covering the whole client surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Unrecognized account role: {0}")]
    UnknownRole(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True when the server rejected our credentials and a fresh sign-in
    /// is the only way forward.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            AppError::Unauthorized | AppError::Api { status: 401 | 403, .. }
        )
    }

    /// HTTP status of a server rejection, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
