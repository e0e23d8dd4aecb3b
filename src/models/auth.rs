// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication request/response payloads.

use crate::models::Role;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials posted to `/api/auth/login`.
///
/// FitLink accounts use the email address as the username.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Payload posted to `/api/auth/register`.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,
    /// Email address (doubles as the account username)
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub confirm_password: String,
    /// Role requested for the new account
    pub app_user_role: Role,
    /// Login name; mirrors `email`
    pub username: String,
}

impl RegisterRequest {
    /// Build a registration for a new client account.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        let email = email.into();
        Self {
            name: name.into(),
            username: email.clone(),
            email,
            password: password.into(),
            confirm_password: confirm_password.into(),
            app_user_role: Role::Client,
        }
    }

    /// Request a different role for the account.
    pub fn with_role(mut self, role: Role) -> Self {
        self.app_user_role = role;
        self
    }
}

/// Response body from the auth endpoints.
///
/// Only `accessToken` matters to the client core; whatever else the
/// backend includes is kept for callers that want it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token, absent when the server declined to issue one
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Remaining response fields (shape varies by deployment)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Coarse password strength buckets for the registration form meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Empty,
    TooShort,
    Weak,
    Good,
    Strong,
}

/// Classify a candidate password for the strength meter.
///
/// Anything under 6 characters is rejected by validation outright; 8+
/// characters with mixed case and a digit rates `Strong`.
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::Empty;
    }
    if password.len() < 6 {
        return PasswordStrength::TooShort;
    }
    if password.len() < 8 {
        return PasswordStrength::Weak;
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_lower && has_upper && has_digit {
        PasswordStrength::Strong
    } else {
        PasswordStrength::Good
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_strength_buckets() {
        assert_eq!(password_strength(""), PasswordStrength::Empty);
        assert_eq!(password_strength("abc"), PasswordStrength::TooShort);
        assert_eq!(password_strength("abcdef"), PasswordStrength::Weak);
        assert_eq!(password_strength("abcdefgh"), PasswordStrength::Good);
        assert_eq!(password_strength("Abcdefg1"), PasswordStrength::Strong);
        assert_eq!(password_strength("ABCDEFG1"), PasswordStrength::Good);
    }

    #[test]
    fn test_register_request_wire_shape() {
        let request = RegisterRequest::new("Jane Doe", "jane@example.com", "secret1", "secret1")
            .with_role(Role::Trainer);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["username"], "jane@example.com");
        assert_eq!(json["confirmPassword"], "secret1");
        assert_eq!(json["appUserRole"], "TRAINER");
    }

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest::new("Jane", "jane@example.com", "secret1", "secret1");
        assert!(ok.validate().is_ok());

        let short_password = RegisterRequest::new("Jane", "jane@example.com", "abc", "abc");
        assert!(short_password.validate().is_err());

        let mismatch = RegisterRequest::new("Jane", "jane@example.com", "secret1", "secret2");
        assert!(mismatch.validate().is_err());

        let bad_email = RegisterRequest::new("Jane", "not-an-email", "secret1", "secret1");
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_auth_response_tolerates_extra_fields() {
        let body = serde_json::json!({
            "accessToken": "abc.def.ghi",
            "tokenType": "Bearer",
            "issuedAt": 1700000000
        });
        let response: AuthResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.access_token.as_deref(), Some("abc.def.ghi"));
        assert_eq!(response.extra["tokenType"], "Bearer");

        let empty: AuthResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.access_token.is_none());
    }
}
