// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer token claims decoding.
//!
//! The client treats the token as an opaque credential minted by a server
//! it already trusts over TLS: the payload is decoded for display and
//! routing with no signature verification and no expiry enforcement.
//! Nothing security-relevant may branch on these claims.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// Who the stored token says we are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Account ID (`id` claim), normalized to a string
    pub id: Option<String>,
    /// Raw role claim; resolve via [`crate::routing::destination_for`]
    pub role: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Email address (`sub` claim)
    pub email: Option<String>,
}

/// Claims layout the FitLink backend mints. Every field is optional so a
/// thin token still decodes.
#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[serde(default, deserialize_with = "string_or_number")]
    id: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    sub: Option<String>,
}

/// The backend has emitted `id` both as a JSON number and as a string
/// across versions; accept either.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

/// Decode the payload of a bearer token without verifying it.
///
/// Returns `None` for anything that is not a well-formed JWT; a broken
/// token reads the same as no token at all.
pub fn decode_claims(token: &str) -> Option<Identity> {
    if token.is_empty() {
        return None;
    }

    // Signature and expiry checks are the server's job; we only want the
    // payload. The decoding key goes unused.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();

    match decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => Some(Identity {
            id: data.claims.id,
            role: data.claims.role,
            name: data.claims.name,
            email: data.claims.sub,
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to decode token claims");
            None
        }
    }
}
