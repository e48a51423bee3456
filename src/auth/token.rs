//! Access token inspection.
//!
//! The payload is read without verifying the signature: the API validates
//! every token it receives, this side only needs the identity claims.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::UserIdentity;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessClaims {
    pub user_id: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl AccessClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }
}

/// Decode the claims segment of a JWT. Returns `None` for malformed tokens.
pub fn decode_claims(token: &str) -> Option<AccessClaims> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Identity carried by the token, if it can be read.
pub fn decode_identity(token: &str) -> Option<UserIdentity> {
    let claims = decode_claims(token);
    if claims.is_none() {
        tracing::warn!("failed to decode identity from access token");
    }
    claims.map(|c| UserIdentity {
        id: c.user_id,
        email: c.email,
        role: c.role,
    })
}

#[cfg(test)]
pub(crate) fn encode_test_token(user_id: &str, email: &str, role: &str, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({"userId": user_id, "email": email, "role": role, "exp": exp})
            .to_string(),
    );
    format!("{}.{}.signature", header, payload)
}
