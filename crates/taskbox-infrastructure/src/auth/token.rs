//! Stateless session tokens
//!
//! HMAC-SHA256 signed tokens carrying the user id and an issued-at
//! timestamp. There is no expiry claim and no revocation list: a token
//! stays valid until the signing secret rotates, or until the referenced
//! user no longer exists (identity resolution re-queries the credential
//! store on every request, so deleting a user invalidates all of that
//! user's tokens immediately).

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use taskbox_domain::error::{Error, Result};

/// Token claims
///
/// `id` is the only required claim; verification fails when it is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user id
    pub id: i64,
    /// Issued-at timestamp, unix seconds
    pub iat: u64,
}

/// Token issue/verify service over a process-wide secret
///
/// The secret is injected once at startup from configuration and read-only
/// afterwards.
#[derive(Clone)]
pub struct TokenService {
    /// HMAC signing secret
    secret: String,
}

impl TokenService {
    /// Create a token service with the given signing secret
    pub fn new<S: Into<String>>(secret: S) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a signed token for the given user id
    pub fn issue(&self, user_id: i64) -> Result<String> {
        let iat = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = Claims { id: user_id, iat };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| Error::internal(format!("Token generation failed: {}", e)))
    }

    /// Verify a token and extract the user id it was issued for
    ///
    /// Rejects on signature mismatch, malformed structure, or a missing
    /// `id` claim. Issued tokens carry no `exp` claim, so validation is
    /// configured to neither require nor check one.
    pub fn verify(&self, token: &str) -> Result<i64> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| Error::authentication_with_source("Invalid token", e))?;

        Ok(token_data.claims.id)
    }
}
