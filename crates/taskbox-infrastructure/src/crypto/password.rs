//! Password hashing service using Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordVerifier, SaltString},
    Argon2, PasswordHasher,
};
use taskbox_domain::error::{Error, Result};

/// Password hashing service using Argon2id
///
/// Hashing salts every call, so equal plaintexts produce different stored
/// hashes. Verification is delegated to the argon2 crate, whose digest
/// comparison is constant-time.
#[derive(Clone, Default)]
pub struct PasswordService {
    /// Argon2 configuration
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Create a new password service with default parameters
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password with a fresh random salt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::internal(format!("Password hashing failed: {}", e)))?;

        Ok(password_hash.to_string())
    }

    /// Verify a plaintext password against a stored hash
    ///
    /// `Ok(false)` on mismatch; `Err(Error::Authentication)` when the
    /// stored hash cannot be parsed. Callers must collapse both into the
    /// same authentication failure (`.unwrap_or(false)`).
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| Error::authentication(format!("Invalid password hash format: {}", e)))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
