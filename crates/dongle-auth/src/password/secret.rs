//! Argon2id-hashed shared secret.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use dongle_core::error::AppError;

/// The configured shared password, kept only as an Argon2id PHC string.
///
/// The plaintext is hashed once at startup; login attempts are verified
/// against the hash so the secret never sits in memory for the life of the
/// process.
#[derive(Debug, Clone)]
pub struct SharedSecret {
    hash: String,
}

impl SharedSecret {
    /// Hashes `password` with a random salt.
    pub fn from_plaintext(password: &str) -> Result<Self, AppError> {
        if password.is_empty() {
            return Err(AppError::configuration("Shared password must not be empty"));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Returns `Ok(true)` if `candidate` matches the shared password.
    pub fn verify(&self, candidate: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(&self.hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match Argon2::default().verify_password(candidate.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}
