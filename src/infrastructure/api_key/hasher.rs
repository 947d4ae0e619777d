//! Secret hashing using Argon2id

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::config::HashingConfig;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Trait for one-way secret hashing
///
/// Both operations are CPU-bound and slow on purpose; callers on the async
/// runtime must run them on the blocking pool.
#[cfg_attr(test, automock)]
pub trait SecretHasher: Send + Sync {
    /// Hash a secret with a fresh random salt
    fn hash(&self, secret: &str) -> Result<String, DomainError>;

    /// Verify a secret against a stored hash
    fn verify(&self, secret: &str, hash: &str) -> bool;
}

/// Argon2id-based secret hasher
#[derive(Debug, Clone)]
pub struct Argon2SecretHasher {
    params: Params,
}

impl Argon2SecretHasher {
    /// Create a hasher with explicit cost parameters
    pub fn new(config: &HashingConfig) -> Result<Self, DomainError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| DomainError::configuration(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl SecretHasher for Argon2SecretHasher {
    fn hash(&self, secret: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash secret: {}", e)))
    }

    fn verify(&self, secret: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Cost parameters are read from the PHC string, not from self.
        self.argon2()
            .verify_password(secret.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Cheap hasher for tests
#[cfg(test)]
pub fn test_hasher() -> Argon2SecretHasher {
    Argon2SecretHasher::new(&HashingConfig {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}
