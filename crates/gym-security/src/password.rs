//! Password hashing with bcrypt or Argon2

use std::sync::Arc;

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use gym_shared::config::{PasswordAlgorithm, SecuritySettings};
use gym_shared::constants::{MAX_BCRYPT_COST, MIN_BCRYPT_COST};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
    #[error("Invalid hasher parameters: {0}")]
    InvalidParams(String),
}

/// One-way, salted password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}

/// bcrypt with a configurable cost factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Result<Self, PasswordError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(PasswordError::InvalidParams(format!(
                "bcrypt cost must be between {} and {}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, cost
            )));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|e| PasswordError::HashError(e.to_string()))
    }
}

/// Argon2id with configurable memory, iteration, and parallelism costs.
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::HashError(e.to_string()))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// Builds the hasher selected by `security.password_algorithm`.
pub fn hasher_from_settings(
    settings: &SecuritySettings,
) -> Result<Arc<dyn PasswordHasher>, PasswordError> {
    Ok(match settings.password_algorithm {
        PasswordAlgorithm::Bcrypt => Arc::new(BcryptHasher::new(settings.bcrypt_cost)?),
        PasswordAlgorithm::Argon2 => Arc::new(Argon2Hasher::new(
            settings.argon2_memory_kib,
            settings.argon2_iterations,
            settings.argon2_parallelism,
        )?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_hash_and_verify() {
        let hasher = BcryptHasher::new(MIN_BCRYPT_COST).unwrap();
        let hash = hasher.hash("ReallySecret1001").unwrap();

        assert_ne!(hash, "ReallySecret1001");
        assert!(hash.starts_with("$2b$04$"));
        assert!(hasher.verify("ReallySecret1001", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_bcrypt_hashes_are_salted() {
        let hasher = BcryptHasher::new(MIN_BCRYPT_COST).unwrap();
        let first = hasher.hash("same").unwrap();
        let second = hasher.hash("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_bcrypt_rejects_out_of_range_cost() {
        assert!(BcryptHasher::new(3).is_err());
        assert!(BcryptHasher::new(32).is_err());
    }

    #[test]
    fn test_argon2_hash_and_verify() {
        let hasher = Argon2Hasher::new(1024, 1, 1).unwrap();
        let hash = hasher.hash("ReallySecret1001").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("ReallySecret1001", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_argon2_rejects_invalid_params() {
        assert!(Argon2Hasher::new(1024, 0, 1).is_err());
    }

    #[test]
    fn test_hasher_from_settings_uses_configured_algorithm() {
        let mut settings = SecuritySettings {
            password_algorithm: PasswordAlgorithm::Bcrypt,
            bcrypt_cost: MIN_BCRYPT_COST,
            argon2_memory_kib: 1024,
            argon2_iterations: 1,
            argon2_parallelism: 1,
        };
        let hash = hasher_from_settings(&settings).unwrap().hash("pw").unwrap();
        assert!(hash.starts_with("$2b$"));

        settings.password_algorithm = PasswordAlgorithm::Argon2;
        let hash = hasher_from_settings(&settings).unwrap().hash("pw").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }
}
