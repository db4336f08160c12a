//! # Gym Security
//!
//! Password hashing behind a small trait so handlers can be tested with a
//! cheap cost factor.

pub mod password;

pub use password::{hasher_from_settings, Argon2Hasher, BcryptHasher, PasswordError, PasswordHasher};
