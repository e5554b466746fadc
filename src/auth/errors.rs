use std::num::ParseIntError;

use bcrypt::BcryptError;
use thiserror::Error;
use tokio::task::JoinError;

/// Errors that can occur while hashing, verifying or parsing passwords
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("invalid hashed password")]
    InvalidHash,

    #[error("invalid hash version")]
    InvalidVersion,

    #[error("hashed password too short to be a bcrypted password (minimum {min} bytes, got {len})")]
    HashTooShort { len: usize, min: usize },

    /// Cost digits failed decimal decode. Same kind as `InvalidHash`,
    /// with the numeric cause attached.
    #[error("invalid hashed password: malformed cost field")]
    InvalidCost(#[source] ParseIntError),

    #[error("password is empty")]
    EmptyPassword,

    #[error("password length {len} exceeds {max} bytes")]
    PasswordTooLong { len: usize, max: usize },

    #[error("hashed password is empty")]
    EmptyHash,

    #[error("hashed password is not the hash of the given password")]
    Mismatch,

    #[error("bcrypt error: {0}")]
    Primitive(#[from] BcryptError),

    #[error("blocking password task failed: {0}")]
    Blocking(#[from] JoinError),
}

impl PasswordError {
    /// Returns true for errors describing a malformed stored hash
    ///
    /// `InvalidCost` counts: a cost field that does not decode is a
    /// malformed hash with a numeric cause.
    pub fn is_invalid_hash(&self) -> bool {
        matches!(self, Self::InvalidHash | Self::InvalidCost(_))
    }

    /// Returns true when the password simply did not match the hash
    ///
    /// # Example
    /// ```
    /// use bcrypt_facade::PasswordError;
    ///
    /// assert!(PasswordError::Mismatch.is_mismatch());
    /// assert!(!PasswordError::EmptyHash.is_mismatch());
    /// ```
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch)
    }
}

pub type PasswordResult<T> = Result<T, PasswordError>;
