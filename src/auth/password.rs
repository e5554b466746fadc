// Password hashing facade
// Uses bcrypt for hashing and verification, MCF parsing for inspection

use super::errors::{PasswordError, PasswordResult};
use super::mcf;
use super::primitive::{Bcrypt, BcryptPrimitive};
use crate::{DEFAULT_COST, MAX_PASSWORD_LEN};

/// Stateless password hasher over a bcrypt primitive
///
/// Every hash it produces uses `DEFAULT_COST`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher<P = Bcrypt> {
    primitive: P,
}

impl PasswordHasher {
    /// Creates a hasher backed by the `bcrypt` crate
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: BcryptPrimitive> PasswordHasher<P> {
    /// Creates a hasher that dispatches to `primitive`
    pub fn with_primitive(primitive: P) -> Self {
        Self { primitive }
    }

    /// Hashes a password using bcrypt
    ///
    /// # Arguments
    /// * `password` - The plaintext password to hash
    ///
    /// # Returns
    /// * `Ok(String)` - The MCF hash produced by the primitive
    /// * `Err(PasswordError::EmptyPassword)` - If `password` is empty
    /// * `Err(PasswordError::PasswordTooLong)` - If `password` is over `MAX_PASSWORD_LEN` bytes
    /// * `Err(PasswordError::Primitive)` - If the primitive fails
    ///
    /// # Example
    /// ```
    /// use bcrypt_facade::PasswordHasher;
    ///
    /// let hash = PasswordHasher::new().hash("my_password").expect("valid hash");
    /// assert!(hash.starts_with("$2b$10$"));
    /// ```
    pub fn hash(&self, password: &str) -> PasswordResult<String> {
        check_password(password)?;

        Ok(self.primitive.generate(password.as_bytes(), DEFAULT_COST)?)
    }

    /// Verifies a password against a stored bcrypt hash
    ///
    /// # Arguments
    /// * `stored_hash` - The MCF hash to verify against
    /// * `password` - The plaintext password to verify
    ///
    /// # Returns
    /// * `Ok(true)` - The password matches
    /// * `Err(PasswordError::Mismatch)` - The password does not match
    /// * `Err(PasswordError::EmptyHash)` / `Err(PasswordError::EmptyPassword)` - Empty input
    /// * `Err(PasswordError::PasswordTooLong)` - `password` is over `MAX_PASSWORD_LEN` bytes
    /// * `Err(PasswordError::Primitive)` - The primitive rejected the hash
    ///
    /// # Example
    /// ```
    /// use bcrypt_facade::PasswordHasher;
    ///
    /// let hasher = PasswordHasher::new();
    /// let hash = hasher.hash("my_password").unwrap();
    ///
    /// assert!(hasher.verify(&hash, "my_password").unwrap());
    /// assert!(hasher.verify(&hash, "not_my_password").unwrap_err().is_mismatch());
    /// ```
    pub fn verify(&self, stored_hash: &str, password: &str) -> PasswordResult<bool> {
        if stored_hash.is_empty() {
            return Err(PasswordError::EmptyHash);
        }
        check_password(password)?;

        if self.primitive.compare(stored_hash, password.as_bytes())? {
            Ok(true)
        } else {
            Err(PasswordError::Mismatch)
        }
    }

    /// Returns the version tag of a stored hash (`b"2a"`, `b"2b"`, `b"2"`, ...)
    ///
    /// See [`mcf::version`] for the accepted framing and error cases.
    pub fn version<'a>(&self, hash: &'a [u8]) -> PasswordResult<&'a [u8]> {
        mcf::version(hash)
    }

    /// Returns the cost field of a stored hash
    ///
    /// See [`mcf::cost`] for the field offsets and error cases.
    pub fn cost(&self, hash: &[u8]) -> PasswordResult<u32> {
        mcf::cost(hash)
    }
}

/// The primitive reads at most `MAX_PASSWORD_LEN` bytes; anything longer
/// would verify against every password sharing that prefix.
fn check_password(password: &str) -> PasswordResult<()> {
    if password.is_empty() {
        return Err(PasswordError::EmptyPassword);
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(PasswordError::PasswordTooLong {
            len: password.len(),
            max: MAX_PASSWORD_LEN,
        });
    }
    Ok(())
}
