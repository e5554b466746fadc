// The bcrypt primitive the facade dispatches to
// Salt generation, base64 and the Blowfish kernel all live in the bcrypt crate

use bcrypt::BcryptError;

/// The external bcrypt capability the facade is built on
///
/// Implementations must compare digests in constant time.
pub trait BcryptPrimitive: Send + Sync {
    /// Hash `password` at `cost` with a fresh random salt, returning the MCF string
    fn generate(&self, password: &[u8], cost: u32) -> Result<String, BcryptError>;

    /// Check `password` against an MCF hash
    ///
    /// `Ok(false)` means the hash is well formed but does not match.
    fn compare(&self, hash: &str, password: &[u8]) -> Result<bool, BcryptError>;
}

/// `BcryptPrimitive` backed by the `bcrypt` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct Bcrypt;

impl BcryptPrimitive for Bcrypt {
    fn generate(&self, password: &[u8], cost: u32) -> Result<String, BcryptError> {
        bcrypt::hash(password, cost)
    }

    fn compare(&self, hash: &str, password: &[u8]) -> Result<bool, BcryptError> {
        bcrypt::verify(password, hash)
    }
}
