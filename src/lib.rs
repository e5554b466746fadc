//! bcrypt password facade
//!
//! This library wraps the bcrypt adaptive hash behind a small stateless
//! facade: hash a password, verify a password against a stored hash, and
//! read the version and cost fields out of a Modular Crypt Format string.

pub mod auth;

pub use auth::errors::{PasswordError, PasswordResult};
pub use auth::password::PasswordHasher;
pub use auth::primitive::{Bcrypt, BcryptPrimitive};

/// The minimum cost accepted by the bcrypt primitive
pub const MIN_COST: u32 = 4;

/// The maximum cost accepted by the bcrypt primitive
pub const MAX_COST: u32 = 31;

/// The longest password bcrypt reads; longer input is rejected, not truncated
pub const MAX_PASSWORD_LEN: usize = 72;

/// The cost every hash produced by [`PasswordHasher::hash`] carries
pub const DEFAULT_COST: u32 = 10;
