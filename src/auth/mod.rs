// Password hashing modules
//
// MCF parsing, the bcrypt primitive seam and the hash/verify facade
// built on top of them.

pub mod blocking;
pub mod errors;
pub mod mcf;
pub mod password;
pub mod primitive;

pub use errors::PasswordError;
pub use password::PasswordHasher;
