// Modular Crypt Format parsing for bcrypt hashes
// Reads the version tag and cost field out of `$2a$10$<salt><digest>`

use super::errors::{PasswordError, PasswordResult};

/// The highest major version byte accepted at offset 1
pub const MAJOR_VERSION: u8 = b'2';

/// Length of the bcrypt-base64 encoded salt
pub const ENCODED_SALT_SIZE: usize = 22;

/// Length of the bcrypt-base64 encoded digest
pub const ENCODED_HASH_SIZE: usize = 31;

/// Shortest buffer `cost` will look at (59)
///
/// A two-char version hash is 60 bytes; the single-char form is one
/// byte shorter.
pub const MIN_HASH_SIZE: usize = "$2$10$".len() + ENCODED_SALT_SIZE + ENCODED_HASH_SIZE;

const SEPARATOR: u8 = b'$';
const COST_DIGITS: usize = 2;

/// Extracts the version tag from an MCF hash
///
/// Returns one byte (`$2$...`) or two bytes (`$2a$...`). Only the major
/// version is checked; any byte is accepted as the minor.
///
/// # Errors
/// * `InvalidHash` - byte 0 is not `$`, or the buffer is shorter than 3 bytes
/// * `InvalidVersion` - byte 1 is greater than `'2'`
///
/// # Example
/// ```
/// use bcrypt_facade::auth::mcf::version;
///
/// let hash = b"$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";
/// assert_eq!(version(hash).unwrap(), b"2a");
/// ```
pub fn version(hash: &[u8]) -> PasswordResult<&[u8]> {
    match hash {
        [first, ..] if *first != SEPARATOR => Err(PasswordError::InvalidHash),
        [_, major, ..] if *major > MAJOR_VERSION => Err(PasswordError::InvalidVersion),
        [_, _, SEPARATOR, ..] => Ok(&hash[1..2]),
        [_, _, _, ..] => Ok(&hash[1..3]),
        _ => Err(PasswordError::InvalidHash),
    }
}

/// Extracts the cost field from an MCF hash
///
/// The two cost digits follow the `$` that closes the version field:
/// offset 3 for `$2$CC$...`, offset 4 for `$2a$CC$...`. The value is not
/// range checked against `MIN_COST`/`MAX_COST`.
///
/// # Errors
/// * `HashTooShort` - fewer than `MIN_HASH_SIZE` bytes
/// * `InvalidHash` - byte 0 is not `$`, or the cost bytes are non-UTF-8 or signed
/// * `InvalidCost` - the cost digits are not decimal
///
/// # Example
/// ```
/// use bcrypt_facade::auth::mcf::cost;
///
/// let hash = b"$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";
/// assert_eq!(cost(hash).unwrap(), 10);
/// ```
pub fn cost(hash: &[u8]) -> PasswordResult<u32> {
    if hash.len() < MIN_HASH_SIZE {
        return Err(PasswordError::HashTooShort {
            len: hash.len(),
            min: MIN_HASH_SIZE,
        });
    }

    if hash[0] != SEPARATOR {
        return Err(PasswordError::InvalidHash);
    }

    let start = if hash[2] != SEPARATOR { 4 } else { 3 };
    let digits = &hash[start..start + COST_DIGITS];

    let digits = std::str::from_utf8(digits).map_err(|_| PasswordError::InvalidHash)?;
    if digits.starts_with('+') {
        return Err(PasswordError::InvalidHash);
    }

    digits.parse::<u32>().map_err(PasswordError::InvalidCost)
}
