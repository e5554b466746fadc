// Non-blocking entry points for async callers
// bcrypt is CPU-bound, so the work runs on tokio's blocking pool

use tokio::task::spawn_blocking;

use super::errors::{PasswordError, PasswordResult};
use super::password::PasswordHasher;
use super::primitive::BcryptPrimitive;

impl<P> PasswordHasher<P>
where
    P: BcryptPrimitive + Clone + 'static,
{
    /// Hashes a password on the blocking pool
    ///
    /// Same contract as [`PasswordHasher::hash`]. Dropping the future
    /// abandons the result; the hash still runs to completion.
    ///
    /// # Example
    /// ```
    /// use bcrypt_facade::PasswordHasher;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let hasher = PasswordHasher::new();
    /// let hash = hasher.hash_async("my_password".to_string()).await.unwrap();
    /// assert!(hasher.verify_async(hash, "my_password".to_string()).await.unwrap());
    /// # }
    /// ```
    pub async fn hash_async(&self, password: String) -> PasswordResult<String> {
        let hasher = self.clone();
        tracing::debug!("dispatching password hash to blocking pool");

        let result = run(move || hasher.hash(&password)).await;
        tracing::debug!(ok = result.is_ok(), "password hash finished");
        result
    }

    /// Verifies a password on the blocking pool
    ///
    /// Same contract as [`PasswordHasher::verify`].
    pub async fn verify_async(&self, stored_hash: String, password: String) -> PasswordResult<bool> {
        let hasher = self.clone();
        tracing::debug!("dispatching password verification to blocking pool");

        let result = run(move || hasher.verify(&stored_hash, &password)).await;
        tracing::debug!(ok = result.is_ok(), "password verification finished");
        result
    }
}

async fn run<T, F>(work: F) -> PasswordResult<T>
where
    F: FnOnce() -> PasswordResult<T> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(work).await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "blocking password task failed");
        Err(PasswordError::Blocking(e))
    })
}
