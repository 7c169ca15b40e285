use argon2::{
    password_hash::{self, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use rand::rngs::OsRng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to generate password hash: {0}")]
    Hash(password_hash::Error),
    #[error("Failed to verify password: {0}")]
    Verify(password_hash::Error),
    #[error("Password hashing task failed")]
    Task,
}

pub fn hash(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(Error::Hash)
}

pub fn verify(password: &str, hash: &str) -> Result<bool, Error> {
    let hash = PasswordHash::new(hash).map_err(Error::Verify)?;

    match Argon2::default().verify_password(password.as_bytes(), &hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(Error::Verify(err)),
    }
}

/// Runs [`hash`] off the async executor.
pub async fn hash_blocking(password: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || hash(&password))
        .await
        .map_err(|_| Error::Task)?
}

/// Runs [`verify`] off the async executor.
pub async fn verify_blocking(password: String, hash: String) -> Result<bool, Error> {
    tokio::task::spawn_blocking(move || verify(&password, &hash))
        .await
        .map_err(|_| Error::Task)?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_salted_and_verifiable() {
        let first = hash("Password1").unwrap();
        let second = hash("Password1").unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));
        assert!(verify("Password1", &first).unwrap());
        assert!(!verify("Password2", &first).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(matches!(
            verify("Password1", "not-a-phc-string"),
            Err(Error::Verify(_))
        ));
    }

    #[tokio::test]
    async fn blocking_helpers_round_trip() {
        let hash = hash_blocking("Secret123".to_string()).await.unwrap();
        assert!(verify_blocking("Secret123".to_string(), hash).await.unwrap());
    }
}
