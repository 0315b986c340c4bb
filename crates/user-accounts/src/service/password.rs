//! Argon2 password hashing with a random per-user salt.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;

use super::ServiceError;

pub struct HashedPassword {
    /// PHC string; embeds the salt and parameters.
    pub hash: String,
    pub salt: String,
}

pub fn hash_password(password: &str) -> Result<HashedPassword, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::Hashing(e.to_string()))?
        .to_string();
    Ok(HashedPassword {
        hash,
        salt: salt.as_str().to_string(),
    })
}

/// False for a wrong password and for a hash that cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash_password("s3cret").unwrap();
        assert!(hashed.hash.starts_with("$argon2"));
        assert!(hashed.hash.contains(&hashed.salt));
        assert!(verify_password("s3cret", &hashed.hash));
        assert!(!verify_password("S3cret", &hashed.hash));
    }

    #[test]
    fn test_unparseable_hash_never_verifies() {
        assert!(!verify_password("anything", "plain-text"));
    }
}
