use crate::error::{AppError, Result};
use argon2::{
    Argon2, ParamsBuilder,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

/// The memory cost for Argon2 in MB.
const ARGON2_MEMORY_MB: u32 = 19;
/// The number of iterations for Argon2.
const ARGON2_ITERATIONS: u32 = 3;
/// The parallelism factor for Argon2.
const ARGON2_PARALLELISM: u32 = 2;

/// Hashes a password using Argon2id.
///
/// Every call draws a fresh random salt, so two hashes of the same secret
/// differ while both verify.
///
/// # Arguments
///
/// * `password` - The password to hash.
///
/// # Returns
///
/// A `Result` containing the PHC-format hash string.
pub fn hash_password(password: &str) -> Result<String> {
    let mut password_bytes = password.as_bytes().to_vec();

    let mut salt_bytes = [0u8; 16];
    OsRng.fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::Internal(format!("Salt encoding error: {}", e)))?;

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        ParamsBuilder::new()
            .m_cost(ARGON2_MEMORY_MB * 1024)
            .t_cost(ARGON2_ITERATIONS)
            .p_cost(ARGON2_PARALLELISM)
            .build()
            .map_err(|e| AppError::Internal(format!("Argon2 params: {}", e)))?,
    );

    let password_hash = argon2
        .hash_password(&password_bytes, &salt)
        .map_err(|e| AppError::Internal(format!("Argon2 hash error: {}", e)))?
        .to_string();

    password_bytes.zeroize();
    tracing::debug!("Password hashed successfully with Argon2");
    Ok(password_hash)
}

/// Verifies a password against a stored hash.
///
/// A malformed hash string verifies as `false` rather than erroring: the
/// login path must treat an unreadable stored hash exactly like a wrong
/// password.
///
/// # Arguments
///
/// * `password` - The password to verify.
/// * `hash` - The PHC hash string to verify against.
///
/// # Returns
///
/// A `Result` containing `true` if the password is valid, `false` otherwise.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let mut password_bytes = password.as_bytes().to_vec();

    let result = match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored hash is malformed, rejecting credential: {}", e);
            false
        }
    };

    password_bytes.zeroize();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("hunter2secret").unwrap();
        assert!(verify_password("hunter2secret", &hash).unwrap());
        assert!(!verify_password("hunter2wrong", &hash).unwrap());
    }

    #[test]
    fn same_secret_hashes_differently() {
        let first = hash_password("same-secret").unwrap();
        let second = hash_password("same-secret").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("same-secret", &first).unwrap());
        assert!(verify_password("same-secret", &second).unwrap());
    }

    #[test]
    fn malformed_hash_verifies_false() {
        assert!(!verify_password("anything", "not-a-phc-string").unwrap());
        assert!(!verify_password("anything", "").unwrap());
        assert!(!verify_password("anything", "$argon2id$garbage").unwrap());
    }

    #[test]
    fn hash_is_phc_format() {
        let hash = hash_password("x").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }
}
