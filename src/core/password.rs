//! Password hashing.

use crate::{err, error::RosterError};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

/// Hash `password` with Argon2 and a random salt. Returns the PHC string.
pub fn hash(password: &str) -> Result<String, RosterError> {
    let salt = SaltString::generate(&mut OsRng);
    match Argon2::default().hash_password(password.as_bytes(), &salt) {
        Ok(hash) => Ok(hash.to_string()),
        Err(e) => err!(PasswordHash, "failed to hash password: {e}"),
    }
}

/// Check `password` against a PHC string produced by [hash].
/// Malformed hashes never verify.
pub fn verify(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
