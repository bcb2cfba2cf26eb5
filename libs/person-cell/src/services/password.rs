use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Salted one-way hash of a submitted credential. The output is a PHC
/// string carrying the salt and cost parameters, so verification needs no
/// extra state.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_differs_from_plaintext() {
        let hash = hash_password("segredo123").unwrap();
        assert_ne!(hash, "segredo123");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn hashing_twice_produces_different_hashes() {
        let first = hash_password("segredo123").unwrap();
        let second = hash_password("segredo123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn verify_accepts_correct_password() {
        let hash = hash_password("segredo123").unwrap();
        assert!(verify_password("segredo123", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("segredo123").unwrap();
        assert!(!verify_password("outra-senha", &hash).unwrap());
    }
}
