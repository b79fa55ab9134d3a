use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use tracing::warn;

lazy_static! {
    /// Stand-in digest checked when there is no usable stored hash, so every
    /// failed login pays for one Argon2 verification.
    static ref DUMMY_HASH: Option<String> = hash_password("signup-dummy-password").ok();
}

#[cfg(test)]
pub(crate) static VERIFICATIONS: std::sync::atomic::AtomicUsize =
    std::sync::atomic::AtomicUsize::new(0);

fn hasher() -> Argon2<'static> {
    Argon2::default()
}

/// Argon2id digest with a fresh random salt, encoded as a PHC string.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    match hasher().hash_password(plain.as_bytes(), &salt) {
        Ok(phc) => Ok(phc.to_string()),
        Err(e) => anyhow::bail!("argon2 hashing failed: {e}"),
    }
}

fn argon2_matches(plain: &str, phc: &PasswordHash<'_>) -> bool {
    #[cfg(test)]
    VERIFICATIONS.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    hasher().verify_password(plain.as_bytes(), phc).is_ok()
}

/// Checks `plain` against the stored PHC string. A missing or unparsable
/// stored hash still runs one verification against [`DUMMY_HASH`] and
/// reports a mismatch.
pub fn verify_password(plain: &str, stored: Option<&str>) -> bool {
    if let Some(phc) = stored {
        match PasswordHash::new(phc) {
            Ok(parsed) => return argon2_matches(plain, &parsed),
            Err(e) => warn!(error = %e, "stored password hash is not a PHC string"),
        }
    }
    if let Some(parsed) = DUMMY_HASH.as_deref().and_then(|d| PasswordHash::new(d).ok()) {
        let _ = argon2_matches(plain, &parsed);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    fn verifications_during(f: impl FnOnce()) -> usize {
        let before = VERIFICATIONS.load(Ordering::SeqCst);
        f();
        VERIFICATIONS.load(Ordering::SeqCst) - before
    }

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "Secur3P@ssw0rd!";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password(password, Some(&hash)));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(!verify_password("wrong-password", Some(&hash)));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn dummy_hash_is_available() {
        assert!(DUMMY_HASH.is_some());
    }

    #[test]
    fn missing_hash_still_runs_argon2() {
        let ran = verifications_during(|| assert!(!verify_password("anything", None)));
        assert!(ran >= 1);
    }

    #[test]
    fn legacy_md5_hash_is_a_mismatch_not_an_error() {
        // hex MD5 of "password"
        let md5 = "5f4dcc3b5aa765d61d8327deb882cf99";
        let ran = verifications_during(|| assert!(!verify_password("password", Some(md5))));
        assert!(ran >= 1);
    }

    #[test]
    fn wrong_password_runs_argon2() {
        let hash = hash_password("correct-horse").unwrap();
        let ran = verifications_during(|| assert!(!verify_password("wrong-horse", Some(&hash))));
        assert!(ran >= 1);
    }
}
