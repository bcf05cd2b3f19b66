/**
 * Password Hashing
 *
 * Thin wrapper around bcrypt. Hashing salts internally and is deliberately
 * expensive; verification recomputes the digest and compares in constant
 * time relative to the digest content.
 */

use bcrypt::{BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage
pub fn hash(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, DEFAULT_COST)
}

/// Verify a plaintext password against a stored digest
///
/// A malformed or unparseable digest counts as a verification failure, not
/// an error: the caller only ever learns "matched" or "did not match".
pub fn verify(plaintext: &str, digest: &str) -> bool {
    bcrypt::verify(plaintext, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_roundtrip() {
        let digest = hash("rightpass").unwrap();
        assert!(verify("rightpass", &digest));
        assert!(!verify("wrongpass", &digest));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash("samepass").unwrap();
        let second = hash("samepass").unwrap();
        assert_ne!(first, second);
        assert!(verify("samepass", &first));
        assert!(verify("samepass", &second));
    }

    #[test]
    fn test_malformed_digest_fails_closed() {
        assert!(!verify("anything", "not-a-bcrypt-digest"));
        assert!(!verify("anything", ""));
    }
}
