use sha2::Digest;
use sha2::Sha256;

use super::CredentialHasher;

/// Salted SHA-256 credential hasher.
///
/// The salt is fixed for the life of the deployment and injected at
/// construction; changing it invalidates every stored digest.
pub struct Sha256Hasher {
    salt: String,
}

impl Sha256Hasher {
    /// Create a hasher with the deployment-wide salt.
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }
}

impl CredentialHasher for Sha256Hasher {
    fn hash(&self, plaintext: &str) -> String {
        let mut digest = Sha256::new();
        digest.update(self.salt.as_bytes());
        digest.update(plaintext.as_bytes());
        hex::encode(digest.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let hasher = Sha256Hasher::new("test_salt");

        assert_eq!(hasher.hash("my_password"), hasher.hash("my_password"));
    }

    #[test]
    fn test_different_plaintexts_produce_different_digests() {
        let hasher = Sha256Hasher::new("test_salt");

        assert_ne!(hasher.hash("my_password"), hasher.hash("other_password"));
    }

    #[test]
    fn test_different_salts_produce_different_digests() {
        let hasher1 = Sha256Hasher::new("salt_one");
        let hasher2 = Sha256Hasher::new("salt_two");

        assert_ne!(hasher1.hash("my_password"), hasher2.hash("my_password"));
    }

    #[test]
    fn test_digest_is_hex_encoded_sha256() {
        let hasher = Sha256Hasher::new("test_salt");
        let digest = hasher.hash("my_password");

        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
