pub mod sha256;

pub use sha256::Sha256Hasher;

/// One-way transform of a plaintext credential into a storable digest.
///
/// Implementations must be pure and deterministic: the same plaintext
/// always yields the same digest, so stored digests can be compared
/// directly without ever persisting the plaintext. The trait seam lets
/// the digest algorithm be swapped without touching callers.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash a plaintext credential into its hex digest.
    fn hash(&self, plaintext: &str) -> String;
}
