//! NameHasher trait for turning a name into digest bytes.
//!
//! Defined in glyphid-core so derivation can run without coupling to a
//! specific hashing crate. The `Sha256NameHasher` adapter lives in
//! glyphid-infra.

use glyphid_types::Digest;

/// Abstraction over the name digest.
///
/// Implementations must hash the UTF-8 bytes of `name` and be deterministic
/// across processes and platforms. Identicons are only reproducible against
/// SHA-256; other implementations exist for tests.
pub trait NameHasher: Send + Sync {
    /// Compute the digest of the UTF-8 encoding of `name`.
    fn digest(&self, name: &str) -> Digest;
}
