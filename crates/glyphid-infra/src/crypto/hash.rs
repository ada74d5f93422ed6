//! SHA-256 name hashing for identicon derivation.
//!
//! Implements the `NameHasher` trait from `glyphid-core` using the
//! `sha2` crate (RustCrypto ecosystem).

use sha2::{Digest as _, Sha256};

use glyphid_core::service::hash::NameHasher;
use glyphid_types::Digest;

/// SHA-256 implementation of `NameHasher`.
pub struct Sha256NameHasher;

impl Sha256NameHasher {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256NameHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl NameHasher for Sha256NameHasher {
    fn digest(&self, name: &str) -> Digest {
        Sha256::digest(name.as_bytes()).into()
    }
}
