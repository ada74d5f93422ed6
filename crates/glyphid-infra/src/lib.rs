//! Infrastructure layer for glyphid.
//!
//! Contains implementations of the ports defined in `glyphid-core`: the
//! SHA-256 name hasher, plus config loading and data directory resolution.

pub mod config;
pub mod crypto;
pub mod filesystem;

use glyphid_core::service::identicon::IdenticonService;
use glyphid_types::error::IdenticonError;
use glyphid_types::identicon::Identicon;

use crate::crypto::hash::Sha256NameHasher;

/// Identicon service pinned to SHA-256.
pub type Sha256IdenticonService = IdenticonService<Sha256NameHasher>;

/// Derive the identicon for `name` on a `grid_size` x `grid_size` grid.
///
/// `grid_size` must be a positive odd integer no larger than 19.
pub fn derive(name: &str, grid_size: usize) -> Result<Identicon, IdenticonError> {
    IdenticonService::new(Sha256NameHasher::new()).derive(name, grid_size)
}
