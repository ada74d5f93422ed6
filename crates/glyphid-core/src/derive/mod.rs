//! Digest to identicon mapping.
//!
//! Pure and deterministic: the same digest and grid size always produce the
//! same color and pattern.

pub mod color;
pub mod pattern;

use glyphid_types::Digest;
use glyphid_types::grid::GridSize;
use glyphid_types::identicon::Identicon;

use self::color::ColorParams;
use self::pattern::fill_grid;

/// Build the identicon for `name` from its precomputed digest.
pub fn derive_from_digest(name: &str, digest: &Digest, size: GridSize) -> Identicon {
    Identicon {
        name: name.to_string(),
        color: ColorParams::from_digest(digest).to_rgb(),
        grid: fill_grid(digest, size),
    }
}
