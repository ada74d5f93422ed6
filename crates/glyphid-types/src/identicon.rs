use serde::Serialize;

use crate::color::Rgb;
use crate::grid::Grid;

/// A derived identicon: foreground color plus mirrored cell pattern.
///
/// Recomputed on demand from the name; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identicon {
    /// The name the identicon was derived from.
    pub name: String,
    /// Foreground color for "on" cells.
    pub color: Rgb,
    pub grid: Grid,
}

impl Identicon {
    /// True when color and pattern both match, regardless of name.
    pub fn looks_like(&self, other: &Identicon) -> bool {
        self.color == other.color && self.grid == other.grid
    }
}
