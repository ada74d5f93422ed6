//! Cell pattern derivation.
//!
//! Pattern bits are a little-endian integer read from the digest starting at
//! byte 4: bit `i` is bit `i % 8` of `digest[4 + i / 8]`. For 3x3 and 5x5
//! grids this is the same as reading `digest[4..8]` as a `u32`; larger grids
//! keep reading contiguous bytes.

use glyphid_types::Digest;
use glyphid_types::grid::{Grid, GridSize};

/// First digest byte used for pattern bits.
pub const PATTERN_OFFSET: usize = 4;

/// Little-endian bit view over the pattern bytes of a digest.
#[derive(Debug, Clone, Copy)]
pub struct PatternBits<'a> {
    bytes: &'a [u8],
}

impl<'a> PatternBits<'a> {
    pub fn new(digest: &'a Digest) -> Self {
        Self {
            bytes: &digest[PATTERN_OFFSET..],
        }
    }

    /// Bit at `index`, or `false` past the end of the digest.
    pub fn bit(&self, index: usize) -> bool {
        self.bytes
            .get(index / 8)
            .is_some_and(|&byte| (byte >> (index % 8)) & 1 != 0)
    }
}

/// Fill a grid from the digest: left half plus center column, mirrored.
pub fn fill_grid(digest: &Digest, size: GridSize) -> Grid {
    let bits = PatternBits::new(digest);
    let half = size.half();
    let mut grid = Grid::new(size);
    for row in 0..size.get() {
        for col in 0..half {
            grid.set_mirrored(row, col, bits.bit(row * half + col));
        }
    }
    grid
}
