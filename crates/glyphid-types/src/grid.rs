use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use std::fmt;

use crate::error::IdenticonError;

/// Side length of an identicon grid.
///
/// Always a positive odd integer no larger than [`GridSize::MAX`]. The mirror
/// scheme needs a center column, so even sizes are rejected rather than
/// rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    /// 3x3, the more legible option at small tile sizes.
    pub const SMALL: GridSize = GridSize(3);
    /// 5x5, the default.
    pub const DEFAULT: GridSize = GridSize(5);
    /// Largest size whose pattern bits fit in the digest after byte 4
    /// (19 * 10 = 190 of 224 available bits).
    pub const MAX: usize = 19;

    pub fn new(size: usize) -> Result<Self, IdenticonError> {
        if size == 0 || size % 2 == 0 {
            return Err(IdenticonError::InvalidGridSize(size));
        }
        if size > Self::MAX {
            return Err(IdenticonError::GridSizeTooLarge {
                size,
                max: Self::MAX,
            });
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of independently determined columns (left half plus center).
    pub fn half(self) -> usize {
        (self.0 + 1) / 2
    }

    /// Number of digest bits consumed to fill a grid of this size.
    pub fn pattern_bits(self) -> usize {
        self.0 * self.half()
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for GridSize {
    type Error = IdenticonError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// A horizontally mirror-symmetric N x N boolean grid.
///
/// `true` cells are drawn in the foreground color. Cells are stored
/// row-major and only ever written in mirrored pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: GridSize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-off grid.
    pub fn new(size: GridSize) -> Self {
        let n = size.get();
        Self {
            size,
            cells: vec![false; n * n],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Set `(row, col)` and its mirror `(row, N-1-col)`.
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn set_mirrored(&mut self, row: usize, col: usize, on: bool) {
        let n = self.size.get();
        assert!(row < n && col < n, "cell ({row}, {col}) outside {n}x{n} grid");
        self.cells[row * n + col] = on;
        self.cells[row * n + (n - 1 - col)] = on;
    }

    /// Cell value, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        let n = self.size.get();
        if row >= n || col >= n {
            return None;
        }
        Some(self.cells[row * n + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size.get())
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    pub fn count_on(&self) -> usize {
        self.cells.iter().filter(|on| **on).count()
    }

    pub fn is_mirror_symmetric(&self) -> bool {
        let n = self.size.get();
        self.rows()
            .all(|row| (0..n).all(|col| row[col] == row[n - 1 - col]))
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Grid", 2)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("cells", &self.to_rows())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_accepts_odd() {
        for n in [1, 3, 5, 7, 19] {
            assert_eq!(GridSize::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn test_grid_size_rejects_zero_and_even() {
        assert_eq!(GridSize::new(0), Err(IdenticonError::InvalidGridSize(0)));
        assert_eq!(GridSize::new(4), Err(IdenticonError::InvalidGridSize(4)));
        assert_eq!(GridSize::new(20), Err(IdenticonError::InvalidGridSize(20)));
    }

    #[test]
    fn test_grid_size_rejects_too_large() {
        assert_eq!(
            GridSize::new(21),
            Err(IdenticonError::GridSizeTooLarge { size: 21, max: 19 })
        );
    }

    #[test]
    fn test_grid_size_half_and_bits() {
        assert_eq!(GridSize::DEFAULT.half(), 3);
        assert_eq!(GridSize::DEFAULT.pattern_bits(), 15);
        assert_eq!(GridSize::SMALL.half(), 2);
        assert_eq!(GridSize::SMALL.pattern_bits(), 6);
        assert_eq!(GridSize::new(1).unwrap().half(), 1);
    }

    #[test]
    fn test_grid_size_serde_validates() {
        let size: GridSize = serde_json::from_str("7").unwrap();
        assert_eq!(size.get(), 7);
        assert!(serde_json::from_str::<GridSize>("6").is_err());
        assert_eq!(serde_json::to_string(&GridSize::DEFAULT).unwrap(), "5");
    }

    #[test]
    fn test_set_mirrored_writes_both_sides() {
        let mut grid = Grid::new(GridSize::DEFAULT);
        grid.set_mirrored(1, 0, true);
        assert_eq!(grid.get(1, 0), Some(true));
        assert_eq!(grid.get(1, 4), Some(true));
        assert_eq!(grid.count_on(), 2);

        grid.set_mirrored(2, 2, true);
        assert_eq!(grid.count_on(), 3);
        assert!(grid.is_mirror_symmetric());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(GridSize::SMALL);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_grid_serializes_rows() {
        let mut grid = Grid::new(GridSize::SMALL);
        grid.set_mirrored(0, 0, true);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["size"], 3);
        assert_eq!(
            json["cells"],
            serde_json::json!([[true, false, true], [false, false, false], [false, false, false]])
        );
    }
}
