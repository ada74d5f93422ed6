use serde::{Deserialize, Serialize};

use std::fmt;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Divisor for the dimmed color of "off" grid cells.
    pub const CELL_OFF_DIVISOR: u8 = 5;
    /// Divisor for the background behind a colored initial badge.
    pub const BADGE_BACKGROUND_DIVISOR: u8 = 3;

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Divide every channel by `divisor` (integer division).
    ///
    /// A divisor of zero leaves the color unchanged.
    pub fn dimmed(self, divisor: u8) -> Self {
        if divisor == 0 {
            return self;
        }
        Self {
            r: self.r / divisor,
            g: self.g / divisor,
            b: self.b / divisor,
        }
    }

    /// Color for cells that are off: the foreground at one fifth intensity.
    pub fn cell_off(self) -> Self {
        self.dimmed(Self::CELL_OFF_DIVISOR)
    }

    /// Background for a colored-initial badge: one third intensity.
    pub fn badge_background(self) -> Self {
        self.dimmed(Self::BADGE_BACKGROUND_DIVISOR)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb::new(125, 202, 61).to_string(), "#7dca3d");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_dimmed_colors() {
        let fg = Rgb::new(125, 202, 61);
        assert_eq!(fg.cell_off(), Rgb::new(25, 40, 12));
        assert_eq!(fg.badge_background(), Rgb::new(41, 67, 20));
        assert_eq!(fg.dimmed(0), fg);
    }

    #[test]
    fn test_rgb_serde() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3}"#);
        let parsed: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Rgb::new(1, 2, 3));
    }
}
