//! Foreground color derivation.
//!
//! Digest bytes 0-1 pick the hue, byte 2 the saturation and byte 3 the
//! lightness. The mapping is a fixed contract: changing an offset, the byte
//! order or the truncation changes every stored identicon.

use glyphid_types::Digest;
use glyphid_types::color::Rgb;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// HLS parameters extracted from a digest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorParams {
    /// Hue in degrees, 0..=359.
    pub hue: u16,
    /// Saturation in [0.5, 0.8].
    pub saturation: f64,
    /// Lightness in [0.4, 0.65].
    pub lightness: f64,
}

impl ColorParams {
    pub const SATURATION_BASE: f64 = 0.5;
    pub const SATURATION_SPAN: f64 = 0.3;
    pub const LIGHTNESS_BASE: f64 = 0.4;
    pub const LIGHTNESS_SPAN: f64 = 0.25;

    pub fn from_digest(digest: &Digest) -> Self {
        let raw_hue = u16::from_le_bytes([digest[0], digest[1]]);
        Self {
            hue: raw_hue % 360,
            saturation: Self::SATURATION_BASE
                + (f64::from(digest[2]) / 255.0) * Self::SATURATION_SPAN,
            lightness: Self::LIGHTNESS_BASE
                + (f64::from(digest[3]) / 255.0) * Self::LIGHTNESS_SPAN,
        }
    }

    /// Convert to 8-bit RGB, truncating each scaled channel.
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = hls_to_rgb(f64::from(self.hue) / 360.0, self.lightness, self.saturation);
        Rgb::new(to_channel(r), to_channel(g), to_channel(b))
    }
}

/// Truncate a [0, 1] channel to 0..=255. Floor, not round.
fn to_channel(value: f64) -> u8 {
    (value * 255.0) as u8
}

/// Standard HLS to RGB conversion. `h`, `l` and `s` are all in [0, 1].
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
    let m1 = 2.0 * l - m2;
    (
        hue_to_channel(m1, m2, h + ONE_THIRD),
        hue_to_channel(m1, m2, h),
        hue_to_channel(m1, m2, h - ONE_THIRD),
    )
}

fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}
