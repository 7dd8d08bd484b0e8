use std::ops::Deref;
use std::str::FromStr;

use image::Rgb;

use super::error::{QRError, QRResult};
use super::version_db::ALIGNMENT_PATTERN_POSITIONS;

// Version
//------------------------------------------------------------------------------

pub const MIN_VERSION: u8 = 1;
pub const MAX_VERSION: u8 = 40;

/// Size class of a standard QR symbol. A version `v` symbol is `4v + 17` modules wide.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    pub fn new(ver: u8) -> QRResult<Self> {
        if !(MIN_VERSION..=MAX_VERSION).contains(&ver) {
            return Err(QRError::InvalidVersion);
        }
        Ok(Self(ver))
    }

    /// Inverse of [`Version::width`]. Rejects widths that aren't `4v + 17` for a valid `v`.
    pub fn from_width(w: usize) -> QRResult<Self> {
        if w < 21 || (w - 17) % 4 != 0 {
            return Err(QRError::InvalidVersion);
        }
        let ver = u8::try_from((w - 17) / 4).map_err(|_| QRError::InvalidVersion)?;
        Self::new(ver)
    }

    pub const fn width(self) -> usize {
        self.0 as usize * 4 + 17
    }

    /// Row/column coordinates of alignment pattern centers. Every ordered pair drawn from this
    /// list is a candidate center.
    pub fn alignment_pattern(self) -> &'static [usize] {
        ALIGNMENT_PATTERN_POSITIONS.get(self.0 as usize - 1).copied().unwrap_or(&[])
    }
}

impl Deref for Version {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

// Color
//------------------------------------------------------------------------------

/// Color of a single module in the editable overlay. `Dark` and `Light` are the monochrome
/// values an encoder produces, `Hue` is anything painted on top.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Color {
    Dark,
    Light,
    Hue(u8, u8, u8),
}

impl Color {
    pub fn is_mono(&self) -> bool {
        !matches!(self, Self::Hue(..))
    }

    pub fn from_hex(hex: &str) -> QRResult<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(QRError::InvalidColor);
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| QRError::InvalidColor)
        };
        Ok(Self::Hue(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Pixel value of this color, `Light` standing for whatever background is in use.
    pub fn to_rgb(self, background: Rgb<u8>) -> Rgb<u8> {
        match self {
            Self::Dark => Rgb([0, 0, 0]),
            Self::Light => background,
            Self::Hue(r, g, b) => Rgb([r, g, b]),
        }
    }
}

impl From<bool> for Color {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl FromStr for Color {
    type Err = QRError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
