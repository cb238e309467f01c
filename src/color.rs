//! 24-bit packed colors and the default palette.

use smart_leds::RGB8;

use crate::error::Error;

const MAX_PACKED: u32 = 0xFF_FFFF;

/// A color packed as `0xRRGGBB`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u32);

pub const BLACK: Color = Color::from_hex(0x00_0000);
pub const WHITE: Color = Color::from_hex(0xFF_FFFF);
pub const BLUE: Color = Color::from_hex(0x00_00FF);
pub const RED: Color = Color::from_hex(0xFF_0000);

impl Color {
    /// Builds a color from a literal, for constants.
    ///
    /// # Panics
    ///
    /// Panics if `packed` does not fit in 24 bits. In a constant this is a
    /// build error. Use `Color::try_from` for values only known at runtime.
    pub const fn from_hex(packed: u32) -> Self {
        assert!(packed <= MAX_PACKED, "color exceeds 0xFFFFFF");
        Self(packed)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl TryFrom<u32> for Color {
    type Error = Error;

    fn try_from(packed: u32) -> Result<Self, Self::Error> {
        if packed > MAX_PACKED {
            return Err(Error::ColorOutOfRange { value: packed });
        }
        Ok(Self(packed))
    }
}

impl From<Color> for RGB8 {
    fn from(color: Color) -> Self {
        RGB8::new(color.r(), color.g(), color.b())
    }
}

impl From<RGB8> for Color {
    fn from(rgb: RGB8) -> Self {
        Color::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Default colors the animations draw with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Palette {
    pub color_1: Color,
    pub color_2: Color,
    pub red: Color,
}

impl Palette {
    /// White, blue and red. Identical in every revision.
    pub const DEFAULT: Palette = Palette {
        color_1: WHITE,
        color_2: BLUE,
        red: RED,
    };

    /// Animations alternate between the two main colors on successive
    /// passes, starting with `color_1`.
    pub const fn alternating(&self, pass: usize) -> Color {
        if pass % 2 == 0 {
            self.color_1
        } else {
            self.color_2
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> {
        [self.color_1, self.color_2, self.red].into_iter()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
