//! Brightness bounds for the strip.
//!
//! Every intensity written to the LEDs has to stay inside the configured
//! range. [`BrightnessRange::dim`] is the intended way to apply a level to a
//! frame so callers cannot bypass the clamp.

use libm::roundf;
use log::trace;
use smart_leds::{brightness, gamma, RGB8};

use crate::error::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessRange {
    min: u8,
    max: u8,
}

impl BrightnessRange {
    pub const fn new(min: u8, max: u8) -> Result<Self, Error> {
        if min >= max {
            return Err(Error::InvertedBrightness { min, max });
        }
        Ok(Self { min, max })
    }

    /// Const constructor for the revision tables. An inverted range fails the
    /// build.
    pub(crate) const fn from_bounds(min: u8, max: u8) -> Self {
        assert!(min < max, "minimum brightness must be below maximum");
        Self { min, max }
    }

    pub const fn min(&self) -> u8 {
        self.min
    }

    pub const fn max(&self) -> u8 {
        self.max
    }

    pub const fn contains(&self, level: u8) -> bool {
        level >= self.min && level <= self.max
    }

    pub fn clamp(&self, level: u8) -> u8 {
        let clamped = level.clamp(self.min, self.max);
        if clamped != level {
            trace!(
                "brightness {} clamped to {} ({} %)",
                level,
                clamped,
                Self::percent(clamped)
            );
        }
        clamped
    }

    /// Scales a frame to `level`, clamped into the range.
    pub fn dim<I>(&self, pixels: I, level: u8) -> impl Iterator<Item = RGB8>
    where
        I: Iterator<Item = RGB8>,
    {
        brightness(pixels, self.clamp(level))
    }

    /// Like [`Self::dim`], with gamma correction applied before scaling.
    pub fn dim_gamma<I>(&self, pixels: I, level: u8) -> impl Iterator<Item = RGB8>
    where
        I: Iterator<Item = RGB8>,
    {
        brightness(gamma(pixels), self.clamp(level))
    }

    /// `level` as a rounded percentage of full scale.
    pub fn percent(level: u8) -> u8 {
        roundf((level as f32 / 255_f32) * 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use core::iter;

    use smart_leds::colors;

    use super::*;

    #[test]
    fn rejects_inverted_and_empty_ranges() {
        assert_eq!(
            BrightnessRange::new(130, 20),
            Err(Error::InvertedBrightness { min: 130, max: 20 })
        );
        assert_eq!(
            BrightnessRange::new(20, 20),
            Err(Error::InvertedBrightness { min: 20, max: 20 })
        );
        assert!(BrightnessRange::new(20, 130).is_ok());
    }

    #[test]
    fn clamp_stays_in_range() {
        let range = BrightnessRange::from_bounds(20, 130);
        assert_eq!(range.clamp(0), 20);
        assert_eq!(range.clamp(20), 20);
        assert_eq!(range.clamp(80), 80);
        assert_eq!(range.clamp(130), 130);
        assert_eq!(range.clamp(255), 130);
        assert!((0..=255u8).all(|level| range.contains(range.clamp(level))));
    }

    #[test]
    fn dim_uses_clamped_level() {
        let range = BrightnessRange::from_bounds(20, 130);
        let dimmed: Vec<RGB8> = range.dim(iter::repeat(colors::WHITE).take(4), 255).collect();
        let expected: Vec<RGB8> = brightness(iter::repeat(colors::WHITE).take(4), 130).collect();
        assert_eq!(dimmed, expected);

        let dark = range.dim(iter::once(colors::WHITE), 0).next();
        assert_eq!(dark, brightness(iter::once(colors::WHITE), 20).next());
    }

    #[test]
    fn dim_gamma_matches_manual_pipeline() {
        let range = BrightnessRange::from_bounds(5, 120);
        let pixel = RGB8::new(200, 100, 50);
        assert_eq!(
            range.dim_gamma(iter::once(pixel), 250).next(),
            brightness(gamma(iter::once(pixel)), 120).next()
        );
    }

    #[test]
    fn percent_of_full_scale() {
        assert_eq!(BrightnessRange::percent(0), 0);
        assert_eq!(BrightnessRange::percent(255), 100);
        assert_eq!(BrightnessRange::percent(130), 51);
    }
}
