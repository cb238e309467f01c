//! The briefcase configuration record and its validating builder.

use embassy_time::Duration;
use log::{debug, warn};

use crate::{
    animation::{Animation, AnimationTable},
    brightness::BrightnessRange,
    color::Palette,
    error::Error,
    layout::PanelLayout,
    pins::PinAssignment,
    revision::Revision,
};

/// Everything an animation runner needs to know about the hardware. Only
/// obtainable from a [`Revision`] table or through [`ConfigBuilder::build`],
/// so a `Config` in hand has always been validated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub(crate) num_leds: usize,
    pub(crate) layout: PanelLayout,
    pub(crate) pins: PinAssignment,
    pub(crate) read_timeout_ms: u64,
    pub(crate) brightness: BrightnessRange,
    pub(crate) palette: Palette,
    pub(crate) animation_cycles: u16,
    pub(crate) animations: AnimationTable,
}

impl Config {
    pub const fn num_leds(&self) -> usize {
        self.num_leds
    }

    pub const fn layout(&self) -> PanelLayout {
        self.layout
    }

    pub const fn pins(&self) -> PinAssignment {
        self.pins
    }

    pub const fn read_timeout_ms(&self) -> u64 {
        self.read_timeout_ms
    }

    /// Upper bound for a blocking read.
    pub const fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub const fn brightness(&self) -> BrightnessRange {
        self.brightness
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Number of passes an animation runs before it exits.
    pub const fn animation_cycles(&self) -> u16 {
        self.animation_cycles
    }

    pub const fn animations(&self) -> AnimationTable {
        self.animations
    }

    pub fn animation(&self, id: i8) -> Result<Animation, Error> {
        self.animations.get(id)
    }

    /// Reports the first violated constraint. Palette colors are range
    /// checked when each [`Color`](crate::color::Color) is built.
    pub fn validate(&self) -> Result<(), Error> {
        if self.num_leds == 0 {
            return Err(Error::ZeroLeds);
        }
        if self.layout.leds() != self.num_leds {
            return Err(Error::LayoutMismatch {
                layout: self.layout.leds(),
                leds: self.num_leds,
            });
        }
        self.pins.validate()?;
        BrightnessRange::new(self.brightness.min(), self.brightness.max())?;
        if self.animation_cycles == 0 {
            return Err(Error::ZeroCycles);
        }
        if self.read_timeout_ms == 0 {
            return Err(Error::ZeroTimeout);
        }
        self.animations.validate()
    }
}

/// Builds a [`Config`] starting from a revision's values.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
    brightness: (u8, u8),
    layout: (usize, usize),
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Starts from the latest revision.
    pub fn new() -> Self {
        Self::from_revision(Revision::LATEST)
    }

    pub fn from_revision(revision: Revision) -> Self {
        let config = *revision.config();
        Self {
            brightness: (config.brightness.min(), config.brightness.max()),
            layout: (config.layout.panels(), config.layout.leds_per_panel()),
            config,
        }
    }

    pub fn num_leds(mut self, num_leds: usize) -> Self {
        self.config.num_leds = num_leds;
        self
    }

    pub fn layout(mut self, panels: usize, leds_per_panel: usize) -> Self {
        self.layout = (panels, leds_per_panel);
        self
    }

    pub fn pins(mut self, pins: PinAssignment) -> Self {
        self.config.pins = pins;
        self
    }

    pub fn led_data_pin(mut self, pin: u8) -> Self {
        self.config.pins.led_data = pin;
        self
    }

    pub fn lid_pin(mut self, pin: Option<u8>) -> Self {
        self.config.pins.lid = pin;
        self
    }

    pub fn switch_pin(mut self, pin: Option<u8>) -> Self {
        self.config.pins.switch = pin;
        self
    }

    pub fn read_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.read_timeout_ms = timeout_ms;
        self
    }

    pub fn brightness(mut self, min: u8, max: u8) -> Self {
        self.brightness = (min, max);
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    pub fn animation_cycles(mut self, cycles: u16) -> Self {
        self.config.animation_cycles = cycles;
        self
    }

    pub fn animations(mut self, animations: AnimationTable) -> Self {
        self.config.animations = animations;
        self
    }

    pub fn build(self) -> Result<Config, Error> {
        let result = self.assemble();
        match &result {
            Ok(config) => debug!("briefcase config accepted: {:?}", config),
            Err(e) => warn!("briefcase config rejected: {}", e),
        }
        result
    }

    /// Checks in the same order as [`Config::validate`]. Layout and
    /// brightness are only held as raw values until their turn comes.
    fn assemble(self) -> Result<Config, Error> {
        let mut config = self.config;
        if config.num_leds == 0 {
            return Err(Error::ZeroLeds);
        }
        config.layout = PanelLayout::new(self.layout.0, self.layout.1)?;
        if config.layout.leds() != config.num_leds {
            return Err(Error::LayoutMismatch {
                layout: config.layout.leds(),
                leds: config.num_leds,
            });
        }
        config.pins.validate()?;
        config.brightness = BrightnessRange::new(self.brightness.0, self.brightness.1)?;
        config.validate()?;
        Ok(config)
    }
}
