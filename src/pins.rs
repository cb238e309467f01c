//! Pin assignments and the active-low switch indicator.

use embedded_hal::digital::{OutputPin, PinState, StatefulOutputPin};
use log::debug;

use crate::error::Error;

/// Microcontroller pins used by the briefcase. The lid reed switch and the
/// indicator switch only exist on later hardware revisions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    /// Neopixel data line.
    pub led_data: u8,
    /// Lid reed switch input.
    pub lid: Option<u8>,
    /// Switch indicator LED, active-low.
    pub switch: Option<u8>,
}

impl PinAssignment {
    pub const fn data_only(led_data: u8) -> Self {
        Self {
            led_data,
            lid: None,
            switch: None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> {
        [Some(self.led_data), self.lid, self.switch]
            .into_iter()
            .flatten()
    }

    /// Usable in const context for build-time checks.
    pub const fn is_distinct(&self) -> bool {
        let data = self.led_data;
        match (self.lid, self.switch) {
            (Some(lid), Some(switch)) => data != lid && data != switch && lid != switch,
            (Some(other), None) | (None, Some(other)) => data != other,
            (None, None) => true,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (idx, pin) in self.iter().enumerate() {
            if self.iter().skip(idx + 1).any(|other| other == pin) {
                return Err(Error::PinConflict { pin });
            }
        }
        Ok(())
    }
}

/// Electrical level that means "on" for a signal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    pub const fn level(self, asserted: bool) -> PinState {
        match (self, asserted) {
            (Polarity::ActiveHigh, true) | (Polarity::ActiveLow, false) => PinState::High,
            (Polarity::ActiveHigh, false) | (Polarity::ActiveLow, true) => PinState::Low,
        }
    }
}

/// Drives the switch indicator LED. Asserting it pulls the line low.
pub struct Indicator<P> {
    pin: P,
}

impl<P: OutputPin> Indicator<P> {
    pub const POLARITY: Polarity = Polarity::ActiveLow;

    /// Takes ownership of the pin and switches the indicator off.
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_state(Self::POLARITY.level(false))?;
        Ok(Self { pin })
    }

    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        debug!("switch indicator {}", if on { "on" } else { "off" });
        self.pin.set_state(Self::POLARITY.level(on))
    }

    pub fn assert(&mut self) -> Result<(), P::Error> {
        self.set(true)
    }

    pub fn deassert(&mut self) -> Result<(), P::Error> {
        self.set(false)
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> Indicator<P> {
    pub fn is_asserted(&mut self) -> Result<bool, P::Error> {
        self.pin.is_set_low()
    }

    pub fn toggle(&mut self) -> Result<(), P::Error> {
        self.pin.toggle()
    }
}
