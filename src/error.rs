//! Errors returned when a briefcase configuration is rejected.
//!
//! All variants carry only fixed-size data so the type stays `Copy` and
//! usable without `alloc`.

use derive_more::{Display, Error};

use crate::animation::Animation;

#[derive(Debug, Display, Error, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The strip must have at least one LED.
    #[display("LED count must be non-zero")]
    ZeroLeds,

    /// The panel layout has no panels or no LEDs per panel.
    #[display("panel layout is empty")]
    EmptyLayout,

    /// The panel layout does not add up to the LED count.
    #[display("panel layout covers {layout} LEDs but the strip has {leds}")]
    LayoutMismatch { layout: usize, leds: usize },

    /// Two functions were assigned to the same pin.
    #[display("pin {pin} is assigned more than once")]
    PinConflict { pin: u8 },

    #[display("minimum brightness {min} is not below maximum {max}")]
    InvertedBrightness { min: u8, max: u8 },

    /// Packed color does not fit in 24 bits.
    #[display("color {value:#x} exceeds 0xFFFFFF")]
    ColorOutOfRange { value: u32 },

    #[display("animation cycle count must be non-zero")]
    ZeroCycles,

    #[display("read timeout must be non-zero")]
    ZeroTimeout,

    /// No animation is registered under this identifier.
    #[display("unknown animation id {id}")]
    UnknownAnimation { id: i8 },

    #[display("animation id {id} is used more than once")]
    DuplicateAnimationId { id: i8 },

    #[display("animation {animation:?} is listed more than once")]
    DuplicateAnimation { animation: Animation },

    /// The stop sentinel must use a negative identifier.
    #[display("stop sentinel uses non-negative id {id}")]
    InvalidStopId { id: i8 },

    /// Only the stop sentinel may use a negative identifier.
    #[display("animation id {id} is negative")]
    NegativeAnimationId { id: i8 },

    #[display("unknown animation mode {value}")]
    UnknownMode { value: u8 },
}
