//! Configuration of the blu-clear-briefcase: a briefcase lined with three
//! 16x16 neopixel panels, a lid reed switch and an active-low switch
//! indicator LED.
//!
//! The crate does not drive the LEDs itself. It names and bounds the values
//! the animation firmware runs with, for each hardware [`Revision`].
#![cfg_attr(not(test), no_std)]

pub mod animation;
pub mod brightness;
pub mod color;
pub mod conf;
pub mod config;
pub mod error;
pub mod layout;
pub mod pins;
pub mod revision;

pub use animation::{Animation, AnimationMode, AnimationTable};
pub use brightness::BrightnessRange;
pub use color::{Color, Palette};
pub use config::{Config, ConfigBuilder};
pub use error::Error;
pub use layout::PanelLayout;
pub use pins::{Indicator, PinAssignment, Polarity};
pub use revision::Revision;
