//! Flat constants of the active revision, for code that reads settings by
//! name. The revision is picked with the `rev1` / `rev2` / `rev3` features.

use crate::{
    animation::{Animation, AnimationMode, AnimationTable},
    color::Color,
    config::Config,
    revision::Revision,
};

pub const REVISION: Revision = Revision::ACTIVE;
pub const CONFIG: &Config = REVISION.config();

pub const NUM_LEDS: usize = CONFIG.num_leds();
pub const PANEL_COUNT: usize = CONFIG.layout().panels();
pub const LEDS_PER_PANEL: usize = CONFIG.layout().leds_per_panel();

/// Neopixel signal line.
pub const LED_DATA_PIN: u8 = CONFIG.pins().led_data;
/// Lid reed switch. Not present before revision 3.
pub const LID_PIN: Option<u8> = CONFIG.pins().lid;
/// Switch indicator LED, active-low. Not present before revision 3.
pub const SWITCH_PIN: Option<u8> = CONFIG.pins().switch;

/// Timeout in ms waiting to read a response.
pub const READ_PACKET_TIMEOUT_MS: u64 = CONFIG.read_timeout_ms();

pub const MIN_BRIGHT: u8 = CONFIG.brightness().min();
pub const MAX_BRIGHT: u8 = CONFIG.brightness().max();

/// Number of animation cycles to execute before exiting.
pub const ANIMATION_CYCLES: u16 = CONFIG.animation_cycles();

pub const DEFAULT_COLOR_1: Color = CONFIG.palette().color_1;
pub const DEFAULT_COLOR_2: Color = CONFIG.palette().color_2;
pub const DEFAULT_COLOR_RED: Color = CONFIG.palette().red;

pub const ANIMATIONS: AnimationTable = CONFIG.animations();

pub const SINGLE_ANIMATION: AnimationMode = AnimationMode::Single;
pub const LOOP_ANIMATION: AnimationMode = AnimationMode::Loop;

/// Identifier of `animation` in the active table, `None` if this revision
/// does not have it.
pub const fn animation_id(animation: Animation) -> Option<i8> {
    ANIMATIONS.id_of(animation)
}

const fn required_id(animation: Animation) -> i8 {
    match animation_id(animation) {
        Some(id) => id,
        None => panic!("animation missing from the active revision"),
    }
}

#[cfg(feature = "rev3")]
pub const ANIMATION_STOP: i8 = required_id(Animation::Stop);
#[cfg(feature = "rev3")]
pub const ANIMATION_BREATHING: i8 = required_id(Animation::Breathing);
#[cfg(feature = "rev3")]
pub const ANIMATION_COLOR_WIPE: i8 = required_id(Animation::ColorWipe);
#[cfg(feature = "rev3")]
pub const ANIMATION_PANEL_WIPE: i8 = required_id(Animation::PanelWipe);
#[cfg(feature = "rev3")]
pub const ANIMATION_THEATER: i8 = required_id(Animation::Theater);

/// Single LED moving through all the LEDs.
#[cfg(not(feature = "rev3"))]
pub const ANIMATION_SINGLE_LED: i8 = required_id(Animation::SingleLed);
/// Wipe all the LEDs.
#[cfg(not(feature = "rev3"))]
pub const ANIMATION_WIPE: i8 = required_id(Animation::Wipe);

const _: () = assert!(MIN_BRIGHT < MAX_BRIGHT);
const _: () = assert!(NUM_LEDS > 0);
const _: () = assert!(PANEL_COUNT * LEDS_PER_PANEL == NUM_LEDS);
const _: () = assert!(CONFIG.pins().is_distinct());
const _: () = assert!(DEFAULT_COLOR_1.packed() <= 0xFF_FFFF);
const _: () = assert!(DEFAULT_COLOR_2.packed() <= 0xFF_FFFF);
const _: () = assert!(DEFAULT_COLOR_RED.packed() <= 0xFF_FFFF);
