//! Hardware revisions of the briefcase and their configuration tables.
//!
//! The same setting can take different values in different revisions, so
//! every table is kept and named rather than merged.

use crate::{
    animation::{Animation, AnimationTable},
    brightness::BrightnessRange,
    color::Palette,
    config::Config,
    layout::PanelLayout,
    pins::PinAssignment,
};

#[cfg(not(any(feature = "rev1", feature = "rev2", feature = "rev3")))]
compile_error!(
    "at least one revision feature must be active. Revisions:
    - rev1
    - rev2
    - rev3
"
);

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Revision {
    /// Data line only, single-LED and wipe animations, brightness 5..=130.
    R1,
    /// As `R1` with the maximum brightness lowered to 120.
    R2,
    /// Adds the lid reed switch and switch indicator pins, the stop
    /// sentinel and the panel animations, brightness 20..=130.
    R3,
}

/// Animation ids of the first two revisions.
pub const ANIMATIONS_R1: &[(i8, Animation)] = &[(0, Animation::SingleLed), (1, Animation::Wipe)];

pub const ANIMATIONS_R3: &[(i8, Animation)] = &[
    (-1, Animation::Stop),
    (0, Animation::Breathing),
    (1, Animation::ColorWipe),
    (2, Animation::PanelWipe),
    (3, Animation::Theater),
];

const _: () = assert!(AnimationTable::new(ANIMATIONS_R1).is_well_formed());
const _: () = assert!(AnimationTable::new(ANIMATIONS_R3).is_well_formed());

const NUM_LEDS: usize = 768; // 256 * 3
const LED_DATA_PIN: u8 = 12;
const READ_PACKET_TIMEOUT_MS: u64 = 10;
const ANIMATION_CYCLES: u16 = 10;

const CONFIG_R1: Config = Config {
    num_leds: NUM_LEDS,
    layout: PanelLayout::BRIEFCASE,
    pins: PinAssignment::data_only(LED_DATA_PIN),
    read_timeout_ms: READ_PACKET_TIMEOUT_MS,
    brightness: BrightnessRange::from_bounds(5, 130),
    palette: Palette::DEFAULT,
    animation_cycles: ANIMATION_CYCLES,
    animations: AnimationTable::new(ANIMATIONS_R1),
};

const CONFIG_R2: Config = Config {
    brightness: BrightnessRange::from_bounds(5, 120),
    ..CONFIG_R1
};

const CONFIG_R3: Config = Config {
    pins: PinAssignment {
        led_data: LED_DATA_PIN,
        lid: Some(10),
        switch: Some(6),
    },
    brightness: BrightnessRange::from_bounds(20, 130),
    animations: AnimationTable::new(ANIMATIONS_R3),
    ..CONFIG_R1
};

impl Revision {
    pub const ALL: [Revision; 3] = [Revision::R1, Revision::R2, Revision::R3];

    pub const LATEST: Revision = Revision::R3;

    /// Revision selected by cargo feature. The newest enabled one wins.
    #[cfg(feature = "rev3")]
    pub const ACTIVE: Revision = Revision::R3;
    #[cfg(all(feature = "rev2", not(feature = "rev3")))]
    pub const ACTIVE: Revision = Revision::R2;
    #[cfg(all(feature = "rev1", not(any(feature = "rev2", feature = "rev3"))))]
    pub const ACTIVE: Revision = Revision::R1;

    pub const fn config(self) -> &'static Config {
        match self {
            Revision::R1 => &CONFIG_R1,
            Revision::R2 => &CONFIG_R2,
            Revision::R3 => &CONFIG_R3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationMode;

    #[test]
    fn every_revision_validates() {
        for revision in Revision::ALL {
            assert_eq!(revision.config().validate(), Ok(()), "{:?}", revision);
        }
    }

    #[test]
    fn shared_values() {
        for revision in Revision::ALL {
            let config = revision.config();
            assert_eq!(config.num_leds(), 768);
            assert_eq!(config.pins().led_data, 12);
            assert_eq!(config.read_timeout_ms(), 10);
            assert_eq!(config.animation_cycles(), 10);
            assert_eq!(config.palette(), Palette::DEFAULT);
        }
    }

    #[test]
    fn brightness_per_revision() {
        let bounds = |r: Revision| {
            let range = r.config().brightness();
            (range.min(), range.max())
        };
        assert_eq!(bounds(Revision::R1), (5, 130));
        assert_eq!(bounds(Revision::R2), (5, 120));
        assert_eq!(bounds(Revision::R3), (20, 130));
    }

    #[test]
    fn pins_per_revision() {
        assert_eq!(Revision::R1.config().pins(), PinAssignment::data_only(12));
        assert_eq!(Revision::R2.config().pins(), PinAssignment::data_only(12));
        let pins = Revision::R3.config().pins();
        assert_eq!((pins.led_data, pins.lid, pins.switch), (12, Some(10), Some(6)));
    }

    #[test]
    fn animations_per_revision() {
        let r1 = Revision::R1.config().animations();
        assert_eq!(r1.len(), 2);
        assert_eq!(r1.get(0), Ok(Animation::SingleLed));
        assert_eq!(r1.get(1), Ok(Animation::Wipe));
        assert_eq!(r1.stop_id(), None);
        assert_eq!(Revision::R2.config().animations(), r1);

        let r3 = Revision::R3.config().animations();
        assert_eq!(r3.len(), 5);
        assert_eq!(r3.stop_id(), Some(-1));
        assert_eq!(r3.id_of(Animation::Breathing), Some(0));
        assert_eq!(r3.id_of(Animation::ColorWipe), Some(1));
        assert_eq!(r3.id_of(Animation::PanelWipe), Some(2));
        assert_eq!(r3.id_of(Animation::Theater), Some(3));
        assert_eq!(r3.iter().filter(|(id, _)| *id < 0).count(), 1);
    }

    #[test]
    fn modes_are_shared() {
        assert_eq!(AnimationMode::Single.as_u8(), 0);
        assert_eq!(AnimationMode::Loop.as_u8(), 1);
    }

    #[test]
    fn ordering_follows_history() {
        assert!(Revision::R1 < Revision::R2);
        assert!(Revision::R2 < Revision::LATEST);
        assert_eq!(Revision::ALL.iter().max(), Some(&Revision::LATEST));
    }
}
