//! Animation identifiers and looping modes.
//!
//! Identifiers are plain integers in the firmware. Each
//! revision ships its own closed table mapping them to [`Animation`]s; the
//! newest table reserves a negative identifier as the stop sentinel.

use crate::error::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Animation {
    /// Stop sentinel. Not an animation that can be played.
    Stop,
    /// A single LED moves through the whole strip, alternating between
    /// `color_1` and `color_2` on each pass.
    SingleLed,
    /// Wipes all LEDs, alternating between `color_1` and `color_2`.
    Wipe,
    Breathing,
    ColorWipe,
    /// Wipes one panel at a time.
    PanelWipe,
    /// Theater-marquee chase.
    Theater,
}

impl Animation {
    pub const fn is_stop(self) -> bool {
        matches!(self, Animation::Stop)
    }
}

/// Closed mapping between identifiers and animations for one revision.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnimationTable {
    entries: &'static [(i8, Animation)],
}

#[cfg(feature = "defmt")]
impl defmt::Format for AnimationTable {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "AnimationTable({=usize} entries)", self.entries.len());
    }
}

impl AnimationTable {
    pub const fn new(entries: &'static [(i8, Animation)]) -> Self {
        Self { entries }
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i8, Animation)> + 'static {
        self.entries.iter().copied()
    }

    /// All entries except the stop sentinel.
    pub fn playable(&self) -> impl Iterator<Item = (i8, Animation)> + 'static {
        self.iter().filter(|(_, animation)| !animation.is_stop())
    }

    pub const fn get(&self, id: i8) -> Result<Animation, Error> {
        let mut idx = 0;
        while idx < self.entries.len() {
            let (entry_id, animation) = self.entries[idx];
            if entry_id == id {
                return Ok(animation);
            }
            idx += 1;
        }
        Err(Error::UnknownAnimation { id })
    }

    pub const fn id_of(&self, animation: Animation) -> Option<i8> {
        let mut idx = 0;
        while idx < self.entries.len() {
            let (id, entry) = self.entries[idx];
            if entry as u8 == animation as u8 {
                return Some(id);
            }
            idx += 1;
        }
        None
    }

    pub const fn contains(&self, animation: Animation) -> bool {
        self.id_of(animation).is_some()
    }

    pub const fn stop_id(&self) -> Option<i8> {
        self.id_of(Animation::Stop)
    }

    /// Const form of [`Self::validate`] for build-time assertions on the
    /// revision tables.
    pub const fn is_well_formed(&self) -> bool {
        let mut idx = 0;
        while idx < self.entries.len() {
            let (id, animation) = self.entries[idx];
            if animation.is_stop() == (id >= 0) {
                return false;
            }
            let mut other = idx + 1;
            while other < self.entries.len() {
                let (other_id, other_animation) = self.entries[other];
                if other_id == id || other_animation as u8 == animation as u8 {
                    return false;
                }
                other += 1;
            }
            idx += 1;
        }
        true
    }

    /// Identifiers and animations are unique (so there is at most one stop
    /// sentinel), and only the sentinel uses a negative identifier.
    pub fn validate(&self) -> Result<(), Error> {
        for (idx, &(id, animation)) in self.entries.iter().enumerate() {
            let rest = &self.entries[idx + 1..];
            if rest.iter().any(|(other, _)| *other == id) {
                return Err(Error::DuplicateAnimationId { id });
            }
            if rest.iter().any(|(_, other)| *other == animation) {
                return Err(Error::DuplicateAnimation { animation });
            }
            if animation.is_stop() && id >= 0 {
                return Err(Error::InvalidStopId { id });
            }
            if !animation.is_stop() && id < 0 {
                return Err(Error::NegativeAnimationId { id });
            }
        }
        Ok(())
    }
}

/// Whether the runner plays one animation or cycles through all of them.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AnimationMode {
    #[default]
    Single = 0,
    Loop = 1,
}

impl AnimationMode {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn repeats(self) -> bool {
        matches!(self, AnimationMode::Loop)
    }
}

impl TryFrom<u8> for AnimationMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AnimationMode::Single),
            1 => Ok(AnimationMode::Loop),
            _ => Err(Error::UnknownMode { value }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITH_STOP: AnimationTable = AnimationTable::new(&[
        (-1, Animation::Stop),
        (0, Animation::Breathing),
        (1, Animation::ColorWipe),
    ]);

    #[test]
    fn lookups() {
        assert_eq!(WITH_STOP.get(-1), Ok(Animation::Stop));
        assert_eq!(WITH_STOP.get(1), Ok(Animation::ColorWipe));
        assert_eq!(
            WITH_STOP.get(2),
            Err(Error::UnknownAnimation { id: 2 })
        );
        assert_eq!(WITH_STOP.id_of(Animation::Breathing), Some(0));
        assert_eq!(WITH_STOP.id_of(Animation::Theater), None);
        assert_eq!(WITH_STOP.stop_id(), Some(-1));
        assert_eq!(WITH_STOP.playable().count(), 2);
        assert_eq!(WITH_STOP.validate(), Ok(()));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let table = AnimationTable::new(&[(0, Animation::Wipe), (0, Animation::SingleLed)]);
        assert_eq!(table.validate(), Err(Error::DuplicateAnimationId { id: 0 }));
    }

    #[test]
    fn const_check_agrees_with_validate() {
        let tables = [
            WITH_STOP,
            AnimationTable::new(&[(0, Animation::SingleLed), (1, Animation::Wipe)]),
            AnimationTable::new(&[(0, Animation::Wipe), (0, Animation::SingleLed)]),
            AnimationTable::new(&[(0, Animation::Wipe), (1, Animation::Wipe)]),
            AnimationTable::new(&[(-1, Animation::Stop), (-2, Animation::Stop)]),
            AnimationTable::new(&[(4, Animation::Stop)]),
            AnimationTable::new(&[(-2, Animation::Theater)]),
        ];
        for table in tables {
            assert_eq!(table.is_well_formed(), table.validate().is_ok(), "{:?}", table);
        }
    }

    #[test]
    fn lookups_work_in_const_context() {
        const THEATER: Option<i8> = WITH_STOP.id_of(Animation::Theater);
        const COLOR_WIPE: Option<i8> = WITH_STOP.id_of(Animation::ColorWipe);
        const STOP: Option<i8> = WITH_STOP.stop_id();
        assert_eq!(THEATER, None);
        assert_eq!(COLOR_WIPE, Some(1));
        assert_eq!(STOP, Some(-1));
    }

    #[test]
    fn rejects_duplicate_animations() {
        let table = AnimationTable::new(&[(0, Animation::Wipe), (1, Animation::Wipe)]);
        assert_eq!(
            table.validate(),
            Err(Error::DuplicateAnimation {
                animation: Animation::Wipe
            })
        );
    }

    #[test]
    fn stop_sentinel_must_be_negative() {
        let table = AnimationTable::new(&[(4, Animation::Stop), (0, Animation::Wipe)]);
        assert_eq!(table.validate(), Err(Error::InvalidStopId { id: 4 }));
    }

    #[test]
    fn only_stop_may_be_negative() {
        let table = AnimationTable::new(&[(-2, Animation::Theater)]);
        assert_eq!(
            table.validate(),
            Err(Error::NegativeAnimationId { id: -2 })
        );
    }

    #[test]
    fn table_without_stop_is_valid() {
        let table = AnimationTable::new(&[(0, Animation::SingleLed), (1, Animation::Wipe)]);
        assert_eq!(table.validate(), Ok(()));
        assert_eq!(table.stop_id(), None);
    }

    #[test]
    fn modes() {
        assert_eq!(AnimationMode::try_from(0_u8), Ok(AnimationMode::Single));
        assert_eq!(AnimationMode::try_from(1_u8), Ok(AnimationMode::Loop));
        assert_eq!(
            AnimationMode::try_from(2_u8),
            Err(Error::UnknownMode { value: 2 })
        );
        assert!(AnimationMode::Loop.repeats());
        assert!(!AnimationMode::Single.repeats());
        assert_eq!(AnimationMode::Loop.as_u8(), 1);
    }
}
