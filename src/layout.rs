//! Physical arrangement of the strip: identical panels chained end to end.

use core::ops::Range;

use crate::error::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelLayout {
    panels: usize,
    leds_per_panel: usize,
}

impl PanelLayout {
    /// Three 16x16 panels.
    pub const BRIEFCASE: PanelLayout = PanelLayout::from_parts(3, 256);

    pub const fn new(panels: usize, leds_per_panel: usize) -> Result<Self, Error> {
        if panels == 0 || leds_per_panel == 0 || panels.checked_mul(leds_per_panel).is_none() {
            return Err(Error::EmptyLayout);
        }
        Ok(Self {
            panels,
            leds_per_panel,
        })
    }

    pub(crate) const fn from_parts(panels: usize, leds_per_panel: usize) -> Self {
        assert!(panels > 0 && leds_per_panel > 0, "panel layout is empty");
        Self {
            panels,
            leds_per_panel,
        }
    }

    pub const fn panels(&self) -> usize {
        self.panels
    }

    pub const fn leds_per_panel(&self) -> usize {
        self.leds_per_panel
    }

    pub const fn leds(&self) -> usize {
        self.panels * self.leds_per_panel
    }

    /// Panel the LED at `led` belongs to, if it is on the strip.
    pub const fn panel_of(&self, led: usize) -> Option<usize> {
        if led >= self.leds() {
            return None;
        }
        Some(led / self.leds_per_panel)
    }

    /// LED indices covered by `panel`.
    pub fn panel_range(&self, panel: usize) -> Option<Range<usize>> {
        if panel >= self.panels {
            return None;
        }
        let start = panel * self.leds_per_panel;
        Some(start..start + self.leds_per_panel)
    }
}
