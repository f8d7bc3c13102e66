use crate::core::colour::hsv::{hsv_to_rgb, mod_plus};
use crate::core::data::colour::Colour;

/// Number of hue table entries. Point colour indices live in `0..HUE_RANGE`.
pub const HUE_RANGE: i32 = 1024;

/// Precomputed fully saturated hue wheel, one entry per colour index.
#[derive(Debug, Clone)]
pub struct HueTable {
    colours: Vec<Colour>,
}

impl HueTable {
    #[must_use]
    pub fn new() -> Self {
        let colours = (0..HUE_RANGE)
            .map(|i| hsv_to_rgb(i * 360 / HUE_RANGE, 255, 255))
            .collect();

        Self { colours }
    }

    /// Looks up a colour index, wrapping out-of-range indices into the table.
    #[must_use]
    pub fn colour(&self, index: i32) -> Colour {
        self.colours[mod_plus(index, HUE_RANGE) as usize]
    }
}

impl Default for HueTable {
    fn default() -> Self {
        Self::new()
    }
}
