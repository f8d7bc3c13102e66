pub mod hsv;
pub mod table;

pub use hsv::{hsv_to_rgb, mod_plus, sat_mod};
pub use table::{HUE_RANGE, HueTable};
