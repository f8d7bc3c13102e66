mod controllers;
mod core;
mod storage;

pub use crate::controllers::explorer::{ExplorerConfig, explorer_controller};
pub use crate::core::actions::plot_fractal::plot_fractal::plot_fractal;
pub use crate::core::colour::table::{HUE_RANGE, HueTable};
pub use crate::core::data::affine::Affine;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_point::PixelPoint;
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::rect::Rect;
pub use crate::core::data::vec2::Vec2;
pub use crate::core::fractal::base::{Base, MAX_BASE_POINTS, MIN_BASE_POINTS};
pub use crate::core::fractal::errors::{BaseError, EditError, FractalError};
pub use crate::core::fractal::flags::PointFlags;
pub use crate::core::fractal::fractal::{DEPTH_CAP, Fractal, MAX_OOM, MIN_OOM};
pub use crate::core::fractal::point::Point;
pub use crate::storage::write_ppm::write_ppm;
