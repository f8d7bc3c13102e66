use crate::core::data::vec2::Vec2;
use crate::core::fractal::flags::PointFlags;

/// One vertex of the curve: a position, behaviour flags and a hue table
/// index. The engine keeps `colour` inside `0..1024`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    pub flags: PointFlags,
    pub colour: i16,
}

impl Point {
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            pos: Vec2 { x, y },
            ..Self::default()
        }
    }
}
