use crate::core::data::vec2::Vec2;
use crate::core::fractal::errors::BaseError;
use crate::core::fractal::point::Point;

pub const MIN_BASE_POINTS: usize = 2;
pub const MAX_BASE_POINTS: usize = 6;

/// The editable motif: the polyline that replaces every segment at each
/// depth. Walks from an implicit origin through its points, ending on the
/// trailing anchor whose position closes the unit segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    points: Vec<Point>,
}

impl Base {
    pub fn new(points: Vec<Point>) -> Result<Self, BaseError> {
        let len = points.len();

        if len < MIN_BASE_POINTS {
            return Err(BaseError::TooFewPoints { len });
        }
        if len > MAX_BASE_POINTS {
            return Err(BaseError::TooManyPoints { len });
        }

        Ok(Self { points })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    /// The X-mirrored, order-reversed motif. Expanding a flipped segment
    /// walks the motif backwards, so each mirrored vertex takes the position
    /// of its predecessor reflected through `x = 1/2`, while flags and colour
    /// stay with their original vertex.
    #[must_use]
    pub fn inverse(&self) -> Vec<Point> {
        let len = self.points.len();
        let mut inverse = vec![Point::default(); len];
        let mut prev = Vec2::default();

        for (i, p) in self.points.iter().enumerate() {
            let mut mirrored = *p;
            mirrored.pos = Vec2 {
                x: 1.0 - prev.x,
                y: prev.y,
            };
            inverse[len - 1 - i] = mirrored;
            prev = p.pos;
        }

        inverse
    }

    pub(crate) fn insert(&mut self, index: usize, point: Point) {
        self.points.insert(index, point);
    }

    pub(crate) fn remove(&mut self, index: usize) {
        self.points.remove(index);
    }

    pub(crate) fn point_mut(&mut self, index: usize) -> &mut Point {
        &mut self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractal::flags::PointFlags;

    fn classic_base() -> Base {
        Base::new(vec![
            Point::at(0.05, 0.25),
            Point::at(0.95, -0.25),
            Point::at(1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_accepts_two_to_six_points() {
        assert!(Base::new(vec![Point::at(0.5, 0.5), Point::at(1.0, 0.0)]).is_ok());
        assert!(Base::new(vec![Point::at(1.0, 0.0); 6]).is_ok());
    }

    #[test]
    fn test_new_rejects_too_few_points() {
        assert_eq!(
            Base::new(vec![Point::at(1.0, 0.0)]),
            Err(BaseError::TooFewPoints { len: 1 })
        );
        assert_eq!(Base::new(vec![]), Err(BaseError::TooFewPoints { len: 0 }));
    }

    #[test]
    fn test_new_rejects_too_many_points() {
        assert_eq!(
            Base::new(vec![Point::at(1.0, 0.0); 7]),
            Err(BaseError::TooManyPoints { len: 7 })
        );
    }

    #[test]
    fn test_inverse_mirrors_and_reverses() {
        let base = classic_base();

        let inverse = base.inverse();

        assert_eq!(inverse[0].pos, Vec2 { x: 0.05, y: -0.25 });
        assert_eq!(inverse[1].pos, Vec2 { x: 0.95, y: 0.25 });
        assert_eq!(inverse[2].pos, Vec2 { x: 1.0, y: 0.0 });
    }

    #[test]
    fn test_inverse_keeps_flags_and_colour_with_their_vertex() {
        let base = Base::new(vec![
            Point {
                pos: Vec2 { x: 0.5, y: 0.5 },
                flags: PointFlags::FLIP_X,
                colour: 100,
            },
            Point {
                pos: Vec2 { x: 1.0, y: 0.0 },
                flags: PointFlags::FIXED_COLOUR,
                colour: 200,
            },
        ])
        .unwrap();

        let inverse = base.inverse();

        // The first source vertex lands at the mirrored end of the walk.
        assert_eq!(inverse[1].flags, PointFlags::FLIP_X);
        assert_eq!(inverse[1].colour, 100);
        assert_eq!(inverse[0].flags, PointFlags::FIXED_COLOUR);
        assert_eq!(inverse[0].colour, 200);
    }

    #[test]
    fn test_inverse_of_inverse_positions() {
        // A symmetric motif is its own mirror.
        let base = Base::new(vec![Point::at(0.5, 0.0), Point::at(1.0, 0.0)]).unwrap();

        let inverse = base.inverse();

        assert_eq!(inverse[0].pos, Vec2 { x: 0.5, y: 0.0 });
        assert_eq!(inverse[1].pos, Vec2 { x: 1.0, y: 0.0 });
    }
}
