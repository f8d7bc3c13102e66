use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::rect::Rect;
use crate::core::data::vec2::Vec2;

/// A 2D affine transform: `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

fn span_or_placeholder(span: f64) -> f64 {
    if span == 0.0 { -1.0 } else { span }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// The similarity that carries the unit segment `(0,0)-(1,0)` onto
    /// `p0-p1`, rotating and scaling uniformly.
    #[must_use]
    pub fn between_segment(p0: Vec2, p1: Vec2) -> Self {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let scale = dx.hypot(dy);
        let theta = dy.atan2(dx);
        let sc = scale * theta.cos();
        let ss = scale * theta.sin();

        Self {
            a: sc,
            b: ss,
            c: -ss,
            d: sc,
            e: p0.x,
            f: p0.y,
        }
    }

    /// The axis-aligned forward and inverse pair carrying `r0` onto `r1`.
    /// Scales X and Y independently, never rotates. A zero span on the
    /// dividing rectangle's axis substitutes -1.0 as the divisor so the
    /// result stays finite; callers fit padded bounds and never divide by a
    /// collapsed axis in practice.
    #[must_use]
    pub fn between_rects(r0: Rect, r1: Rect) -> (Self, Self) {
        let s0 = r0.size();
        let s1 = r1.size();

        let sx = s1.x / span_or_placeholder(s0.x);
        let sy = s1.y / span_or_placeholder(s0.y);
        let to = Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            e: r1.min.x - r0.min.x * sx,
            f: r1.min.y - r0.min.y * sy,
        };

        let fx = s0.x / span_or_placeholder(s1.x);
        let fy = s0.y / span_or_placeholder(s1.y);
        let from = Self {
            a: fx,
            b: 0.0,
            c: 0.0,
            d: fy,
            e: r0.min.x - r1.min.x * fx,
            f: r0.min.y - r1.min.y * fy,
        };

        (to, from)
    }

    #[must_use]
    pub fn project(&self, v: Vec2) -> Vec2 {
        Vec2 {
            x: self.a * v.x + self.c * v.y + self.e,
            y: self.b * v.x + self.d * v.y + self.f,
        }
    }

    /// Inverts the map by solving the 2x2 linear system.
    #[must_use]
    pub fn unproject(&self, v: Vec2) -> Vec2 {
        let det = self.a * self.d - self.b * self.c;
        let rx = v.x - self.e;
        let ry = v.y - self.f;

        Vec2 {
            x: (self.d * rx - self.c * ry) / det,
            y: (self.a * ry - self.b * rx) / det,
        }
    }

    #[must_use]
    pub fn project_pixel(&self, v: Vec2) -> PixelPoint {
        let projected = self.project(v);

        PixelPoint {
            x: projected.x as i32,
            y: projected.y as i32,
        }
    }
}
