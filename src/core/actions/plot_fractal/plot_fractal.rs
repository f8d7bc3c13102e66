use crate::core::data::affine::Affine;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::rect::Rect;
use crate::core::data::vec2::Vec2;
use crate::core::fractal::fractal::Fractal;

/// Rasterises every rendered depth of the curve into one frame.
///
/// The curve bounds are fitted to the pixel rect's aspect ratio and the Y
/// axis is inverted so positive Y points up on screen. Each depth draws its
/// full polyline, starting from the implicit origin, over the shallower ones
/// with additive blending, so overlapping structure brightens.
#[must_use]
pub fn plot_fractal(fractal: &Fractal, pixel_rect: PixelRect, zoom_steps: i32) -> PixelBuffer {
    let viewport = Rect {
        min: Vec2::default(),
        max: Vec2 {
            x: f64::from(pixel_rect.width()),
            y: f64::from(pixel_rect.height()),
        },
    };
    let bounds = fractal.adjusted_bounds(viewport, zoom_steps);

    // World min.y lands on the bottom pixel row, max.y on the top one.
    let screen = Rect {
        min: Vec2 {
            x: f64::from(pixel_rect.top_left().x),
            y: f64::from(pixel_rect.bottom_right().y),
        },
        max: Vec2 {
            x: f64::from(pixel_rect.bottom_right().x),
            y: f64::from(pixel_rect.top_left().y),
        },
    };
    let (to_screen, _) = Affine::between_rects(bounds, screen);

    let mut buffer = PixelBuffer::new(pixel_rect);
    for depth in 1..=fractal.depth() {
        let Some(points) = fractal.points(depth) else {
            continue;
        };

        let mut prev = to_screen.project(Vec2::default());
        for p in points {
            let next = to_screen.project(p.pos);
            plot_line(&mut buffer, prev, next, fractal.colour(p.colour));
            prev = next;
        }
    }

    buffer
}

/// Draws one segment with a DDA walk of `max(|dx|, |dy|) + 1` samples.
fn plot_line(buffer: &mut PixelBuffer, from: Vec2, to: Vec2, colour: Colour) {
    let delta = to - from;
    let steps = delta.x.abs().max(delta.y.abs()) as i32;

    for i in 0..=steps {
        let t = if steps == 0 {
            0.0
        } else {
            f64::from(i) / f64::from(steps)
        };
        let pixel = PixelPoint {
            x: (from.x + delta.x * t) as i32,
            y: (from.y + delta.y * t) as i32,
        };
        // Samples outside the frame clip.
        let _ = buffer.blend_pixel(pixel, colour);
    }
}
