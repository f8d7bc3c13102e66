use rayon::prelude::*;

use crate::core::fractal::fractal::{Fractal, expand_segment};
use crate::core::fractal::point::Point;

impl Fractal {
    /// Renders one depth window in parallel using rayon's work-stealing
    /// scheduler. Each segment of the previous depth expands independently
    /// into its own motif-sized chunk, so the windows split cleanly.
    ///
    /// Produces exactly the same points as [`Fractal::render`] and follows
    /// the same rules: false when the depth is out of range or its
    /// predecessor has not been rendered yet.
    pub fn render_parallel(&mut self, depth: usize) -> bool {
        if depth < 2 {
            return self.render(depth);
        }
        if depth >= self.max_depth() {
            return false;
        }
        if depth - 1 > self.depth() {
            log::warn!(
                "cannot render depth {}: depth {} has not been rendered",
                depth,
                depth - 1
            );
            return false;
        }

        let len = self.base().len();
        let (src_range, dest_range) = self.window_pair(depth);
        let (base, inverse, data) = self.expansion_parts();

        let (head, tail) = data.split_at_mut(dest_range.start);
        let src = &head[src_range];
        let dest = &mut tail[..dest_range.len()];

        dest.par_chunks_mut(len)
            .enumerate()
            .for_each(|(i, chunk)| {
                let p0 = if i == 0 { Point::default() } else { src[i - 1] };
                expand_segment(base, inverse, p0, src[i], chunk);
            });

        self.finish_depth(depth);
        true
    }

    /// Renders the next unrendered depth in parallel, if any remains in
    /// budget.
    pub fn render_next_parallel(&mut self) -> bool {
        if self.depth() + 1 < self.max_depth() {
            self.render_parallel(self.depth() + 1)
        } else {
            false
        }
    }
}
