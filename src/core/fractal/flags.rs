use bitflags::bitflags;

bitflags! {
    /// Per-point behaviour flags.
    ///
    /// `FLIP_X` expands the following segment with the mirrored motif and
    /// `FLIP_Y` negates motif Y; both compose through depths by XOR, so two
    /// stacked flips cancel. `FIXED_COLOUR` pins the point's own hue through
    /// every expansion. `HIDE` and `PRUNE` are carried untouched.
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
    pub struct PointFlags: u8 {
        const HIDE = 1;
        const PRUNE = 2;
        const FLIP_X = 4;
        const FLIP_Y = 8;
        const FIXED_COLOUR = 16;
    }
}

impl PointFlags {
    /// The flags that propagate into expanded segments.
    #[must_use]
    pub fn flips(self) -> PointFlags {
        self & (PointFlags::FLIP_X | PointFlags::FLIP_Y)
    }
}
