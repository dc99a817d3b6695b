//! Choosing how an outline is placed on the canvas.

/// How a glyph outline is mapped onto the output canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalePolicy {
    /// Leave the path data untouched.
    PassThrough,
    /// Shift to the baseline, then scale the advance width and em-square to
    /// the canvas.
    UniformFit,
    /// Shift and flip the Y axis without resizing.
    FlipOnly,
    /// Center on the origin, fit the measured bounds to the canvas with the
    /// scale clamped to `max_scale`, then move to the canvas center.
    CenteredFit { max_scale: f64 },
}

impl ScalePolicy {
    /// Select the policy for an output with the given Y-axis flip and a
    /// mapping record's maximum scale.
    ///
    /// | `max_scale`  | no flip       | flip          |
    /// |--------------|---------------|---------------|
    /// | absent       | pass-through  | uniform fit   |
    /// | zero         | uniform fit   | uniform fit   |
    /// | negative     | pass-through  | flip only     |
    /// | positive     | centered fit  | centered fit  |
    pub fn select(flip: bool, max_scale: Option<f64>) -> Self {
        match max_scale.filter(|s| !s.is_nan()) {
            Some(s) if s > 0.0 => Self::CenteredFit { max_scale: s },
            Some(s) if s < 0.0 => {
                if flip {
                    Self::FlipOnly
                } else {
                    Self::PassThrough
                }
            }
            None if !flip => Self::PassThrough,
            _ => Self::UniformFit,
        }
    }
}
