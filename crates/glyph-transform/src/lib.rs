//! # Glyph transform
//!
//! Maps a glyph outline from a font's design coordinates onto the
//! `DEFAULT_SIZE` square canvas. Which mapping applies is a [`ScalePolicy`],
//! chosen from the output's Y-axis flip and an optional maximum scale.
//!
//! ## Example
//!
//! ```
//! use glyphsplit_glyph_transform::transform;
//! use glyphsplit_svg_font::FontMetrics;
//!
//! let metrics = FontMetrics::new(1024, 1024, 1024, 0);
//! // Flipped uniform fit: y' = -(y - 1024) * 2
//! let placed = transform("M0 0L1024 1024", 1024, &metrics, true, None).unwrap();
//! assert_eq!(placed, "M0 2048L2048 0");
//! ```

mod error;
mod path;
mod policy;

use std::borrow::Cow;

use glyphsplit_svg_font::{DEFAULT_SIZE, FontMetrics};
use kurbo::{Affine, BezPath, Rect, Shape, Vec2};

pub use error::{Error, Result};
pub use path::format_path;
pub use policy::ScalePolicy;

/// Half of the target canvas.
const HALF_SIZE: f64 = DEFAULT_SIZE as f64 / 2.0;

/// Transform one glyph's path data for the output canvas.
///
/// `advance_width` is the glyph's own advance (see
/// [`FontMetrics::glyph_advance`]). A pass-through returns `path_data`
/// untouched; every other policy reparses and reserialises the outline.
pub fn transform<'a>(
    path_data: &'a str,
    advance_width: u32,
    metrics: &FontMetrics,
    flip: bool,
    max_scale: Option<f64>,
) -> Result<Cow<'a, str>> {
    let policy = ScalePolicy::select(flip, max_scale);
    if policy == ScalePolicy::PassThrough {
        return Ok(Cow::Borrowed(path_data));
    }

    let mut path = BezPath::from_svg(path_data)?;
    apply(&mut path, policy, advance_width, metrics, flip);
    Ok(Cow::Owned(format_path(&path)))
}

/// Apply a policy to an already parsed outline.
pub fn apply(
    path: &mut BezPath,
    policy: ScalePolicy,
    advance_width: u32,
    metrics: &FontMetrics,
    flip: bool,
) {
    match policy {
        ScalePolicy::PassThrough => {}
        ScalePolicy::UniformFit => {
            let scale = uniform_scale(advance_width, metrics, flip);
            apply_translate_then_scale(path, baseline_shift(metrics, flip), scale);
        }
        ScalePolicy::FlipOnly => {
            let scale = Vec2::new(1.0, y_sign(flip));
            apply_translate_then_scale(path, baseline_shift(metrics, flip), scale);
        }
        ScalePolicy::CenteredFit { max_scale } => {
            centered_fit(path, advance_width, metrics, flip, max_scale);
        }
    }
}

/// X and Y scale factors of the uniform fit.
pub fn uniform_scale(advance_width: u32, metrics: &FontMetrics, flip: bool) -> Vec2 {
    let target = f64::from(DEFAULT_SIZE);
    let advance = f64::from(metrics.glyph_advance(Some(advance_width)));
    Vec2::new(target / advance, y_sign(flip) * target / f64::from(metrics.em_square()))
}

/// Vertical translation applied before scaling: ascent up to the top of the
/// canvas when flipping, descent up to the baseline otherwise.
pub fn baseline_shift(metrics: &FontMetrics, flip: bool) -> f64 {
    if flip { -f64::from(metrics.ascent) } else { f64::from(metrics.descent) }
}

/// Largest uniform scale keeping a centered outline inside the canvas.
///
/// Each of the four extents of `bounds` (measured from the origin) is fitted
/// to half the canvas; sides the outline does not reach are ignored. An
/// outline with no extent at all is left at scale 1.
pub fn fit_scale(bounds: Rect) -> f64 {
    [-bounds.x0, bounds.x1, -bounds.y0, bounds.y1]
        .into_iter()
        .filter(|extent| *extent > f64::EPSILON)
        .map(|extent| HALF_SIZE / extent)
        .reduce(f64::min)
        .unwrap_or(1.0)
}

/// Center the outline on the origin, measure it, fit it (clamped to
/// `max_scale`), then move it to the canvas center. Returns the scale used.
///
/// The bounds must be measured after centering: the scale depends on them.
pub fn centered_fit(
    path: &mut BezPath,
    advance_width: u32,
    metrics: &FontMetrics,
    flip: bool,
    max_scale: f64,
) -> f64 {
    let advance = f64::from(metrics.glyph_advance(Some(advance_width)));
    let em = f64::from(metrics.em_square());
    let center = Affine::scale_non_uniform(1.0, y_sign(flip))
        * Affine::translate((-advance / 2.0, -em / 2.0));
    path.apply_affine(center);

    let mut scale = fit_scale(path.bounding_box());
    if max_scale > 0.0 {
        scale = scale.min(max_scale);
    }

    path.apply_affine(Affine::translate((HALF_SIZE, HALF_SIZE)) * Affine::scale(scale));
    scale
}

fn apply_translate_then_scale(path: &mut BezPath, shift: f64, scale: Vec2) {
    let affine = Affine::scale_non_uniform(scale.x, scale.y) * Affine::translate((0.0, shift));
    if affine != Affine::IDENTITY {
        path.apply_affine(affine);
    }
}

fn y_sign(flip: bool) -> f64 {
    if flip { -1.0 } else { 1.0 }
}
