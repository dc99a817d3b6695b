//! Path data serialisation.

use std::fmt::Write;

use kurbo::{BezPath, PathEl, Point};

/// Decimal places kept in serialised coordinates.
const PRECISION: f64 = 1000.0;

/// Serialise a path as compact SVG path data, e.g. `M0 0L10 5.5Z`.
///
/// Coordinates are rounded to three decimals with trailing zeros dropped.
pub fn format_path(path: &BezPath) -> String {
    let mut out = String::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => push_command(&mut out, 'M', &[p]),
            PathEl::LineTo(p) => push_command(&mut out, 'L', &[p]),
            PathEl::QuadTo(p1, p2) => push_command(&mut out, 'Q', &[p1, p2]),
            PathEl::CurveTo(p1, p2, p3) => push_command(&mut out, 'C', &[p1, p2, p3]),
            PathEl::ClosePath => out.push('Z'),
        }
    }
    out
}

fn push_command(out: &mut String, command: char, points: &[Point]) {
    out.push(command);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{} {}", round(p.x), round(p.y));
    }
}

fn round(v: f64) -> f64 {
    let rounded = (v * PRECISION).round() / PRECISION;
    // Avoid "-0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_all_commands() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, -5.5));
        path.quad_to((1.0, 2.0), (3.0, 4.0));
        path.curve_to((1.0, 1.0), (2.0, 2.0), (3.25, 3.0));
        path.close_path();
        assert_eq!(format_path(&path), "M0 0L10 -5.5Q1 2 3 4C1 1 2 2 3.25 3Z");
    }

    #[test]
    fn rounds_noise_and_negative_zero() {
        let mut path = BezPath::new();
        path.move_to((-0.0000001, 1638.3999999999999));
        path.line_to((1.23456, 2047.99999999));
        assert_eq!(format_path(&path), "M0 1638.4L1.235 2048");
    }
}
