//! Three-point parabola vertex for one axis of a score surface.

/// Vertex offset of the parabola through `(-1, before)`, `(0, at)`,
/// `(+1, after)`.
///
/// Off-grid neighbors arrive as non-finite scores. The offset is only
/// reported for a downward-opening parabola whose vertex lies within one
/// sample of the center; anything else (missing neighbor, flat or upward
/// curvature, runaway vertex) returns `None` and the caller keeps the integer
/// position.
pub(crate) fn quad_peak_offset_1d(before: f64, at: f64, after: f64) -> Option<f64> {
    if ![before, at, after].iter().all(|v| v.is_finite()) {
        return None;
    }

    const MIN_CURVATURE: f64 = 1e-12;
    let curvature = before - 2.0 * at + after;
    if curvature > -MIN_CURVATURE {
        return None;
    }

    let offset = 0.5 * (before - after) / curvature;
    (offset.is_finite() && offset.abs() <= 1.0).then_some(offset)
}
