//! Separable quadratic fitting for (row, col) refinement.

use crate::geom::{RowCol, Spot};
use crate::refine::quad1d::quad_peak_offset_1d;

/// Refines a sub-pixel peak using separable 1D quadratic fits.
///
/// The input is a 3x3 neighborhood of scores centered at `s[1][1]`, indexed
/// `s[row][col]`. The row offset comes from the center column and the column
/// offset from the center row; an axis whose fit is ill-conditioned keeps the
/// integer coordinate.
pub(crate) fn refine_spot_2d(center: RowCol, s: [[f64; 3]; 3]) -> Spot {
    let drow = quad_peak_offset_1d(s[0][1], s[1][1], s[2][1]).unwrap_or(0.0);
    let dcol = quad_peak_offset_1d(s[1][0], s[1][1], s[1][2]).unwrap_or(0.0);

    Spot::new(center.row as f64 + drow, center.col as f64 + dcol)
}
