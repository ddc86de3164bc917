//! Overlap of two grids under a known translation.

use crate::geom::{Extents, IndexInterval, SubRegion, Translation};
use crate::trace::{trace_event, trace_span};

/// Region of grid A covered by grid B after shifting B into A's frame.
///
/// Per axis, B spans `[t, t + n_b)` in A's frame. That span is intersected
/// with `[0, n_a)` and widened to the enclosing integer interval
/// `[floor(lo), ceil(hi))`. Empty overlap, empty extents, or a non-finite
/// translation yield `SubRegion::null()`.
///
/// Swapping the grids and inverting the translation describes the same
/// physical overlap in B's frame.
pub fn common_crop_in_1(
    extents_a: Extents,
    translation_b_to_a: Translation,
    extents_b: Extents,
) -> SubRegion {
    let _span = trace_span!(
        "common_crop_in_1",
        row_shift = translation_b_to_a.row,
        col_shift = translation_b_to_a.col
    )
    .entered();

    if !translation_b_to_a.is_finite() || extents_a.is_empty() || extents_b.is_empty() {
        return SubRegion::null();
    }
    let rows = overlap_axis(extents_a.high, translation_b_to_a.row, extents_b.high);
    let cols = overlap_axis(extents_a.wide, translation_b_to_a.col, extents_b.wide);

    let crop = if rows.is_valid() && cols.is_valid() {
        SubRegion::from_intervals(rows, cols)
    } else {
        SubRegion::null()
    };
    trace_event!("overlap", valid = crop.is_valid());
    crop
}

fn overlap_axis(size_a: usize, shift: f64, size_b: usize) -> IndexInterval {
    let lo = shift.max(0.0);
    let hi = (shift + size_b as f64).min(size_a as f64);
    if lo >= hi {
        return IndexInterval::null();
    }
    // `lo` and `hi` lie in [0, size_a] here.
    let begin = lo.floor() as usize;
    let end = (hi.ceil() as usize).min(size_a);
    IndexInterval::new(begin, end)
}

#[cfg(test)]
mod tests {
    use super::common_crop_in_1;
    use crate::geom::{Extents, IndexInterval, RowCol, Translation};

    #[test]
    fn fractional_shift_rounds_outward() {
        let crop = common_crop_in_1(
            Extents::new(10, 10),
            Translation::new(2.5, -3.25),
            Extents::new(4, 8),
        );
        assert_eq!(crop.rows(), IndexInterval::new(2, 7));
        assert_eq!(crop.cols(), IndexInterval::new(0, 5));
    }

    #[test]
    fn disjoint_grids_have_no_overlap() {
        let crop = common_crop_in_1(
            Extents::new(10, 10),
            Translation::new(10.0, 0.0),
            Extents::new(10, 10),
        );
        assert!(!crop.is_valid());

        let crop = common_crop_in_1(
            Extents::new(10, 10),
            Translation::new(f64::NAN, 0.0),
            Extents::new(10, 10),
        );
        assert!(!crop.is_valid());
    }

    #[test]
    fn nested_grid_is_whole_overlap() {
        let crop = common_crop_in_1(
            Extents::new(100, 80),
            Translation::new(10.0, 20.0),
            Extents::new(30, 40),
        );
        assert_eq!(crop.upper_left(), Some(RowCol::new(10, 20)));
        assert_eq!(crop.extents(), Some(Extents::new(30, 40)));
    }
}
