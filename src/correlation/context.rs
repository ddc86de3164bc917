//! Reference/target crop geometry for one correlation attempt.

use crate::geom::{Extents, RowCol, Spot, SubRegion};
use crate::grid::GridView;
use crate::peak::Peak;
use crate::trace::{trace_event, trace_span};
use crate::util::{CorrWinError, CorrWinResult};

/// Crop pair for matching a reference patch inside a target search window.
///
/// The reference crop is the patch centered on the reference center. The
/// target crop is centered on the target center and sized
/// `patch + search - (1, 1)`, so that every placement of the patch within
/// the search extents lies inside it. A placement is addressed by the
/// patch's upper-left offset within the target crop; offsets range over
/// `[0, search.high) x [0, search.wide)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CorrelationContext {
    reference_center: RowCol,
    target_center: RowCol,
    search: Extents,
    reference_crop: SubRegion,
    target_crop: SubRegion,
}

/// Peak mapped back into absolute target-grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Registration {
    /// Where the reference patch center lands in the target grid.
    pub hot_spot: Spot,
    /// Prominence rank of the score-surface peak.
    pub prominence_rank: f64,
    /// Score at the integer peak.
    pub score: f64,
}

impl CorrelationContext {
    /// Derives both crops from the two centers.
    ///
    /// Zero patch or search extents, or crops that would start above or
    /// left of their grid origin, produce an invalid context.
    pub fn from_centers(
        reference_center: RowCol,
        target_center: RowCol,
        patch: Extents,
        search: Extents,
    ) -> Self {
        let _span = trace_span!(
            "context_from_centers",
            patch_high = patch.high,
            patch_wide = patch.wide,
            search_high = search.high,
            search_wide = search.wide
        )
        .entered();

        let reference_crop = SubRegion::centered_on(reference_center, patch);
        let target_crop = match patch.combined_with(search) {
            Some(combined) => SubRegion::centered_on(target_center, combined),
            None => SubRegion::null(),
        };

        let ctx = Self {
            reference_center,
            target_center,
            search,
            reference_crop,
            target_crop,
        };
        trace_event!("context_derived", valid = ctx.is_valid());
        ctx
    }

    /// Returns `true` when both crops are valid.
    pub fn is_valid(&self) -> bool {
        self.reference_crop.is_valid() && self.target_crop.is_valid()
    }

    /// Absolute center in the reference grid.
    pub fn reference_center(&self) -> RowCol {
        self.reference_center
    }

    /// Absolute center in the target grid.
    pub fn target_center(&self) -> RowCol {
        self.target_center
    }

    /// Patch window cut from the reference grid.
    pub fn reference_crop(&self) -> SubRegion {
        self.reference_crop
    }

    /// Search window cut from the target grid.
    pub fn target_crop(&self) -> SubRegion {
        self.target_crop
    }

    /// Search extents the context was built with.
    pub fn search_extents(&self) -> Extents {
        self.search
    }

    /// Target crop extents, `patch + search - (1, 1)`.
    pub fn combined_extents(&self) -> Option<Extents> {
        self.target_crop.extents()
    }

    /// Returns `true` when both crops lie inside their grids.
    pub fn fits_within(&self, reference_full: Extents, target_full: Extents) -> bool {
        self.reference_crop.fits_within(reference_full) && self.target_crop.fits_within(target_full)
    }

    /// Absolute target location of the reference patch center when the patch
    /// is placed at `local` within the target crop.
    ///
    /// `local` may be fractional, e.g. a refined peak spot.
    pub fn hot_spot_for_target_at(&self, local: Spot) -> Option<Spot> {
        let center = self.reference_crop.extents()?.center_offset()?.to_spot();
        self.target_crop
            .full_spot_for(Spot::new(local.row + center.row, local.col + center.col))
    }

    /// Integer counterpart of `hot_spot_for_target_at`.
    pub fn hot_row_col_for_target_at(&self, local: RowCol) -> Option<RowCol> {
        let center = self.reference_crop.extents()?.center_offset()?;
        self.target_crop.full_row_col_for(RowCol::new(
            local.row.checked_add(center.row)?,
            local.col.checked_add(center.col)?,
        ))
    }

    /// Maps a peak of the score surface to absolute target coordinates.
    ///
    /// The score grid is indexed by patch placement within the target crop,
    /// so it is expected to have the search extents. Uses the refined spot
    /// when present.
    pub fn register(&self, peak: &Peak) -> Option<Registration> {
        let hot_spot = self.hot_spot_for_target_at(peak.location())?;
        trace_event!(
            "registered",
            row = hot_spot.row,
            col = hot_spot.col,
            prominence = peak.prominence_rank()
        );
        Some(Registration {
            hot_spot,
            prominence_rank: peak.prominence_rank(),
            score: peak.best_value(),
        })
    }

    /// Zero-copy view of the reference patch.
    pub fn reference_view<'a, T>(&self, reference: &GridView<'a, T>) -> CorrWinResult<GridView<'a, T>> {
        if !self.reference_crop.is_valid() {
            return Err(CorrWinError::InvalidRegion {
                context: "reference crop",
            });
        }
        reference.sub_view(&self.reference_crop)
    }

    /// Zero-copy view of the target search window.
    pub fn target_view<'a, T>(&self, target: &GridView<'a, T>) -> CorrWinResult<GridView<'a, T>> {
        if !self.target_crop.is_valid() {
            return Err(CorrWinError::InvalidRegion {
                context: "target crop",
            });
        }
        target.sub_view(&self.target_crop)
    }
}

#[cfg(test)]
mod tests {
    use super::CorrelationContext;
    use crate::geom::{Extents, RowCol, Spot};

    #[test]
    fn unit_search_means_no_search() {
        let ctx = CorrelationContext::from_centers(
            RowCol::new(20, 20),
            RowCol::new(30, 40),
            Extents::new(5, 6),
            Extents::new(1, 1),
        );
        assert!(ctx.is_valid());
        assert_eq!(ctx.combined_extents(), Some(Extents::new(5, 6)));
        assert_eq!(
            ctx.hot_row_col_for_target_at(RowCol::new(0, 0)),
            Some(RowCol::new(30, 40))
        );
    }

    #[test]
    fn zero_search_is_invalid() {
        let ctx = CorrelationContext::from_centers(
            RowCol::new(20, 20),
            RowCol::new(20, 20),
            Extents::new(5, 5),
            Extents::new(0, 3),
        );
        assert!(!ctx.is_valid());
        assert!(ctx.reference_crop().is_valid());
        assert_eq!(ctx.hot_spot_for_target_at(Spot::new(0.0, 0.0)), None);
    }

    #[test]
    fn crop_near_origin_is_invalid() {
        let ctx = CorrelationContext::from_centers(
            RowCol::new(20, 20),
            RowCol::new(3, 50),
            Extents::new(5, 5),
            Extents::new(9, 9),
        );
        assert!(!ctx.is_valid());
        assert!(!ctx.target_crop().is_valid());
    }

    #[test]
    fn fractional_hot_spot_tracks_integer_one() {
        let ctx = CorrelationContext::from_centers(
            RowCol::new(50, 50),
            RowCol::new(60, 45),
            Extents::new(8, 9),
            Extents::new(11, 10),
        );
        let whole = ctx.hot_row_col_for_target_at(RowCol::new(4, 7)).unwrap();
        let frac = ctx.hot_spot_for_target_at(Spot::new(4.25, 6.5)).unwrap();
        assert_eq!(frac, Spot::new(whole.row as f64 + 0.25, whole.col as f64 - 0.5));
        assert!(ctx.fits_within(Extents::new(100, 100), Extents::new(100, 100)));
        assert!(!ctx.fits_within(Extents::new(100, 100), Extents::new(65, 100)));
    }
}
