//! Rectangular sub-regions of a larger grid.
//!
//! A `SubRegion` stores its row and column intervals in the absolute frame of
//! the grid it was cut from. Local coordinates have their origin at the
//! region's upper-left corner; `full_*_for` and `sub_*_for` convert between
//! the two frames and are exact inverses of each other.

use crate::geom::interval::IndexInterval;
use crate::geom::{Extents, RowCol, SignedRowCol, Spot};

/// Rectangular window `rows x cols` inside a larger grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SubRegion {
    rows: IndexInterval,
    cols: IndexInterval,
}

impl SubRegion {
    /// Creates a region from its upper-left corner and extents.
    pub fn new(upper_left: RowCol, extents: Extents) -> Self {
        Self::from_intervals(
            IndexInterval::with_size(upper_left.row, extents.high),
            IndexInterval::with_size(upper_left.col, extents.wide),
        )
    }

    /// Creates a region from row and column intervals.
    pub const fn from_intervals(rows: IndexInterval, cols: IndexInterval) -> Self {
        Self { rows, cols }
    }

    /// The explicit invalid region.
    pub const fn null() -> Self {
        Self {
            rows: IndexInterval::null(),
            cols: IndexInterval::null(),
        }
    }

    /// Region covering a whole grid of the given extents.
    pub fn full(extents: Extents) -> Self {
        Self::new(RowCol::default(), extents)
    }

    /// Builds a region of `extents` whose mod-2 center cell is `center`.
    ///
    /// The corner is `center - (extent - 1) / 2` per axis, evaluated in
    /// signed arithmetic. A corner above or left of the grid origin, or a
    /// zero extent, yields `null()`.
    pub fn centered_on(center: RowCol, extents: Extents) -> Self {
        let Some(offset) = extents.center_offset() else {
            return Self::null();
        };
        match (
            center.row.checked_sub(offset.row),
            center.col.checked_sub(offset.col),
        ) {
            (Some(row0), Some(col0)) => Self::new(RowCol::new(row0, col0), extents),
            _ => Self::null(),
        }
    }

    /// Window of `extents` split around `center` and clamped to a grid of
    /// `full_extents`.
    ///
    /// Each axis follows `IndexInterval::cropped_center_size`; a window that
    /// runs off the grid is truncated, not moved. `center` is signed, so it
    /// may sit above or left of the grid; use `RowCol::to_signed` for an
    /// in-grid location.
    pub fn cropped_center_size(
        center: SignedRowCol,
        extents: Extents,
        full_extents: Extents,
    ) -> Self {
        let full = Self::full(full_extents);
        let rows = full.rows.cropped_center_size(center.row, extents.high);
        let cols = full.cols.cropped_center_size(center.col, extents.wide);
        if rows.is_valid() && cols.is_valid() {
            Self::from_intervals(rows, cols)
        } else {
            Self::null()
        }
    }

    /// Row interval in the absolute frame.
    pub fn rows(&self) -> IndexInterval {
        self.rows
    }

    /// Column interval in the absolute frame.
    pub fn cols(&self) -> IndexInterval {
        self.cols
    }

    /// Returns `true` when both intervals are valid.
    pub fn is_valid(&self) -> bool {
        self.rows.is_valid() && self.cols.is_valid()
    }

    /// Upper-left corner in the absolute frame.
    pub fn upper_left(&self) -> Option<RowCol> {
        self.is_valid()
            .then(|| RowCol::new(self.rows.begin(), self.cols.begin()))
    }

    /// Region size as `(high, wide)`.
    pub fn extents(&self) -> Option<Extents> {
        Some(Extents::new(self.rows.size()?, self.cols.size()?))
    }

    /// Number of rows.
    pub fn high(&self) -> Option<usize> {
        self.extents().map(|e| e.high)
    }

    /// Number of columns.
    pub fn wide(&self) -> Option<usize> {
        self.extents().map(|e| e.wide)
    }

    /// Returns `true` when `abs` lies inside the region.
    pub fn contains(&self, abs: RowCol) -> bool {
        self.is_valid() && self.rows.contains(abs.row) && self.cols.contains(abs.col)
    }

    /// Returns `true` when `other` is valid and lies entirely inside `self`.
    pub fn contains_region(&self, other: &SubRegion) -> bool {
        self.rows.contains_interval(&other.rows) && self.cols.contains_interval(&other.cols)
    }

    /// Returns `true` when the region lies inside a grid of `full` extents.
    pub fn fits_within(&self, full: Extents) -> bool {
        Self::full(full).contains_region(self)
    }

    /// Overlap of two regions, or `null()` if they do not overlap.
    pub fn intersection(&self, other: &SubRegion) -> SubRegion {
        let rows = self.rows.intersection(&other.rows);
        let cols = self.cols.intersection(&other.cols);
        if rows.is_valid() && cols.is_valid() {
            Self::from_intervals(rows, cols)
        } else {
            Self::null()
        }
    }

    /// Smallest region on a `delta` lattice that contains `self`.
    ///
    /// The corner is snapped down and the far edges snapped up to multiples
    /// of `delta`. `delta == 1` is the identity. `delta == 0` is only defined
    /// for bounds at zero; anything else yields `null()`.
    pub fn quantized(&self, delta: usize) -> SubRegion {
        if !self.is_valid() {
            return Self::null();
        }
        let rows = self.rows.quantized(delta);
        let cols = self.cols.quantized(delta);
        if rows.is_valid() && cols.is_valid() {
            Self::from_intervals(rows, cols)
        } else {
            Self::null()
        }
    }

    /// Maps a local location to the absolute frame.
    pub fn full_row_col_for(&self, local: RowCol) -> Option<RowCol> {
        let corner = self.upper_left()?;
        Some(RowCol::new(
            corner.row.checked_add(local.row)?,
            corner.col.checked_add(local.col)?,
        ))
    }

    /// Maps an absolute location to the local frame.
    ///
    /// Returns `None` for locations above or left of the corner, which have
    /// no unsigned local coordinate.
    pub fn sub_row_col_for(&self, full: RowCol) -> Option<RowCol> {
        let corner = self.upper_left()?;
        Some(RowCol::new(
            full.row.checked_sub(corner.row)?,
            full.col.checked_sub(corner.col)?,
        ))
    }

    /// Maps a real-valued local location to the absolute frame.
    pub fn full_spot_for(&self, local: Spot) -> Option<Spot> {
        let corner = self.upper_left()?.to_spot();
        Some(Spot::new(local.row + corner.row, local.col + corner.col))
    }

    /// Maps a real-valued absolute location to the local frame.
    pub fn sub_spot_for(&self, full: Spot) -> Option<Spot> {
        let corner = self.upper_left()?.to_spot();
        Some(Spot::new(full.row - corner.row, full.col - corner.col))
    }

    /// Component-wise `IndexInterval::nearly_equals`.
    ///
    /// Two invalid regions are not nearly equal; compare `is_valid()`
    /// explicitly when both may be null.
    pub fn nearly_equals(&self, other: &SubRegion, tol: usize) -> bool {
        self.rows.nearly_equals(&other.rows, tol) && self.cols.nearly_equals(&other.cols, tol)
    }
}

impl std::fmt::Display for SubRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rows{} cols{}", self.rows, self.cols)
    }
}
