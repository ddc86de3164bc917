//! Index-window geometry.
//!
//! `IndexInterval` is a half-open `[begin, end)` range of grid indices and
//! `SubRegion` pairs two of them into a rectangular window. Both carry an
//! explicit invalid state instead of sentinel values: operations on invalid
//! inputs return invalid outputs.

pub mod interval;
pub mod region;

pub use interval::IndexInterval;
pub use region::SubRegion;

/// Integer grid location (row, column).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RowCol {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl RowCol {
    /// Creates a location from row and column indices.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts to a real-valued spot at the same location.
    pub fn to_spot(self) -> Spot {
        Spot::new(self.row as f64, self.col as f64)
    }

    /// Chebyshev distance between two locations.
    pub fn chebyshev(self, other: RowCol) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Signed copy, or `None` if either index exceeds `isize::MAX`.
    pub fn to_signed(self) -> Option<SignedRowCol> {
        Some(SignedRowCol::new(
            isize::try_from(self.row).ok()?,
            isize::try_from(self.col).ok()?,
        ))
    }
}

/// Signed grid location; may lie above or left of a grid's origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SignedRowCol {
    /// Row index.
    pub row: isize,
    /// Column index.
    pub col: isize,
}

impl SignedRowCol {
    /// Creates a signed location from row and column indices.
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

/// Grid size as `(high, wide)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extents {
    /// Number of rows.
    pub high: usize,
    /// Number of columns.
    pub wide: usize,
}

impl Extents {
    /// Creates extents from row and column counts.
    pub const fn new(high: usize, wide: usize) -> Self {
        Self { high, wide }
    }

    /// Returns `true` when either axis has zero length.
    pub fn is_empty(&self) -> bool {
        self.high == 0 || self.wide == 0
    }

    /// Combined patch-and-search extents: `self + search - (1, 1)`.
    ///
    /// A search extent of one cell on an axis means no search along it.
    /// Returns `None` if either input has a zero axis.
    pub fn combined_with(&self, search: Extents) -> Option<Extents> {
        if self.is_empty() || search.is_empty() {
            return None;
        }
        Some(Extents::new(
            self.high.checked_add(search.high)? - 1,
            self.wide.checked_add(search.wide)? - 1,
        ))
    }

    /// Mod-2 center offset: `((high - 1) / 2, (wide - 1) / 2)`.
    pub fn center_offset(&self) -> Option<RowCol> {
        if self.is_empty() {
            return None;
        }
        Some(RowCol::new((self.high - 1) / 2, (self.wide - 1) / 2))
    }
}

/// Real-valued grid location used for sub-pixel positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spot {
    /// Row coordinate.
    pub row: f64,
    /// Column coordinate.
    pub col: f64,
}

impl Spot {
    /// Creates a spot from row and column coordinates.
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Returns `true` when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.row.is_finite() && self.col.is_finite()
    }

    /// Largest absolute per-axis difference.
    pub fn max_abs_diff(&self, other: Spot) -> f64 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }
}

/// Real-valued shift mapping one grid frame into another.
///
/// A location `p` in frame B sits at `p + translation` in frame A.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    /// Row shift.
    pub row: f64,
    /// Column shift.
    pub col: f64,
}

impl Translation {
    /// Creates a translation from row and column shifts.
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Translation mapping frame A back into frame B.
    pub fn inverse(&self) -> Self {
        Self::new(-self.row, -self.col)
    }

    /// Applies the translation to a spot.
    pub fn apply(&self, spot: Spot) -> Spot {
        Spot::new(spot.row + self.row, spot.col + self.col)
    }

    /// Returns `true` when both shifts are finite.
    pub fn is_finite(&self) -> bool {
        self.row.is_finite() && self.col.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::{Extents, RowCol, SignedRowCol, Translation};

    #[test]
    fn combined_extents_use_one_cell_overlap() {
        let patch = Extents::new(15, 16);
        assert_eq!(
            patch.combined_with(Extents::new(1, 1)),
            Some(Extents::new(15, 16))
        );
        assert_eq!(
            patch.combined_with(Extents::new(24, 27)),
            Some(Extents::new(38, 42))
        );
        assert_eq!(patch.combined_with(Extents::new(0, 3)), None);
        assert_eq!(
            Extents::new(usize::MAX, 2).combined_with(Extents::new(2, 2)),
            None
        );
    }

    #[test]
    fn signed_conversion_rejects_huge_indices() {
        assert_eq!(RowCol::new(3, 8).to_signed(), Some(SignedRowCol::new(3, 8)));
        assert_eq!(RowCol::new(0, usize::MAX).to_signed(), None);
    }

    #[test]
    fn center_offset_favors_leading_edge() {
        assert_eq!(Extents::new(4, 5).center_offset(), Some(RowCol::new(1, 2)));
        assert_eq!(Extents::new(0, 5).center_offset(), None);
    }

    #[test]
    fn translation_inverse_round_trips() {
        let shift = Translation::new(12.5, -3.25);
        let spot = RowCol::new(7, 9).to_spot();
        assert_eq!(shift.inverse().apply(shift.apply(spot)), spot);
    }
}
