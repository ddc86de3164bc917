//! Borrowed grid views.
//!
//! `GridView` is a read-only 2D view into a 1D buffer with an explicit
//! stride. The stride counts elements between the starts of consecutive rows,
//! so a stride larger than the width represents padded rows. Crops by
//! `SubRegion` are zero-copy views into the same backing slice and retain the
//! original stride.

use crate::geom::{Extents, RowCol, SubRegion};
use crate::util::{CorrWinError, CorrWinResult};

/// Borrowed 2D grid view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct GridView<'a, T> {
    data: &'a [T],
    high: usize,
    wide: usize,
    stride: usize,
}

impl<'a, T> GridView<'a, T> {
    /// Creates a contiguous view with `stride == wide`.
    pub fn from_slice(data: &'a [T], high: usize, wide: usize) -> CorrWinResult<Self> {
        Self::new(data, high, wide, wide)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], high: usize, wide: usize, stride: usize) -> CorrWinResult<Self> {
        let needed = required_len(high, wide, stride)?;
        if data.len() < needed {
            return Err(CorrWinError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            high,
            wide,
            stride,
        })
    }

    /// Number of rows.
    pub fn high(&self) -> usize {
        self.high
    }

    /// Number of columns.
    pub fn wide(&self) -> usize {
        self.wide
    }

    /// Grid size as `(high, wide)`.
    pub fn extents(&self) -> Extents {
        Extents::new(self.high, self.wide)
    }

    /// Elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the element at `(row, col)` if it is within bounds.
    pub fn at(&self, row: usize, col: usize) -> Option<&'a T> {
        if row >= self.high || col >= self.wide {
            return None;
        }
        let idx = row.checked_mul(self.stride)?.checked_add(col)?;
        self.data.get(idx)
    }

    /// Returns the element at `rc` if it is within bounds.
    pub fn get(&self, rc: RowCol) -> Option<&'a T> {
        self.at(rc.row, rc.col)
    }

    /// Returns a contiguous slice for `row` with length `wide`.
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        if row >= self.high {
            return None;
        }
        let start = row.checked_mul(self.stride)?;
        let end = start.checked_add(self.wide)?;
        self.data.get(start..end)
    }

    /// Iterates `(location, value)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (RowCol, &'a T)> + '_ {
        (0..self.high).flat_map(move |row| {
            self.row(row)
                .into_iter()
                .flatten()
                .enumerate()
                .map(move |(col, value)| (RowCol::new(row, col), value))
        })
    }

    /// Returns a zero-copy view of `region`.
    ///
    /// The region must be valid and lie inside the grid.
    pub fn sub_view(&self, region: &SubRegion) -> CorrWinResult<GridView<'a, T>> {
        let (Some(corner), Some(extents)) = (region.upper_left(), region.extents()) else {
            return Err(CorrWinError::InvalidRegion { context: "sub_view" });
        };
        if !region.fits_within(self.extents()) {
            return Err(CorrWinError::RegionOutOfBounds {
                row0: region.rows().begin(),
                row1: region.rows().end(),
                col0: region.cols().begin(),
                col1: region.cols().end(),
                high: self.high,
                wide: self.wide,
            });
        }

        let start = corner
            .row
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(corner.col))
            .ok_or(CorrWinError::InvalidDimensions {
                high: self.high,
                wide: self.wide,
            })?;
        let data = self
            .data
            .get(start..)
            .ok_or(CorrWinError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;

        GridView::new(data, extents.high, extents.wide, self.stride)
    }
}

fn required_len(high: usize, wide: usize, stride: usize) -> CorrWinResult<usize> {
    if high == 0 || wide == 0 {
        return Err(CorrWinError::InvalidDimensions { high, wide });
    }
    if stride < wide {
        return Err(CorrWinError::InvalidStride { wide, stride });
    }
    let needed = (high - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(wide))
        .ok_or(CorrWinError::InvalidDimensions { high, wide })?;
    Ok(needed)
}
