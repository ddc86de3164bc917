//! Error types for corrwin.
//!
//! Geometry itself never fails: invalid windows are values. Errors are only
//! raised where a window meets a concrete buffer.

use thiserror::Error;

/// Result alias for corrwin operations.
pub type CorrWinResult<T> = std::result::Result<T, CorrWinError>;

/// Errors raised when building or cropping grid views.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CorrWinError {
    /// The grid has a zero or overflowing extent.
    #[error("invalid dimensions: {high}x{wide}")]
    InvalidDimensions {
        /// Requested rows.
        high: usize,
        /// Requested columns.
        wide: usize,
    },
    /// The row stride is shorter than a row.
    #[error("invalid stride {stride} for width {wide}")]
    InvalidStride {
        /// Requested columns.
        wide: usize,
        /// Requested stride.
        stride: usize,
    },
    /// The backing buffer cannot hold the requested view.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall {
        /// Minimum element count.
        needed: usize,
        /// Actual element count.
        got: usize,
    },
    /// A crop was requested with an invalid sub-region.
    #[error("invalid region: {context}")]
    InvalidRegion {
        /// Which crop was requested.
        context: &'static str,
    },
    /// A crop does not fit inside the grid.
    #[error("region rows [{row0},{row1}) cols [{col0},{col1}) outside {high}x{wide} grid")]
    RegionOutOfBounds {
        /// First row of the region.
        row0: usize,
        /// One past the last row.
        row1: usize,
        /// First column of the region.
        col0: usize,
        /// One past the last column.
        col1: usize,
        /// Grid rows.
        high: usize,
        /// Grid columns.
        wide: usize,
    },
}
