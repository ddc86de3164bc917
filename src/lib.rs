//! CorrWin is the window-geometry and peak-refinement layer of a patch-based
//! image matcher.
//!
//! It derives the crops a correlation step reads from a reference grid and a
//! target grid, locates and sub-pixel refines the peak of the resulting score
//! surface, and maps that peak back to absolute target coordinates. The
//! correlation scores themselves are computed by the caller.
//!
//! Invalid geometry is a value, not an error: every interval, region, and
//! context has an `is_valid()` state that propagates through operations.

pub mod correlation;
pub mod geom;
pub mod grid;
pub mod peak;
mod refine;
mod trace;
pub mod util;

pub use correlation::{common_crop_in_1, CorrelationConfig, CorrelationContext, Registration};
pub use geom::{Extents, IndexInterval, RowCol, SignedRowCol, Spot, SubRegion, Translation};
pub use grid::GridView;
pub use peak::{fit_spot_for, Candidate, Peak, PeakConfig, PeakLocator};
pub use util::{CorrWinError, CorrWinResult};
