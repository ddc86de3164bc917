//! Sub-pixel refinement via local quadratic fits.

pub(crate) mod quad1d;
pub(crate) mod quad2d;
