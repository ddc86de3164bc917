//! Shared utility helpers.

pub mod error;
pub(crate) mod stats;

pub use error::{CorrWinError, CorrWinResult};
