//! Correlation window geometry.
//!
//! A correlation attempt cuts a patch from the reference grid and a larger
//! search window from the target grid, scores every placement of the patch
//! inside the window (outside this crate), and maps the best placement back
//! to absolute target coordinates.

pub mod context;
pub mod overlap;

pub use context::{CorrelationContext, Registration};
pub use overlap::common_crop_in_1;

use crate::geom::{Extents, RowCol};

/// Patch and search sizes shared by a batch of correlation attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CorrelationConfig {
    /// Patch extents cut from the reference grid.
    pub patch: Extents,
    /// Number of candidate placements per axis; `(1, 1)` means no search.
    pub search: Extents,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            patch: Extents::new(15, 15),
            search: Extents::new(25, 25),
        }
    }
}

impl CorrelationConfig {
    /// Builds the context for one pair of centers.
    pub fn context_for(&self, reference_center: RowCol, target_center: RowCol) -> CorrelationContext {
        CorrelationContext::from_centers(reference_center, target_center, self.patch, self.search)
    }

    /// Target-window extents, `patch + search - (1, 1)`.
    pub fn combined_extents(&self) -> Option<Extents> {
        self.patch.combined_with(self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::CorrelationConfig;
    use crate::geom::{Extents, RowCol};

    #[test]
    fn config_context_matches_direct_construction() {
        let cfg = CorrelationConfig {
            search: Extents::new(7, 9),
            ..CorrelationConfig::default()
        };
        assert_eq!(cfg.combined_extents(), Some(Extents::new(21, 23)));
        let ctx = cfg.context_for(RowCol::new(40, 40), RowCol::new(42, 38));
        assert_eq!(ctx.combined_extents(), cfg.combined_extents());
        assert_eq!(ctx.search_extents(), Extents::new(7, 9));
    }
}
