//! Correlation-peak location and sub-pixel refinement.
//!
//! `PeakLocator` scans a score surface for its maximum, ranks how far that
//! maximum stands out from the rest of the surface, and optionally refines
//! the integer location with separable parabolic fits.
//!
//! The prominence rank is the z-score of the best value,
//! `(best - mean) / std`, over all finite cells. It is exactly zero for a
//! constant surface and positive otherwise. Downstream code should treat a
//! zero rank as "no usable peak".
//!
//! The exclusion radius marks a band of `radius` cells along every edge of
//! the surface. A maximum inside that band is still reported exactly, but
//! flagged as `near_border`, and the strongest cell outside the band is kept
//! as `interior_best` so the caller can confirm or reject the border value.

pub mod candidate;

use crate::geom::{Extents, RowCol, Spot};
use crate::grid::GridView;
use crate::refine::quad2d::refine_spot_2d;
use crate::trace::{trace_event, trace_span};
use crate::util::stats::RunningStats;

pub use candidate::Candidate;
use candidate::nms_2d;

/// Peak-location configuration.
#[derive(Clone, Copy, Debug)]
pub struct PeakConfig {
    /// Width of the edge band in which a maximum is flagged as
    /// `near_border`. Also the Chebyshev radius around the best cell that
    /// is skipped when looking for the runner-up. Zero disables the band.
    pub exclusion_radius: usize,
    /// Refine the best cell to a sub-pixel spot.
    pub fit_spot: bool,
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            exclusion_radius: 0,
            fit_spot: false,
        }
    }
}

/// Best location of a score surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    best: RowCol,
    best_value: f64,
    prominence_rank: f64,
    runner_up: Option<f64>,
    near_border: bool,
    interior_best: Option<Candidate>,
    spot: Option<Spot>,
}

impl Peak {
    /// Integer location of the maximum score.
    pub fn best(&self) -> RowCol {
        self.best
    }

    /// Maximum score.
    pub fn best_value(&self) -> f64 {
        self.best_value
    }

    /// Non-negative distinctness of the maximum; zero for a flat surface.
    pub fn prominence_rank(&self) -> f64 {
        self.prominence_rank
    }

    /// Best score outside the exclusion neighborhood, if any cell remains.
    pub fn runner_up(&self) -> Option<f64> {
        self.runner_up
    }

    /// Returns `true` when the maximum lies within the exclusion band along
    /// the grid edges and needs confirmation before it is trusted.
    pub fn near_border(&self) -> bool {
        self.near_border
    }

    /// Strongest cell outside the edge band, reported only for a maximum
    /// that is `near_border`.
    pub fn interior_best(&self) -> Option<Candidate> {
        self.interior_best
    }

    /// Sub-pixel location, when refinement was requested.
    pub fn spot(&self) -> Option<Spot> {
        self.spot
    }

    /// Refined spot if present, otherwise the integer location.
    pub fn location(&self) -> Spot {
        self.spot.unwrap_or_else(|| self.best.to_spot())
    }

    /// Returns `true` when the maximum is distinguishable from the surface.
    pub fn is_distinct(&self) -> bool {
        self.prominence_rank > 0.0
    }

    /// Copy of this peak with the given sub-pixel spot.
    pub fn with_spot(self, spot: Spot) -> Self {
        Self {
            spot: Some(spot),
            ..self
        }
    }
}

/// Locates and refines maxima of score surfaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct PeakLocator {
    config: PeakConfig,
}

impl PeakLocator {
    /// Creates a locator with the given configuration.
    pub fn new(config: PeakConfig) -> Self {
        Self { config }
    }

    /// Returns the locator configuration.
    pub fn config(&self) -> &PeakConfig {
        &self.config
    }

    /// Locates the maximum of `grid` with default settings and the given
    /// exclusion radius.
    pub fn from_grid<T>(grid: &GridView<'_, T>, exclusion_radius: usize) -> Option<Peak>
    where
        T: Copy + Into<f64>,
    {
        Self::new(PeakConfig {
            exclusion_radius,
            ..PeakConfig::default()
        })
        .locate(grid)
    }

    /// Scans `grid` for its maximum.
    ///
    /// Ties resolve to the first cell in row-major order and non-finite
    /// scores are skipped. Returns `None` only when no cell is finite.
    pub fn locate<T>(&self, grid: &GridView<'_, T>) -> Option<Peak>
    where
        T: Copy + Into<f64>,
    {
        let _span = trace_span!("locate_peak", high = grid.high(), wide = grid.wide()).entered();

        let mut stats = RunningStats::default();
        let mut best: Option<(RowCol, f64)> = None;
        for (rc, value) in finite_cells(grid) {
            stats.push(value);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((rc, value));
            }
        }
        let (best_at, best_value) = best?;

        let mean = stats.mean();
        let spread = stats.std_dev();
        let prominence_rank = if spread > 0.0 && best_value > mean {
            (best_value - mean) / spread
        } else {
            0.0
        };

        let radius = self.config.exclusion_radius;
        let runner_up = finite_cells(grid)
            .filter(|(rc, _)| rc.chebyshev(best_at) > radius)
            .map(|(_, value)| value)
            .reduce(f64::max);

        let extents = grid.extents();
        let near_border = in_border_band(best_at, extents, radius);
        let interior_best = if near_border {
            finite_cells(grid)
                .filter(|&(rc, _)| !in_border_band(rc, extents, radius))
                .fold(None, |acc: Option<Candidate>, (at, score)| match acc {
                    Some(kept) if kept.score >= score => Some(kept),
                    _ => Some(Candidate { at, score }),
                })
        } else {
            None
        };

        let mut peak = Peak {
            best: best_at,
            best_value,
            prominence_rank,
            runner_up,
            near_border,
            interior_best,
            spot: None,
        };
        if self.config.fit_spot {
            peak = peak.with_spot(fit_spot_for(grid, &peak));
        }

        trace_event!(
            "peak_located",
            row = best_at.row,
            col = best_at.col,
            value = best_value,
            prominence = prominence_rank,
            near_border = near_border,
            cells = stats.count()
        );
        Some(peak)
    }

    /// Local maxima of `grid`, pruned by non-maximum suppression.
    ///
    /// A cell qualifies when no 8-neighbor scores strictly higher, so cells
    /// of a flat plateau all qualify before suppression. At most
    /// `k` candidates are returned, sorted by descending score.
    pub fn candidates<T>(grid: &GridView<'_, T>, k: usize, nms_radius: usize) -> Vec<Candidate>
    where
        T: Copy + Into<f64>,
    {
        if k == 0 {
            return Vec::new();
        }
        let mut local_maxima: Vec<Candidate> = finite_cells(grid)
            .filter(|&(rc, value)| is_local_max(grid, rc, value))
            .map(|(at, score)| Candidate { at, score })
            .collect();

        let mut kept = nms_2d(&mut local_maxima, nms_radius);
        kept.truncate(k);
        kept
    }
}

/// Refines `peak.best()` to sub-pixel precision.
///
/// A 1D parabola is fitted along each axis through the best cell and its two
/// neighbors. An axis whose neighbor falls off the grid, or whose fit is not
/// concave, keeps its integer coordinate; a single elevated cell on a flat
/// background therefore refines to itself exactly.
pub fn fit_spot_for<T>(grid: &GridView<'_, T>, peak: &Peak) -> Spot
where
    T: Copy + Into<f64>,
{
    let center = peak.best();
    let mut s = [[f64::NEG_INFINITY; 3]; 3];
    let offsets = [-1isize, 0, 1];
    for (ir, &dr) in offsets.iter().enumerate() {
        let Some(row) = center.row.checked_add_signed(dr) else {
            continue;
        };
        for (ic, &dc) in offsets.iter().enumerate() {
            let Some(col) = center.col.checked_add_signed(dc) else {
                continue;
            };
            if let Some(&value) = grid.at(row, col) {
                s[ir][ic] = value.into();
            }
        }
    }

    refine_spot_2d(center, s)
}

fn finite_cells<'g, T>(grid: &'g GridView<'g, T>) -> impl Iterator<Item = (RowCol, f64)> + 'g
where
    T: Copy + Into<f64>,
{
    grid.cells()
        .map(|(rc, &value)| (rc, value.into()))
        .filter(|(_, value)| value.is_finite())
}

/// Cell lies in the outermost `radius` rows or columns of the grid.
fn in_border_band(at: RowCol, extents: Extents, radius: usize) -> bool {
    radius > 0
        && (at.row < radius
            || at.col < radius
            || at.row.saturating_add(radius) >= extents.high
            || at.col.saturating_add(radius) >= extents.wide)
}

fn is_local_max<T>(grid: &GridView<'_, T>, at: RowCol, value: f64) -> bool
where
    T: Copy + Into<f64>,
{
    let row_lo = at.row.saturating_sub(1);
    let col_lo = at.col.saturating_sub(1);
    for row in row_lo..=at.row + 1 {
        for col in col_lo..=at.col + 1 {
            if let Some(&other) = grid.at(row, col) {
                let other: f64 = other.into();
                if other > value {
                    return false;
                }
            }
        }
    }
    true
}
