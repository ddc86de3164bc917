//! Half-open integer index intervals.
//!
//! An interval `[begin, end)` is valid only when `begin < end`. Zero-length
//! intervals are representable (for example, the result of centering a
//! zero-size window) but report `is_valid() == false`.
//!
//! Two centering conventions are used and they differ on purpose:
//!
//! - `centered_sub_of_size` (mod-2): the leading edge receives the floor half
//!   of the slack, so for odd slack the sub-interval sits closer to `begin`.
//! - `cropped_center_size` (split): `size / 2` cells below the center and the
//!   remainder at or above it, clamped to the parent. Clamping truncates the
//!   window; it never shifts it.

/// Half-open index interval `[begin, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexInterval {
    begin: usize,
    end: usize,
}

impl IndexInterval {
    /// Creates `[begin, end)`. The result is invalid unless `begin < end`.
    pub const fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Creates `[begin, begin + size)`, or `null()` if the end overflows.
    pub fn with_size(begin: usize, size: usize) -> Self {
        match begin.checked_add(size) {
            Some(end) => Self::new(begin, end),
            None => Self::null(),
        }
    }

    /// The explicit uninitialized interval `[0, 0)`.
    pub const fn null() -> Self {
        Self { begin: 0, end: 0 }
    }

    /// First index in the interval.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// One past the last index.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns `true` when `begin < end`.
    pub fn is_valid(&self) -> bool {
        self.begin < self.end
    }

    /// Number of indices covered, or `None` for an invalid interval.
    pub fn size(&self) -> Option<usize> {
        self.is_valid().then(|| self.end - self.begin)
    }

    /// Half-open membership test.
    pub fn contains(&self, index: usize) -> bool {
        self.begin <= index && index < self.end
    }

    /// Returns `true` when `other` is valid and lies entirely inside `self`.
    pub fn contains_interval(&self, other: &IndexInterval) -> bool {
        self.is_valid() && other.is_valid() && self.begin <= other.begin && other.end <= self.end
    }

    /// Mod-2 center cell: `begin + (size - 1) / 2`.
    ///
    /// This is the single index selected by `centered_sub_of_size(1)`.
    pub fn center_index(&self) -> Option<usize> {
        self.size().map(|size| self.begin + (size - 1) / 2)
    }

    /// Sub-interval of `sub_size` centered with the mod-2 convention.
    ///
    /// `(size - sub_size) / 2` leading indices are skipped. Requesting more
    /// than `size()` (or centering inside an invalid interval) returns
    /// `null()`. `sub_size == 0` yields a zero-length interval at the center.
    pub fn centered_sub_of_size(&self, sub_size: usize) -> IndexInterval {
        let Some(full_size) = self.size() else {
            return Self::null();
        };
        if full_size < sub_size {
            return Self::null();
        }
        let num_edge = (full_size - sub_size) / 2;
        let begin = self.begin + num_edge;
        Self::new(begin, begin + sub_size)
    }

    /// Window of `sub_size` split around `center`, clamped to this interval.
    ///
    /// `sub_size / 2` indices lie below `center`; the rest start at `center`.
    /// The arithmetic is signed, so `center` may lie outside the interval or
    /// be negative. Returns `null()` when `sub_size == 0`, when `self` is
    /// invalid, or when nothing survives clamping.
    pub fn cropped_center_size(&self, center: isize, sub_size: usize) -> IndexInterval {
        if sub_size == 0 || !self.is_valid() {
            return Self::null();
        }
        let (Ok(size), Ok(full_begin), Ok(full_end)) = (
            isize::try_from(sub_size),
            isize::try_from(self.begin),
            isize::try_from(self.end),
        ) else {
            return Self::null();
        };
        let below = size / 2;
        let above = size - below;
        let (Some(low), Some(high)) = (center.checked_sub(below), center.checked_add(above))
        else {
            return Self::null();
        };

        let low = low.max(full_begin);
        let high = high.min(full_end);
        if low >= high {
            return Self::null();
        }
        // Both bounds are inside [begin, end) here, so the casts are lossless.
        Self::new(low as usize, high as usize)
    }

    /// Overlap of two intervals, or `null()` when either is invalid or they
    /// are disjoint.
    pub fn intersection(&self, other: &IndexInterval) -> IndexInterval {
        if !self.is_valid() || !other.is_valid() {
            return Self::null();
        }
        let begin = self.begin.max(other.begin);
        let end = self.end.min(other.end);
        if begin < end {
            Self::new(begin, end)
        } else {
            Self::null()
        }
    }

    /// Smallest interval with bounds on multiples of `delta` that contains
    /// `self`.
    pub fn quantized(&self, delta: usize) -> IndexInterval {
        if !self.is_valid() {
            return Self::null();
        }
        match (quantized_lo(self.begin, delta), quantized_hi(self.end, delta)) {
            (Some(begin), Some(end)) => Self::new(begin, end),
            _ => Self::null(),
        }
    }

    /// Both intervals valid and each bound within `tol` of the other.
    pub fn nearly_equals(&self, other: &IndexInterval, tol: usize) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.begin.abs_diff(other.begin) <= tol
            && self.end.abs_diff(other.end) <= tol
    }
}

impl std::fmt::Display for IndexInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "[{},{})", self.begin, self.end)
        } else {
            write!(f, "[{},{})<invalid>", self.begin, self.end)
        }
    }
}

/// Rounds `value` down to a multiple of `delta`.
///
/// `delta == 0` is only defined for `value == 0`.
pub fn quantized_lo(value: usize, delta: usize) -> Option<usize> {
    if delta == 0 {
        return (value == 0).then_some(0);
    }
    Some((value / delta) * delta)
}

/// Rounds `value` up to a multiple of `delta`.
///
/// `delta == 0` is only defined for `value == 0`; overflow yields `None`.
pub fn quantized_hi(value: usize, delta: usize) -> Option<usize> {
    if delta == 0 {
        return (value == 0).then_some(0);
    }
    value.div_ceil(delta).checked_mul(delta)
}

#[cfg(test)]
mod tests {
    use super::{quantized_hi, quantized_lo, IndexInterval};

    #[test]
    fn size_is_none_for_degenerate_intervals() {
        assert_eq!(IndexInterval::new(3, 8).size(), Some(5));
        assert_eq!(IndexInterval::new(3, 3).size(), None);
        assert_eq!(IndexInterval::new(8, 3).size(), None);
        assert!(!IndexInterval::null().is_valid());
        assert_eq!(IndexInterval::default(), IndexInterval::null());
    }

    #[test]
    fn center_index_matches_unit_sub_interval() {
        for size in 1..9 {
            let full = IndexInterval::with_size(10, size);
            let unit = full.centered_sub_of_size(1);
            assert_eq!(full.center_index(), Some(unit.begin()));
        }
    }

    #[test]
    fn centered_sub_rejects_oversize_request() {
        let full = IndexInterval::new(4, 7);
        assert!(!full.centered_sub_of_size(4).is_valid());
        assert_eq!(full.centered_sub_of_size(4), IndexInterval::null());
        assert_eq!(
            IndexInterval::null().centered_sub_of_size(0),
            IndexInterval::null()
        );
    }

    #[test]
    fn cropped_center_handles_negative_center() {
        let full = IndexInterval::new(0, 10);
        assert_eq!(full.cropped_center_size(-1, 4), IndexInterval::new(0, 1));
        assert!(!full.cropped_center_size(-3, 4).is_valid());
        assert!(!full.cropped_center_size(12, 4).is_valid());
        assert_eq!(full.cropped_center_size(5, 4), IndexInterval::new(3, 7));
    }

    #[test]
    fn intersection_of_disjoint_intervals_is_null() {
        let a = IndexInterval::new(0, 5);
        assert_eq!(
            a.intersection(&IndexInterval::new(3, 9)),
            IndexInterval::new(3, 5)
        );
        assert!(!a.intersection(&IndexInterval::new(5, 9)).is_valid());
    }

    #[test]
    fn quantize_helpers_round_outward() {
        assert_eq!(quantized_lo(17, 8), Some(16));
        assert_eq!(quantized_hi(17, 8), Some(24));
        assert_eq!(quantized_hi(16, 8), Some(16));
        assert_eq!(quantized_lo(17, 1), Some(17));
        assert_eq!(quantized_lo(0, 0), Some(0));
        assert_eq!(quantized_lo(5, 0), None);
        assert_eq!(quantized_hi(5, 0), None);
        assert_eq!(quantized_hi(usize::MAX, 2), None);
    }

    #[test]
    fn nearly_equals_requires_valid_operands() {
        let a = IndexInterval::new(10, 20);
        assert!(a.nearly_equals(&a, 0));
        assert!(a.nearly_equals(&IndexInterval::new(11, 19), 1));
        assert!(!a.nearly_equals(&IndexInterval::new(12, 20), 1));
        assert!(!IndexInterval::null().nearly_equals(&IndexInterval::null(), 5));
    }
}
