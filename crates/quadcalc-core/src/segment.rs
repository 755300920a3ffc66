//! Integration interval and its uniform partition into segments.

use serde::Serialize;

use crate::constants::{DEFAULT_LOWER, DEFAULT_UPPER};
use crate::error::QuadError;

/// A closed interval `[lower, upper]` with finite bounds and `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// The default run interval, `[0, 1]`.
    pub const DEFAULT: Interval = Interval {
        lower: DEFAULT_LOWER,
        upper: DEFAULT_UPPER,
    };

    /// Create an interval, rejecting non-finite or reversed bounds.
    pub fn new(lower: f64, upper: f64) -> Result<Self, QuadError> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(QuadError::InvalidInterval { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// `upper - lower`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.lower + self.width() / 2.0
    }
}

/// One sub-interval `[a, b]` of a segment plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Left end.
    pub a: f64,
    /// Right end.
    pub b: f64,
}

impl Segment {
    /// Create a segment from its ends.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// `b - a`.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Midpoint of the segment.
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.a + self.width() / 2.0
    }
}

/// Uniform partition of an interval into `segments` equal-width sub-intervals.
///
/// Segments are indexed `1..=segments`. The last segment ends exactly at the
/// interval's upper bound, so the plan covers the interval without gaps
/// regardless of rounding in `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPlan {
    interval: Interval,
    segments: u64,
    step: f64,
}

impl SegmentPlan {
    /// Create a plan with `segments` segments over `interval`.
    pub fn new(interval: Interval, segments: u64) -> Result<Self, QuadError> {
        if segments == 0 {
            return Err(QuadError::ZeroSegments);
        }
        Ok(Self {
            interval,
            segments,
            step: interval.width() / segments as f64,
        })
    }

    /// The partitioned interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Number of segments.
    #[must_use]
    pub fn segments(&self) -> u64 {
        self.segments
    }

    /// Width of every segment.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The `j`-th segment, `1 <= j <= segments`.
    #[inline]
    #[must_use]
    pub fn segment(&self, j: u64) -> Segment {
        debug_assert!(j >= 1 && j <= self.segments, "segment index out of range");
        let a = self.interval.lower + (j - 1) as f64 * self.step;
        let b = if j == self.segments {
            self.interval.upper
        } else {
            self.interval.lower + j as f64 * self.step
        };
        Segment::new(a, b)
    }

    /// Iterate over all segments in order.
    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        (1..=self.segments).map(move |j| self.segment(j))
    }
}
