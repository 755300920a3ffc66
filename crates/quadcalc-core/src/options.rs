//! Run configuration.

use crate::constants::DEFAULT_SEGMENTS;
use crate::error::QuadError;
use crate::pool::available_threads;
use crate::registry::Integrand;
use crate::segment::{Interval, SegmentPlan};

/// Parameters of one integration run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Integration interval shared by every integrand.
    pub interval: Interval,
    /// Number of segments the interval is split into.
    pub segments: u64,
    /// Number of worker threads.
    pub threads: usize,
    /// Integrands to evaluate, in report order.
    pub integrands: Vec<Integrand>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            interval: Interval::DEFAULT,
            segments: DEFAULT_SEGMENTS,
            threads: available_threads(),
            integrands: Integrand::ALL.to_vec(),
        }
    }
}

impl RunConfig {
    /// Check the configuration before any work is scheduled.
    pub fn validate(&self) -> Result<(), QuadError> {
        if self.segments == 0 {
            return Err(QuadError::ZeroSegments);
        }
        if self.threads == 0 {
            return Err(QuadError::Config("worker count must be at least 1".into()));
        }
        Ok(())
    }

    /// Build the segment plan described by this configuration.
    pub fn plan(&self) -> Result<SegmentPlan, QuadError> {
        SegmentPlan::new(self.interval, self.segments)
    }

    /// Width of one segment.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.interval.width() / self.segments.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.interval, Interval::new(0.0, 1.0).unwrap());
        assert_eq!(cfg.segments, 10_000_000);
        assert_eq!(cfg.threads, available_threads());
        assert_eq!(cfg.integrands, Integrand::ALL.to_vec());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn default_step() {
        let cfg = RunConfig::default();
        assert!((cfg.step() - 1e-7).abs() < 1e-20);
    }

    #[test]
    fn zero_segments_invalid() {
        let cfg = RunConfig {
            segments: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(QuadError::ZeroSegments));
        assert!(cfg.plan().is_err());
    }

    #[test]
    fn zero_threads_invalid() {
        let cfg = RunConfig {
            threads: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(QuadError::Config(_))));
    }

    #[test]
    fn plan_uses_config() {
        let cfg = RunConfig {
            segments: 4,
            ..Default::default()
        };
        let plan = cfg.plan().unwrap();
        assert_eq!(plan.segments(), 4);
        assert!((plan.step() - 0.25).abs() < f64::EPSILON);
    }
}
