//! Error type for run setup.
//!
//! The numeric core never fails: out-of-domain evaluations degrade to
//! NaN/Inf and flow into the sums. Errors only arise while building the
//! inputs of a run (interval, segment plan, worker pool).

/// Error type for integration runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuadError {
    /// Interval bounds are not finite or are reversed.
    #[error("invalid interval [{lower}, {upper}]")]
    InvalidInterval {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },

    /// A segment plan needs at least one segment.
    #[error("segment count must be at least 1")]
    ZeroSegments,

    /// The worker pool could not be created.
    #[error("failed to create thread pool: {0}")]
    ThreadPool(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
