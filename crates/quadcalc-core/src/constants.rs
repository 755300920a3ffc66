//! Constants for the fixed integration run and process exit codes.

/// Lower bound of the default integration interval.
pub const DEFAULT_LOWER: f64 = 0.0;

/// Upper bound of the default integration interval.
pub const DEFAULT_UPPER: f64 = 1.0;

/// Default number of segments the interval is split into.
pub const DEFAULT_SEGMENTS: u64 = 10_000_000;

/// Worker count used when the host parallelism cannot be queried.
pub const FALLBACK_THREADS: usize = 4;

/// Denominator of the single-segment Trapezium error term.
pub const TRAPEZIUM_ERROR_DENOMINATOR: f64 = 12.0;

/// Denominator of the single-segment Simpson error term.
pub const SIMPSON_ERROR_DENOMINATOR: f64 = 2880.0;

/// Denominator of the composite Simpson error term.
pub const SIMPSON_COMPOSITE_DENOMINATOR: f64 = 180.0;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_unit() {
        assert!(DEFAULT_LOWER < DEFAULT_UPPER);
        assert!((DEFAULT_UPPER - DEFAULT_LOWER - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn simpson_denominators_consistent() {
        // 2880 = 180 * 2^4
        assert!((SIMPSON_ERROR_DENOMINATOR / SIMPSON_COMPOSITE_DENOMINATOR - 16.0).abs() < 1e-12);
    }
}
