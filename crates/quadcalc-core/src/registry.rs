//! Integrand registry.
//!
//! `Integrand` is the closed set of functions the calculator knows how to
//! integrate. `Derivatives` is the value / 2nd derivative / 4th derivative
//! triple resolved once from an integrand, so the hot loop calls plain
//! function pointers instead of matching on a selector per evaluation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuadError;
use crate::segment::Interval;

/// A supported integrand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Integrand {
    /// `e^x`
    Exponential,
    /// `sqrt(1 - x^2)`, defined on `[-1, 1]`.
    Semicircle,
    /// `e^(-x^2)`
    Gaussian,
}

impl Integrand {
    /// All integrands, in report order.
    pub const ALL: [Integrand; 3] = [
        Integrand::Exponential,
        Integrand::Semicircle,
        Integrand::Gaussian,
    ];

    /// Resolve a numeric selector (0, 1, 2).
    #[must_use]
    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    /// Short name, as accepted by `FromStr`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Exponential => "exp",
            Self::Semicircle => "semicircle",
            Self::Gaussian => "gaussian",
        }
    }

    /// Human-readable label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Exponential => "e^x dx",
            Self::Semicircle => "sqrt(1 - x^2) dx",
            Self::Gaussian => "e^(-x^2) dx",
        }
    }

    /// Bounds outside which `value` is undefined, or `None` for the whole real line.
    #[must_use]
    pub fn domain(self) -> Option<(f64, f64)> {
        match self {
            Self::Semicircle => Some((-1.0, 1.0)),
            Self::Exponential | Self::Gaussian => None,
        }
    }

    /// Whether every point of `interval` lies in this integrand's domain.
    #[must_use]
    pub fn supports(self, interval: &Interval) -> bool {
        match self.domain() {
            Some((lo, hi)) => interval.lower() >= lo && interval.upper() <= hi,
            None => true,
        }
    }

    /// Whether the registered second and fourth derivatives are the analytic ones.
    ///
    /// Only the exponential qualifies. The semicircle derivatives carry
    /// exponents truncated to 1 (analytic: 3/2 and 7/2), and the gaussian
    /// `second` is `-2x e^(-x^2)`, the first derivative (analytic:
    /// `(4x^2 - 2) e^(-x^2)`). Error bounds computed from either are not the
    /// analytic bounds.
    #[must_use]
    pub fn has_exact_derivatives(self) -> bool {
        matches!(self, Self::Exponential)
    }

    /// Resolve this integrand's function triple.
    #[must_use]
    pub fn derivatives(self) -> Derivatives {
        Derivatives::of(self)
    }
}

impl fmt::Display for Integrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Integrand {
    type Err = QuadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exp" | "exponential" => Ok(Self::Exponential),
            "semicircle" | "circle" => Ok(Self::Semicircle),
            "gaussian" | "gauss" => Ok(Self::Gaussian),
            other => Err(QuadError::Config(format!("unknown integrand: {other}"))),
        }
    }
}

/// A function of one real variable.
pub type RealFn = fn(f64) -> f64;

/// Value, second derivative and fourth derivative of an integrand.
#[derive(Debug, Clone, Copy)]
pub struct Derivatives {
    /// `f(x)`
    pub value: RealFn,
    /// `f''(x)`
    pub second: RealFn,
    /// `f''''(x)`
    pub fourth: RealFn,
}

impl Derivatives {
    /// Triple returned for unrecognized selectors: every function is 0.
    pub const ZERO: Derivatives = Derivatives {
        value: zero,
        second: zero,
        fourth: zero,
    };

    /// Resolve the triple for `integrand`.
    #[must_use]
    pub fn of(integrand: Integrand) -> Self {
        match integrand {
            Integrand::Exponential => Self {
                value: f64::exp,
                second: f64::exp,
                fourth: f64::exp,
            },
            Integrand::Semicircle => Self {
                value: semicircle,
                second: semicircle_second,
                fourth: semicircle_fourth,
            },
            Integrand::Gaussian => Self {
                value: gaussian,
                second: gaussian_second,
                fourth: gaussian_fourth,
            },
        }
    }

    /// Resolve the triple for a numeric selector; unknown ids give [`Derivatives::ZERO`].
    #[must_use]
    pub fn from_id(id: usize) -> Self {
        Integrand::from_id(id).map_or(Self::ZERO, Self::of)
    }
}

fn zero(_x: f64) -> f64 {
    0.0
}

fn semicircle(x: f64) -> f64 {
    (1.0 - x * x).sqrt()
}

// Exponent kept at 1 (analytic: -3/2).
fn semicircle_second(x: f64) -> f64 {
    1.0 / (1.0 - x * x)
}

// Exponent kept at 1 (analytic: -7/2).
fn semicircle_fourth(x: f64) -> f64 {
    12.0 * x * x + 3.0 / (1.0 - x * x)
}

fn gaussian(x: f64) -> f64 {
    (-x * x).exp()
}

// First derivative registered in the second-derivative slot.
fn gaussian_second(x: f64) -> f64 {
    -2.0 * x * (-x * x).exp()
}

fn gaussian_fourth(x: f64) -> f64 {
    let x2 = x * x;
    4.0 * (-x2).exp() * (4.0 * x2 * x2 - 12.0 * x2 + 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn ids_resolve_in_report_order() {
        for (i, integrand) in Integrand::ALL.iter().enumerate() {
            assert_eq!(Integrand::from_id(i), Some(*integrand));
        }
        assert_eq!(Integrand::from_id(3), None);
    }

    #[test]
    fn exponential_triple() {
        let d = Derivatives::of(Integrand::Exponential);
        let e = std::f64::consts::E;
        assert!(((d.value)(1.0) - e).abs() < TOL);
        assert!(((d.second)(1.0) - e).abs() < TOL);
        assert!(((d.fourth)(1.0) - e).abs() < TOL);
    }

    #[test]
    fn semicircle_value() {
        let d = Derivatives::of(Integrand::Semicircle);
        assert!(((d.value)(0.0) - 1.0).abs() < TOL);
        assert!((d.value)(1.0).abs() < TOL);
        assert!(((d.value)(0.6) - 0.8).abs() < TOL);
    }

    #[test]
    fn semicircle_value_outside_domain_is_nan() {
        let d = Derivatives::of(Integrand::Semicircle);
        assert!((d.value)(1.5).is_nan());
    }

    #[test]
    fn semicircle_derivatives_use_truncated_exponent() {
        let d = Derivatives::of(Integrand::Semicircle);
        // 1 / (1 - 0.25)^1
        assert!(((d.second)(0.5) - 4.0 / 3.0).abs() < TOL);
        // 12 * 0.25 + 3 / 0.75
        assert!(((d.fourth)(0.5) - 7.0).abs() < TOL);
        assert!(!Integrand::Semicircle.has_exact_derivatives());
    }

    #[test]
    fn gaussian_triple() {
        let d = Derivatives::of(Integrand::Gaussian);
        assert!(((d.value)(0.0) - 1.0).abs() < TOL);
        assert!((d.second)(0.0).abs() < TOL);
        assert!(((d.fourth)(0.0) - 12.0).abs() < TOL);

        let e_inv = (-1.0f64).exp();
        assert!(((d.value)(1.0) - e_inv).abs() < TOL);
        assert!(((d.second)(1.0) + 2.0 * e_inv).abs() < TOL);
        // 4e^-1 (4 - 12 + 3)
        assert!(((d.fourth)(1.0) + 20.0 * e_inv).abs() < TOL);
    }

    #[test]
    fn gaussian_second_is_not_analytic() {
        let d = Derivatives::of(Integrand::Gaussian);
        let analytic = |x: f64| (4.0 * x * x - 2.0) * (-x * x).exp();
        // Registered slot holds -2x e^(-x^2), which vanishes at 0.
        assert!((d.second)(0.0).abs() < TOL);
        assert!(((d.second)(0.0) - analytic(0.0)).abs() > 1.0);
        assert!(!Integrand::Gaussian.has_exact_derivatives());
    }

    #[test]
    fn only_exponential_has_exact_derivatives() {
        let exact: Vec<Integrand> = Integrand::ALL
            .into_iter()
            .filter(|i| i.has_exact_derivatives())
            .collect();
        assert_eq!(exact, vec![Integrand::Exponential]);
    }

    #[test]
    fn unknown_id_is_zero_function() {
        let d = Derivatives::from_id(42);
        for x in [-3.0, 0.0, 0.5, 7.0] {
            assert_eq!((d.value)(x), 0.0);
            assert_eq!((d.second)(x), 0.0);
            assert_eq!((d.fourth)(x), 0.0);
        }
    }

    #[test]
    fn known_id_resolves_triple() {
        let d = Derivatives::from_id(2);
        assert!(((d.value)(0.0) - 1.0).abs() < TOL);
    }

    #[test]
    fn parse_names() {
        assert_eq!("exp".parse::<Integrand>(), Ok(Integrand::Exponential));
        assert_eq!("Exponential".parse::<Integrand>(), Ok(Integrand::Exponential));
        assert_eq!("circle".parse::<Integrand>(), Ok(Integrand::Semicircle));
        assert_eq!(" gauss ".parse::<Integrand>(), Ok(Integrand::Gaussian));
        assert!("sine".parse::<Integrand>().is_err());
    }

    #[test]
    fn name_parses_back() {
        for integrand in Integrand::ALL {
            assert_eq!(integrand.name().parse::<Integrand>(), Ok(integrand));
        }
    }

    #[test]
    fn display_is_label() {
        assert_eq!(Integrand::Exponential.to_string(), "e^x dx");
        assert_eq!(Integrand::Semicircle.to_string(), "sqrt(1 - x^2) dx");
        assert_eq!(Integrand::Gaussian.to_string(), "e^(-x^2) dx");
    }

    #[test]
    fn domain_support() {
        let unit = Interval::new(0.0, 1.0).unwrap();
        let wide = Interval::new(0.0, 2.0).unwrap();
        assert!(Integrand::Semicircle.supports(&unit));
        assert!(!Integrand::Semicircle.supports(&wide));
        assert!(Integrand::Exponential.supports(&wide));
        assert!(Integrand::Gaussian.supports(&wide));
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Integrand::Gaussian).unwrap();
        assert_eq!(json, "\"gaussian\"");
        let back: Integrand = serde_json::from_str("\"semicircle\"").unwrap();
        assert_eq!(back, Integrand::Semicircle);
    }
}
