// src/filter/mod.rs
//! Notch filter design, response evaluation, and application

pub mod apply;
pub mod design;
pub mod response;

pub use apply::*;
pub use design::*;
pub use response::*;

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use thiserror::Error;

/// Common filter error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// The filter specification violates a parameter invariant
    #[error("invalid filter spec: {0}")]
    InvalidSpec(String),
    /// A frequency response was requested with no query frequencies
    #[error("no query frequencies supplied")]
    EmptyQuery,
    /// Zero-phase filtering needs more input samples than were supplied
    #[error("signal too short for zero-phase filtering: {len} samples, need at least {min}")]
    SignalTooShort {
        /// Length of the offending input
        len: usize,
        /// Minimum length required by the filter order
        min: usize,
    },
}

/// Parameters of a single notch filter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Frequency to be removed from the signal, in Hz
    pub center_frequency_hz: f64,
    /// Ratio of center frequency to notch bandwidth; higher is narrower
    pub quality_factor: f64,
    /// Sampling frequency in Hz
    pub sample_rate_hz: f64,
}

impl FilterSpec {
    /// Create a new filter specification
    pub fn new(center_frequency_hz: f64, quality_factor: f64, sample_rate_hz: f64) -> Self {
        Self {
            center_frequency_hz,
            quality_factor,
            sample_rate_hz,
        }
    }

    /// Half the sample rate
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz / 2.0
    }

    /// Check all parameter invariants
    pub fn validate(&self) -> Result<(), FilterError> {
        if !(self.sample_rate_hz > 0.0) || !self.sample_rate_hz.is_finite() {
            return Err(FilterError::InvalidSpec(
                "sample rate must be positive and finite".to_string(),
            ));
        }
        if !(self.center_frequency_hz > 0.0) || !self.center_frequency_hz.is_finite() {
            return Err(FilterError::InvalidSpec(
                "center frequency must be positive and finite".to_string(),
            ));
        }
        if self.center_frequency_hz >= self.nyquist_hz() {
            return Err(FilterError::InvalidSpec(
                "center frequency must lie below Nyquist".to_string(),
            ));
        }
        if !(self.quality_factor > 0.0) || !self.quality_factor.is_finite() {
            return Err(FilterError::InvalidSpec(
                "quality factor must be positive and finite".to_string(),
            ));
        }
        // The design bandwidth omega0/Q must keep tan(bw/2) on its principal
        // branch or the pole radius bound no longer holds.
        let omega = 2.0 * PI * self.center_frequency_hz / self.sample_rate_hz;
        if omega / (2.0 * self.quality_factor) >= FRAC_PI_2 {
            return Err(FilterError::InvalidSpec(
                "notch bandwidth reaches Nyquist".to_string(),
            ));
        }
        Ok(())
    }
}

/// Coefficients of a second-order (biquad) IIR section, normalized so a[0] = 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients {
    /// Numerator coefficients b0, b1, b2
    pub b: [f64; 3],
    /// Denominator coefficients a0, a1, a2
    pub a: [f64; 3],
}

impl BiquadCoefficients {
    /// Largest pole magnitude; strictly below 1 for a stable section
    pub fn pole_radius(&self) -> f64 {
        let [_, a1, a2] = self.a;
        let discriminant = a1 * a1 - 4.0 * a2;
        if discriminant < 0.0 {
            // Complex conjugate pair at radius sqrt(a2)
            a2.sqrt()
        } else {
            let root = discriminant.sqrt();
            let p1 = (-a1 + root) / 2.0;
            let p2 = (-a1 - root) / 2.0;
            p1.abs().max(p2.abs())
        }
    }
}

/// How a filter is applied to a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Single forward pass; frequency-dependent phase shift
    Causal,
    /// Forward-backward pass; no net phase shift
    ZeroPhase,
}

/// A designed notch filter
///
/// Couples a validated [`FilterSpec`] with the coefficients derived from it.
/// The coefficients are computed exactly once at construction and reused for
/// both response evaluation and signal filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchFilter {
    spec: FilterSpec,
    coefficients: BiquadCoefficients,
}

impl NotchFilter {
    /// Design a notch filter from a specification
    pub fn design(spec: FilterSpec) -> Result<Self, FilterError> {
        let coefficients = design_notch(spec)?;
        Ok(Self { spec, coefficients })
    }

    /// The specification the filter was designed from
    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// The derived biquad coefficients
    pub fn coefficients(&self) -> &BiquadCoefficients {
        &self.coefficients
    }

    /// Evaluate the magnitude response at the given query frequencies
    pub fn response(&self, query_frequencies: &[f64]) -> Result<FrequencyResponse, FilterError> {
        evaluate_response(&self.coefficients, query_frequencies, self.spec.sample_rate_hz)
    }

    /// Apply the filter to a signal in the given mode
    pub fn apply(
        &self,
        input: &crate::signal::Signal,
        mode: FilterMode,
    ) -> Result<crate::signal::Signal, FilterError> {
        apply_filter(&self.coefficients, input, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_validation() {
        assert!(FilterSpec::new(50.0, 20.0, 1000.0).validate().is_ok());
        assert!(FilterSpec::new(0.0, 20.0, 1000.0).validate().is_err());
        assert!(FilterSpec::new(-50.0, 20.0, 1000.0).validate().is_err());
        assert!(FilterSpec::new(50.0, 0.0, 1000.0).validate().is_err());
        assert!(FilterSpec::new(50.0, 20.0, 0.0).validate().is_err());
        assert!(FilterSpec::new(500.0, 20.0, 1000.0).validate().is_err()); // Nyquist
        assert!(FilterSpec::new(600.0, 20.0, 1000.0).validate().is_err());
        assert!(FilterSpec::new(f64::NAN, 20.0, 1000.0).validate().is_err());
    }

    #[test]
    fn test_wide_bandwidth_rejected() {
        // A notch this wide would push tan() off its principal branch
        assert!(FilterSpec::new(499.0, 0.1, 1000.0).validate().is_err());
        assert!(FilterSpec::new(499.0, 10.0, 1000.0).validate().is_ok());
    }

    #[test]
    fn test_facade_reuses_one_coefficient_set() {
        let spec = FilterSpec::new(50.0, 20.0, 1000.0);
        let filter = NotchFilter::design(spec).unwrap();
        let direct = design_notch(spec).unwrap();
        assert_eq!(*filter.coefficients(), direct);
    }
}
