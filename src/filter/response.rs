// src/filter/response.rs
//! Frequency response evaluation on the unit circle

use super::{BiquadCoefficients, FilterError};
use rustfft::num_complex::Complex;
use std::f64::consts::PI;

/// Magnitude response of a filter sampled at a set of query frequencies
///
/// Derived, read-only diagnostic artifact. `frequencies_hz` and
/// `magnitude_db` always have the same, nonzero length.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    /// Query frequencies in Hz
    pub frequencies_hz: Vec<f64>,
    /// Magnitude at each query frequency, in dB
    pub magnitude_db: Vec<f64>,
}

impl FrequencyResponse {
    /// The query frequency at which the response magnitude is minimal
    ///
    /// Returns `(frequency_hz, magnitude_db)`. This is the *realized* notch
    /// location, which may differ slightly from the requested center
    /// frequency; callers validating a design should compare the two rather
    /// than assume they coincide.
    pub fn realized_notch(&self) -> (f64, f64) {
        let mut min_index = 0;
        for (i, &db) in self.magnitude_db.iter().enumerate() {
            if db < self.magnitude_db[min_index] {
                min_index = i;
            }
        }
        (self.frequencies_hz[min_index], self.magnitude_db[min_index])
    }
}

/// Evaluate the transfer function magnitude at each query frequency
///
/// Computes `H(e^{-jw})` by direct polynomial evaluation of the numerator and
/// denominator on the unit circle and reports `20*log10(|H|)` per frequency.
pub fn evaluate_response(
    coeffs: &BiquadCoefficients,
    query_frequencies: &[f64],
    sample_rate_hz: f64,
) -> Result<FrequencyResponse, FilterError> {
    if query_frequencies.is_empty() {
        return Err(FilterError::EmptyQuery);
    }
    if !(sample_rate_hz > 0.0) || !sample_rate_hz.is_finite() {
        return Err(FilterError::InvalidSpec(
            "sample rate must be positive and finite".to_string(),
        ));
    }

    let mut magnitude_db = Vec::with_capacity(query_frequencies.len());
    for &frequency in query_frequencies {
        let omega = 2.0 * PI * frequency / sample_rate_hz;
        let z = Complex::new(0.0, -omega).exp();
        let numerator = Complex::new(coeffs.b[0], 0.0) + z * (coeffs.b[1] + z * coeffs.b[2]);
        let denominator = Complex::new(coeffs.a[0], 0.0) + z * (coeffs.a[1] + z * coeffs.a[2]);
        let magnitude = (numerator / denominator).norm();
        // Keep log10 away from zero; an exact null reports as a very deep
        // finite level instead of -inf
        magnitude_db.push(20.0 * magnitude.max(f64::MIN_POSITIVE).log10());
    }

    Ok(FrequencyResponse {
        frequencies_hz: query_frequencies.to_vec(),
        magnitude_db,
    })
}

/// Evenly spaced query frequencies from DC up to (excluding) Nyquist
pub fn linear_grid(sample_rate_hz: f64, points: usize) -> Vec<f64> {
    let nyquist = sample_rate_hz / 2.0;
    (0..points)
        .map(|i| i as f64 * nyquist / points as f64)
        .collect()
}
