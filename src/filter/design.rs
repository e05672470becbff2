// src/filter/design.rs
//! Closed-form notch biquad design

use super::{BiquadCoefficients, FilterError, FilterSpec};
use std::f64::consts::PI;

/// Compute notch biquad coefficients for a specification
///
/// Places a conjugate zero pair on the unit circle at the center frequency and
/// a matching pole pair inside it, with the pole radius set by the quality
/// factor. The numerator gain is chosen so the section has exactly unit gain
/// at DC and at Nyquist; everything between is passed with approximately unit
/// gain except for the notch itself.
///
/// Pure function: identical specifications yield bit-identical coefficients.
pub fn design_notch(spec: FilterSpec) -> Result<BiquadCoefficients, FilterError> {
    spec.validate()?;

    let omega = 2.0 * PI * spec.center_frequency_hz / spec.sample_rate_hz;
    let bandwidth = omega / spec.quality_factor;
    let beta = (bandwidth / 2.0).tan();
    let gain = 1.0 / (1.0 + beta);
    let cos_omega = omega.cos();

    let coefficients = BiquadCoefficients {
        b: [gain, -2.0 * gain * cos_omega, gain],
        // a2 = (1 - beta) / (1 + beta), the squared pole radius
        a: [1.0, -2.0 * gain * cos_omega, 2.0 * gain - 1.0],
    };

    tracing::debug!(
        center_frequency_hz = spec.center_frequency_hz,
        quality_factor = spec.quality_factor,
        sample_rate_hz = spec.sample_rate_hz,
        pole_radius = coefficients.pole_radius(),
        "designed notch biquad"
    );

    Ok(coefficients)
}
