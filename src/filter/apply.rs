// src/filter/apply.rs
//! Causal and zero-phase filter application

use super::{BiquadCoefficients, FilterError, FilterMode};
use crate::signal::Signal;

/// Samples reflected onto each end before the zero-phase passes:
/// 3 * max(len(b), len(a)) for a biquad section
const PAD_LEN: usize = 9;

/// Single biquad section state, direct form II transposed
#[derive(Debug, Clone, Copy, Default)]
struct BiquadState {
    z1: f64,
    z2: f64,
}

impl BiquadState {
    fn with_initial(zi: [f64; 2], scale: f64) -> Self {
        Self {
            z1: zi[0] * scale,
            z2: zi[1] * scale,
        }
    }

    #[inline]
    fn process(&mut self, coeffs: &BiquadCoefficients, input: f64) -> f64 {
        let output = coeffs.b[0] * input + self.z1;
        self.z1 = coeffs.b[1] * input - coeffs.a[1] * output + self.z2;
        self.z2 = coeffs.b[2] * input - coeffs.a[2] * output;
        output
    }
}

/// Apply a filter to a signal, returning a new signal of the same length
///
/// `Causal` runs a single recursive pass from zero state: `output[i]` depends
/// only on `input[0..=i]` and previously computed outputs. `ZeroPhase` runs
/// the filter forward and backward so phase distortion cancels; it needs at
/// least [`zero_phase_min_len`] input samples and fails with
/// [`FilterError::SignalTooShort`] below that. The input is never mutated.
pub fn apply_filter(
    coeffs: &BiquadCoefficients,
    input: &Signal,
    mode: FilterMode,
) -> Result<Signal, FilterError> {
    let samples = match mode {
        FilterMode::Causal => filter_pass(coeffs, BiquadState::default(), &input.samples),
        FilterMode::ZeroPhase => zero_phase(coeffs, &input.samples)?,
    };
    Ok(Signal::new(samples, input.sample_rate_hz))
}

/// Minimum input length accepted by zero-phase filtering
pub fn zero_phase_min_len() -> usize {
    PAD_LEN + 1
}

fn filter_pass(coeffs: &BiquadCoefficients, mut state: BiquadState, x: &[f64]) -> Vec<f64> {
    x.iter().map(|&sample| state.process(coeffs, sample)).collect()
}

/// Steady-state section state for a unit step input
///
/// Starting each zero-phase pass from this state (scaled by the first sample)
/// removes most of the startup transient at the signal edges.
fn step_initial_state(coeffs: &BiquadCoefficients) -> [f64; 2] {
    let dc_gain = (coeffs.b[0] + coeffs.b[1] + coeffs.b[2])
        / (coeffs.a[0] + coeffs.a[1] + coeffs.a[2]);
    let z2 = coeffs.b[2] - coeffs.a[2] * dc_gain;
    let z1 = coeffs.b[1] - coeffs.a[1] * dc_gain + z2;
    [z1, z2]
}

fn zero_phase(coeffs: &BiquadCoefficients, x: &[f64]) -> Result<Vec<f64>, FilterError> {
    let n = x.len();
    if n <= PAD_LEN {
        return Err(FilterError::SignalTooShort {
            len: n,
            min: PAD_LEN + 1,
        });
    }

    // Odd (point-reflected) extension at both ends
    let first = x[0];
    let last = x[n - 1];
    let mut extended = Vec::with_capacity(n + 2 * PAD_LEN);
    for j in (1..=PAD_LEN).rev() {
        extended.push(2.0 * first - x[j]);
    }
    extended.extend_from_slice(x);
    for j in 0..PAD_LEN {
        extended.push(2.0 * last - x[n - 2 - j]);
    }

    let zi = step_initial_state(coeffs);

    // Forward pass
    let state = BiquadState::with_initial(zi, extended[0]);
    let mut forward = filter_pass(coeffs, state, &extended);

    // Backward pass over the reversed forward output
    forward.reverse();
    let state = BiquadState::with_initial(zi, forward[0]);
    let mut backward = filter_pass(coeffs, state, &forward);
    backward.reverse();

    Ok(backward[PAD_LEN..PAD_LEN + n].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{design_notch, FilterSpec};
    use std::f64::consts::PI;

    fn test_coeffs() -> BiquadCoefficients {
        design_notch(FilterSpec::new(50.0, 20.0, 1000.0)).unwrap()
    }

    fn sine(frequency_hz: f64, sample_rate_hz: f64, n: usize) -> Signal {
        let samples = (0..n)
            .map(|i| (2.0 * PI * frequency_hz * i as f64 / sample_rate_hz).sin())
            .collect();
        Signal::new(samples, sample_rate_hz)
    }

    #[test]
    fn test_both_modes_preserve_length() {
        let coeffs = test_coeffs();
        let input = sine(15.0, 1000.0, 1000);

        for mode in [FilterMode::Causal, FilterMode::ZeroPhase] {
            let output = apply_filter(&coeffs, &input, mode).unwrap();
            assert_eq!(output.len(), input.len());
            assert_eq!(output.sample_rate_hz, input.sample_rate_hz);
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let coeffs = test_coeffs();
        let input = sine(15.0, 1000.0, 100);
        let copy = input.clone();

        apply_filter(&coeffs, &input, FilterMode::ZeroPhase).unwrap();
        assert_eq!(input, copy);
    }

    #[test]
    fn test_causal_output_is_causal() {
        // An impulse at sample 50 must not affect output before sample 50
        let coeffs = test_coeffs();
        let mut samples = vec![0.0; 200];
        samples[50] = 1.0;
        let input = Signal::new(samples, 1000.0);

        let output = apply_filter(&coeffs, &input, FilterMode::Causal).unwrap();
        assert!(output.samples[..50].iter().all(|&y| y == 0.0));
        assert!(output.samples[50] != 0.0);
    }

    #[test]
    fn test_causal_dc_step_settles_to_unity() {
        let coeffs = test_coeffs();
        let input = Signal::new(vec![1.0; 4000], 1000.0);

        let output = apply_filter(&coeffs, &input, FilterMode::Causal).unwrap();
        assert!((output.samples[3999] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_phase_minimum_length() {
        let coeffs = test_coeffs();

        let short = sine(15.0, 1000.0, PAD_LEN);
        assert_eq!(
            apply_filter(&coeffs, &short, FilterMode::ZeroPhase),
            Err(FilterError::SignalTooShort {
                len: PAD_LEN,
                min: PAD_LEN + 1
            })
        );

        let just_long_enough = sine(15.0, 1000.0, PAD_LEN + 1);
        assert!(apply_filter(&coeffs, &just_long_enough, FilterMode::ZeroPhase).is_ok());
    }

    #[test]
    fn test_zero_phase_removes_center_tone() {
        let coeffs = test_coeffs();
        let input = sine(50.0, 1000.0, 2000);

        let output = apply_filter(&coeffs, &input, FilterMode::ZeroPhase).unwrap();

        // Steady-state portion of the 50 Hz tone is strongly attenuated
        let rms = |s: &[f64]| (s.iter().map(|v| v * v).sum::<f64>() / s.len() as f64).sqrt();
        let input_rms = rms(&input.samples[500..1500]);
        let output_rms = rms(&output.samples[500..1500]);
        assert!(
            output_rms < input_rms * 0.1,
            "expected >20 dB attenuation, got input_rms={} output_rms={}",
            input_rms,
            output_rms
        );
    }

    #[test]
    fn test_empty_causal_input() {
        let coeffs = test_coeffs();
        let input = Signal::new(Vec::new(), 1000.0);
        let output = apply_filter(&coeffs, &input, FilterMode::Causal).unwrap();
        assert!(output.is_empty());
    }
}
