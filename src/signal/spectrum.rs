// src/signal/spectrum.rs
//! Single-sided magnitude spectra

use super::Signal;
use rustfft::{num_complex::Complex, FftPlanner};

/// Single-sided amplitude spectrum of a signal
///
/// Bin `k` sits at `k * sample_rate / n` Hz, from DC up to and including
/// Nyquist. Magnitudes are linear amplitudes: a full-scale sinusoid on an
/// exact bin reports its peak amplitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Bin center frequencies in Hz
    pub frequencies_hz: Vec<f64>,
    /// Linear amplitude per bin
    pub magnitude: Vec<f64>,
}

impl Spectrum {
    /// Amplitude at the bin closest to the given frequency
    pub fn magnitude_near(&self, frequency_hz: f64) -> f64 {
        let mut best = 0;
        for (i, &f) in self.frequencies_hz.iter().enumerate() {
            if (f - frequency_hz).abs() < (self.frequencies_hz[best] - frequency_hz).abs() {
                best = i;
            }
        }
        self.magnitude.get(best).copied().unwrap_or(0.0)
    }
}

/// Compute the single-sided amplitude spectrum of a signal
pub fn magnitude_spectrum(signal: &Signal) -> Spectrum {
    let n = signal.len();
    if n == 0 {
        return Spectrum {
            frequencies_hz: Vec::new(),
            magnitude: Vec::new(),
        };
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let mut buffer: Vec<Complex<f64>> = signal
        .samples
        .iter()
        .map(|&sample| Complex::new(sample, 0.0))
        .collect();
    fft.process(&mut buffer);

    let bins = n / 2 + 1;
    let mut frequencies_hz = Vec::with_capacity(bins);
    let mut magnitude = Vec::with_capacity(bins);
    for (k, value) in buffer.iter().take(bins).enumerate() {
        frequencies_hz.push(k as f64 * signal.sample_rate_hz / n as f64);
        // DC and (for even n) Nyquist have no mirror bin to fold in
        let scale = if k == 0 || (n % 2 == 0 && k == n / 2) {
            1.0
        } else {
            2.0
        };
        magnitude.push(scale * value.norm() / n as f64);
    }

    Spectrum {
        frequencies_hz,
        magnitude,
    }
}
