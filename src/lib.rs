//! Notch-Core: single-notch IIR filtering for audio signals
//!
//! This library designs a second-order notch filter from a small parameter
//! set, evaluates its frequency response, and applies it to sampled signals.
//! It features:
//!
//! - Closed-form notch biquad design with validated parameters
//! - Frequency-response evaluation with realized-notch reporting
//! - Causal (single-pass) and zero-phase (forward-backward) filtering
//! - Synthetic multi-tone test signals with optional Gaussian noise
//! - Single-sided FFT magnitude spectra for before/after comparison
//! - Mono 16-bit WAV input/output
//!
//! # Quick Start
//!
//! ```rust
//! use notch_core::filter::{FilterMode, FilterSpec, NotchFilter};
//! use notch_core::signal::Signal;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Remove a 50 Hz hum from a signal sampled at 1 kHz
//!     let spec = FilterSpec::new(50.0, 20.0, 1000.0);
//!     let filter = NotchFilter::design(spec)?;
//!
//!     let samples: Vec<f64> = (0..1000)
//!         .map(|n| (2.0 * std::f64::consts::PI * 50.0 * n as f64 / 1000.0).sin())
//!         .collect();
//!     let hum = Signal::new(samples, 1000.0);
//!
//!     let cleaned = filter.apply(&hum, FilterMode::ZeroPhase)?;
//!     assert_eq!(cleaned.len(), hum.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod filter;
pub mod io;
#[cfg(feature = "playback")]
pub mod playback;
pub mod signal;

// Re-export commonly used types for convenience
pub use filter::{
    apply_filter, design_notch, evaluate_response, BiquadCoefficients, FilterError, FilterMode,
    FilterSpec, FrequencyResponse, NotchFilter,
};
pub use signal::{magnitude_spectrum, Signal, Spectrum, SynthesisConfig, ToneComponent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
