// src/playback.rs
//! Audio device playback for rendered signals
//!
//! Only compiled with the `playback` feature. The engine performs no
//! resampling; a signal whose rate differs from the device rate plays at the
//! wrong pitch and a warning is logged.

use crate::signal::Signal;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No default output device is available
    #[error("no default output device available")]
    NoDevice,
    /// The default output configuration could not be queried
    #[error("failed to query output config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    /// The device does not offer an f32 output stream
    #[error("unsupported output sample format: {0}")]
    UnsupportedFormat(String),
    /// The output stream could not be built
    #[error("failed to build output stream: {0}")]
    Build(#[from] cpal::BuildStreamError),
    /// The output stream could not be started
    #[error("failed to start output stream: {0}")]
    Play(#[from] cpal::PlayStreamError),
}

/// Play a signal on the default output device, blocking until it finishes
pub fn play_blocking(signal: &Signal) -> Result<(), PlaybackError> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(PlaybackError::NoDevice)?;
    let supported = device.default_output_config()?;
    if supported.sample_format() != cpal::SampleFormat::F32 {
        return Err(PlaybackError::UnsupportedFormat(format!(
            "{:?}",
            supported.sample_format()
        )));
    }
    let config: cpal::StreamConfig = supported.into();

    let device_rate = f64::from(config.sample_rate.0);
    if (device_rate - signal.sample_rate_hz).abs() > f64::EPSILON {
        tracing::warn!(
            signal_rate_hz = signal.sample_rate_hz,
            device_rate_hz = device_rate,
            "device rate differs from signal rate; playing without resampling"
        );
    }

    let channels = config.channels as usize;
    let samples: Arc<Vec<f32>> = Arc::new(signal.samples.iter().map(|&s| s as f32).collect());
    let position = Arc::new(AtomicUsize::new(0));

    let stream = {
        let samples = Arc::clone(&samples);
        let position = Arc::clone(&position);
        device.build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    let index = position.fetch_add(1, Ordering::Relaxed);
                    let value = samples.get(index).copied().unwrap_or(0.0);
                    for out in frame.iter_mut() {
                        *out = value;
                    }
                }
            },
            |err| tracing::warn!("output stream error: {err}"),
            None,
        )?
    };
    stream.play()?;

    // Wait for the buffer to drain, plus a short tail for device latency
    let seconds = samples.len() as f64 / device_rate + 0.25;
    std::thread::sleep(Duration::from_secs_f64(seconds));
    Ok(())
}
