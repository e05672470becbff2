// src/bin/demo_main.rs
//! End-to-end notch filtering demo
//!
//! Synthesizes a multi-tone signal, removes one tone with a notch filter, and
//! writes both renditions as WAV files. Pass a TOML config path to override
//! the defaults; pass --play (with the `playback` feature) to hear the result.

use notch_core::config::DemoConfig;
use notch_core::filter::{linear_grid, NotchFilter};
use notch_core::io::wav;
use notch_core::signal::{magnitude_spectrum, Signal};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("Notch Filter Demo");
    println!("=================");

    let mut config = DemoConfig::default();
    let mut play = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--play" => play = true,
            path => {
                println!("\nLoading configuration from {}...", path);
                config = DemoConfig::from_path(path)?;
            }
        }
    }

    let spec = config.filter_spec();
    println!("\nDesigning notch filter...");
    println!("  - Center frequency: {} Hz", spec.center_frequency_hz);
    println!("  - Quality factor: {}", spec.quality_factor);
    println!("  - Sample rate: {} Hz", spec.sample_rate_hz);

    let filter = NotchFilter::design(spec)?;
    let coeffs = filter.coefficients();
    println!("  b = [{:.6}, {:.6}, {:.6}]", coeffs.b[0], coeffs.b[1], coeffs.b[2]);
    println!("  a = [{:.6}, {:.6}, {:.6}]", coeffs.a[0], coeffs.a[1], coeffs.a[2]);

    let response = filter.response(&linear_grid(spec.sample_rate_hz, 2048))?;
    let (realized_hz, depth_db) = response.realized_notch();
    println!("  Requested notch: {:.1} Hz", spec.center_frequency_hz);
    println!("  Realized notch:  {:.1} Hz at {:.1} dB", realized_hz, depth_db);

    println!("\nSynthesizing test signal...");
    let original = config.synthesis.render()?;
    println!(
        "  {} samples over {:.2} s at {} Hz",
        original.len(),
        original.duration_s(),
        original.sample_rate_hz
    );

    println!("\nApplying filter ({:?} mode)...", config.mode);
    let filtered = filter.apply(&original, config.mode)?;

    let before = magnitude_spectrum(&original);
    let after = magnitude_spectrum(&filtered);
    println!("\nTone amplitudes, original -> filtered:");
    for tone in &config.synthesis.tones {
        println!(
            "  {:8.1} Hz: {:.4} -> {:.4}",
            tone.frequency_hz,
            before.magnitude_near(tone.frequency_hz),
            after.magnitude_near(tone.frequency_hz)
        );
    }

    wav::write_mono_16(&config.output.original_wav, &original)?;
    wav::write_mono_16(&config.output.filtered_wav, &filtered)?;
    println!(
        "\nWrote {} and {}",
        config.output.original_wav, config.output.filtered_wav
    );

    if play {
        play_signals(&original, &filtered)?;
    }

    println!("\nDemo completed successfully");
    Ok(())
}

#[cfg(feature = "playback")]
fn play_signals(original: &Signal, filtered: &Signal) -> Result<(), Box<dyn Error>> {
    println!("\nPlaying original...");
    notch_core::playback::play_blocking(original)?;
    std::thread::sleep(std::time::Duration::from_secs(2));
    println!("Playing filtered...");
    notch_core::playback::play_blocking(filtered)?;
    Ok(())
}

#[cfg(not(feature = "playback"))]
fn play_signals(_original: &Signal, _filtered: &Signal) -> Result<(), Box<dyn Error>> {
    println!("\nPlayback requested but the `playback` feature is disabled.");
    println!("Rebuild with --features playback to hear the result.");
    Ok(())
}
