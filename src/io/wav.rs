// src/io/wav.rs
//! Minimal mono 16-bit PCM WAV reader and writer
//!
//! Covers exactly the container the demo pipeline needs; anything beyond
//! mono PCM16 is rejected on read.

use crate::signal::Signal;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

/// WAV read/write errors
#[derive(Debug, Error)]
pub enum WavError {
    /// Underlying file I/O failure
    #[error("wav i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a mono PCM16 WAV
    #[error("unsupported wav format: {0}")]
    Format(String),
}

/// Write a signal as a mono 16-bit PCM WAV file
///
/// Samples are clamped to [-1, 1] before conversion.
pub fn write_mono_16<P: AsRef<Path>>(path: P, signal: &Signal) -> Result<(), WavError> {
    let sample_rate = signal.sample_rate_hz.round() as u32;
    let data_len = (signal.len() * 2) as u32;
    let mut writer = BufWriter::new(File::create(path)?);

    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_len).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // PCM
    writer.write_all(&1u16.to_le_bytes())?; // mono
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&(sample_rate * 2).to_le_bytes())?; // byte rate
    writer.write_all(&2u16.to_le_bytes())?; // block align
    writer.write_all(&16u16.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_len.to_le_bytes())?;
    for &sample in &signal.samples {
        let value = (sample.clamp(-1.0, 1.0) * f64::from(i16::MAX)).round() as i16;
        writer.write_all(&value.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a mono 16-bit PCM WAV file into a signal
pub fn read_mono_16<P: AsRef<Path>>(path: P) -> Result<Signal, WavError> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut riff = [0u8; 12];
    reader.read_exact(&mut riff)?;
    if &riff[0..4] != b"RIFF" || &riff[8..12] != b"WAVE" {
        return Err(WavError::Format("missing RIFF/WAVE header".to_string()));
    }

    let mut sample_rate: Option<u32> = None;
    let mut data: Option<Vec<u8>> = None;

    loop {
        let mut chunk_header = [0u8; 8];
        match reader.read_exact(&mut chunk_header) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        }
        let chunk_id = &chunk_header[0..4];
        let chunk_len = u32::from_le_bytes(chunk_header[4..8].try_into().unwrap()) as usize;

        match chunk_id {
            b"fmt " => {
                if chunk_len < 16 {
                    return Err(WavError::Format("fmt chunk too short".to_string()));
                }
                let mut fmt = vec![0u8; chunk_len];
                reader.read_exact(&mut fmt)?;
                let audio_format = u16::from_le_bytes(fmt[0..2].try_into().unwrap());
                let channels = u16::from_le_bytes(fmt[2..4].try_into().unwrap());
                let rate = u32::from_le_bytes(fmt[4..8].try_into().unwrap());
                let bits = u16::from_le_bytes(fmt[14..16].try_into().unwrap());
                if audio_format != 1 {
                    return Err(WavError::Format(format!(
                        "audio format {} is not PCM",
                        audio_format
                    )));
                }
                if channels != 1 {
                    return Err(WavError::Format(format!(
                        "{} channels, expected mono",
                        channels
                    )));
                }
                if bits != 16 {
                    return Err(WavError::Format(format!(
                        "{} bits per sample, expected 16",
                        bits
                    )));
                }
                sample_rate = Some(rate);
            }
            b"data" => {
                let mut bytes = vec![0u8; chunk_len];
                reader.read_exact(&mut bytes)?;
                data = Some(bytes);
            }
            _ => {
                // Skip unknown chunks, honoring RIFF word alignment
                let skip = chunk_len + (chunk_len % 2);
                std::io::copy(&mut (&mut reader).take(skip as u64), &mut std::io::sink())?;
            }
        }
    }

    let sample_rate = sample_rate.ok_or_else(|| WavError::Format("missing fmt chunk".to_string()))?;
    let data = data.ok_or_else(|| WavError::Format("missing data chunk".to_string()))?;
    if data.len() % 2 != 0 {
        return Err(WavError::Format("odd data chunk length".to_string()));
    }

    let samples = data
        .chunks_exact(2)
        .map(|pair| {
            let value = i16::from_le_bytes([pair[0], pair[1]]);
            f64::from(value) / f64::from(i16::MAX)
        })
        .collect();
    Ok(Signal::new(samples, f64::from(sample_rate)))
}
