// src/config/mod.rs
//! Demo pipeline configuration

use crate::filter::{FilterMode, FilterSpec};
use crate::signal::SynthesisConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist
    #[error("configuration file not found: {0}")]
    FileNotFound(String),
    /// The file is not valid TOML for [`DemoConfig`]
    #[error("configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Underlying file I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Notch parameters for the demo pipeline
///
/// The sample rate lives in the synthesis section; see
/// [`DemoConfig::filter_spec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotchConfig {
    /// Frequency to remove, in Hz
    pub center_frequency_hz: f64,
    /// Notch quality factor
    pub quality_factor: f64,
}

/// Output locations for the demo pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path for the unfiltered rendition
    pub original_wav: String,
    /// Path for the filtered rendition
    pub filtered_wav: String,
}

/// Complete demo pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Notch filter parameters
    pub filter: NotchConfig,
    /// Synthetic source signal recipe
    pub synthesis: SynthesisConfig,
    /// How the filter is applied
    pub mode: FilterMode,
    /// Where rendered audio is written
    pub output: OutputConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            filter: NotchConfig {
                center_frequency_hz: 1000.0,
                quality_factor: 30.0,
            },
            synthesis: SynthesisConfig::default(),
            mode: FilterMode::Causal,
            output: OutputConfig {
                original_wav: "original.wav".to_string(),
                filtered_wav: "filtered.wav".to_string(),
            },
        }
    }
}

impl DemoConfig {
    /// Load configuration from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded demo configuration");
        Ok(config)
    }

    /// Filter specification combining the notch section with the synthesis
    /// sample rate
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec::new(
            self.filter.center_frequency_hz,
            self.filter.quality_factor,
            self.synthesis.sample_rate_hz,
        )
    }
}
