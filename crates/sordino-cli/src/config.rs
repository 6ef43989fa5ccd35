//! Render settings loaded from an optional TOML file.
//!
//! Every key is optional; missing keys take the defaults below. Command-line
//! flags override whatever the file sets.
//!
//! ```toml
//! block_size = 512
//! bit_depth = 24
//!
//! [filter]
//! cutoff_hz = 2500.0
//! resonance = 0.7
//! ```

use serde::{Deserialize, Serialize};
use sordino_plugin::FilterParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading render settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Filter section of the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSection {
    /// Low-pass cutoff in Hz.
    pub cutoff_hz: f32,
    /// Resonance. Accepted for host parity; the one-pole ignores it.
    pub resonance: f32,
}

impl Default for FilterSection {
    fn default() -> Self {
        Self {
            cutoff_hz: 1000.0,
            resonance: 0.1,
        }
    }
}

/// Offline render settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Samples per channel handed to the processor at a time.
    pub block_size: usize,
    /// Output bit depth (16, 24, or 32).
    pub bit_depth: u16,
    /// Filter parameters.
    pub filter: FilterSection,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            block_size: 512,
            bit_depth: 32,
            filter: FilterSection::default(),
        }
    }
}

impl RenderConfig {
    /// Load and validate settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides, then re-validate.
    pub fn with_overrides(
        mut self,
        cutoff_hz: Option<f32>,
        resonance: Option<f32>,
        block_size: Option<usize>,
        bit_depth: Option<u16>,
    ) -> Result<Self, ConfigError> {
        if let Some(cutoff) = cutoff_hz {
            self.filter.cutoff_hz = cutoff;
        }
        if let Some(resonance) = resonance {
            self.filter.resonance = resonance;
        }
        if let Some(block_size) = block_size {
            self.block_size = block_size;
        }
        if let Some(bit_depth) = bit_depth {
            self.bit_depth = bit_depth;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check every value against what the renderer and parameters accept.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::Invalid("block_size must be at least 1".into()));
        }
        if !matches!(self.bit_depth, 16 | 24 | 32) {
            return Err(ConfigError::Invalid(format!(
                "bit_depth {} (expected 16, 24 or 32)",
                self.bit_depth
            )));
        }

        let params = FilterParams::new();
        let checks = [
            (self.filter.cutoff_hz, "cutoff_hz"),
            (self.filter.resonance, "resonance"),
        ];
        for ((value, key), desc) in checks.into_iter().zip(params.descriptors()) {
            if !(desc.min..=desc.max).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{key} {value} outside [{}, {}]",
                    desc.min, desc.max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = RenderConfig::from_toml("").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.block_size, 512);
        assert_eq!(config.bit_depth, 32);
        assert_eq!(config.filter.cutoff_hz, 1000.0);
        assert_eq!(config.filter.resonance, 0.1);
    }

    #[test]
    fn parses_full_file() {
        let config = RenderConfig::from_toml(
            r#"
block_size = 256
bit_depth = 24

[filter]
cutoff_hz = 2500.0
resonance = 0.7
"#,
        )
        .unwrap();
        assert_eq!(config.block_size, 256);
        assert_eq!(config.bit_depth, 24);
        assert_eq!(config.filter.cutoff_hz, 2500.0);
        assert_eq!(config.filter.resonance, 0.7);
    }

    #[test]
    fn partial_filter_section() {
        let config = RenderConfig::from_toml("[filter]\ncutoff_hz = 300.0\n").unwrap();
        assert_eq!(config.filter.cutoff_hz, 300.0);
        assert_eq!(config.filter.resonance, 0.1);
        assert_eq!(config.block_size, 512);
    }

    #[test]
    fn rejects_bad_values() {
        for bad in [
            "block_size = 0",
            "bit_depth = 8",
            "[filter]\ncutoff_hz = 5.0",
            "[filter]\ncutoff_hz = 30000.0",
            "[filter]\nresonance = 0.0",
        ] {
            assert!(
                matches!(RenderConfig::from_toml(bad), Err(ConfigError::Invalid(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            RenderConfig::from_toml("block_size = \"big\""),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn overrides_win() {
        let config = RenderConfig::from_toml("[filter]\ncutoff_hz = 300.0\n")
            .unwrap()
            .with_overrides(Some(4000.0), None, Some(64), Some(16))
            .unwrap();
        assert_eq!(config.filter.cutoff_hz, 4000.0);
        assert_eq!(config.filter.resonance, 0.1);
        assert_eq!(config.block_size, 64);
        assert_eq!(config.bit_depth, 16);

        assert!(
            RenderConfig::default()
                .with_overrides(None, None, Some(0), None)
                .is_err()
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RenderConfig::load("/nonexistent/sordino.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("/nonexistent/sordino.toml"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.toml");
        std::fs::write(&path, "bit_depth = 16\n").unwrap();
        let config = RenderConfig::load(&path).unwrap();
        assert_eq!(config.bit_depth, 16);
    }
}
