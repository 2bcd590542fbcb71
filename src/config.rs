//! Configuration management for copydelta
//!
//! Settings come from an optional TOML file, then environment overrides,
//! then command-line flags (applied by the binary).

use std::path::Path;
use std::time::Duration;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Global configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyDeltaConfig {
    /// Terminal output configuration
    pub output: OutputConfig,
    /// Watch mode configuration
    pub watch: WatchConfig,
    /// Export block configuration
    pub export: ExportSettings,
}

/// Configuration for terminal output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Highlight diffs with ANSI colors
    pub color: bool,
    /// Default output format when none is given on the command line
    pub format: String,
    /// Wrap diff views at this many characters
    pub max_diff_width: usize,
}

/// Configuration for watch mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Ignore repeated events for the same file within this window
    pub debounce_ms: u64,
    /// How long the main loop waits for an event before checking for Ctrl+C
    pub poll_timeout_ms: u64,
}

/// Configuration for the exported comparison block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Prefix the block with a generation timestamp
    pub include_metadata: bool,
    /// Append the marked-up before/after diff
    pub include_diff: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: "text".to_string(),
            max_diff_width: 100,
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            poll_timeout_ms: 100,
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            include_metadata: true,
            include_diff: false,
        }
    }
}

impl WatchConfig {
    /// Get event debounce duration
    pub fn debounce_duration(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Get the receive timeout used by the watch loop
    pub fn poll_timeout_duration(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration loading and management
impl CopyDeltaConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults; env overrides apply either way
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Override values from environment variables if present
    pub fn apply_env(&mut self) {
        if let Ok(val) = std::env::var("COPYDELTA_COLOR") {
            if let Some(color) = parse_bool(&val) {
                self.output.color = color;
            }
        }

        if let Ok(val) = std::env::var("COPYDELTA_WATCH_DEBOUNCE_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                self.watch.debounce_ms = ms;
            }
        }

        if let Ok(val) = std::env::var("COPYDELTA_EXPORT_INCLUDE_DIFF") {
            if let Some(include) = parse_bool(&val) {
                self.export.include_diff = include;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.watch.debounce_ms == 0 {
            return Err("watch.debounce_ms must be greater than 0".to_string());
        }

        if self.watch.poll_timeout_ms == 0 {
            return Err("watch.poll_timeout_ms must be greater than 0".to_string());
        }

        if self.output.max_diff_width == 0 {
            return Err("output.max_diff_width must be greater than 0".to_string());
        }

        if !matches!(self.output.format.as_str(), "text" | "json" | "compact") {
            return Err(format!(
                "output.format must be text, json or compact (got {})",
                self.output.format
            ));
        }

        Ok(())
    }
}
