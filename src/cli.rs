use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum};

use crate::config::CopyDeltaConfig;

#[derive(Parser)]
#[command(name = "copydelta")]
#[command(author = "xicv")]
#[command(version)]
#[command(about = "Compare two versions of marketing copy: word diff plus readability delta")]
#[command(long_about = "copydelta diffs two versions of a short text word by word and scores the revision \
on readability (Flesch reading ease, grade level, sentence length, passive voice and adverbs).")]
pub struct Cli {
    /// Original version of the text
    #[arg(value_name = "BEFORE", help = "File with the original text")]
    pub before: PathBuf,

    /// Revised version of the text
    #[arg(value_name = "AFTER", help = "File with the revised text")]
    pub after: PathBuf,

    /// Output format
    #[arg(long, help = "Output format (defaults to the configured format)")]
    pub output: Option<OutputFormat>,

    /// Write the comparison block to a file
    #[arg(long, value_name = "PATH", help = "Export the comparison results to a file")]
    pub export: Option<PathBuf>,

    /// Re-run the comparison whenever an input changes
    #[arg(short, long, help = "Watch both files and re-compare on change")]
    pub watch: bool,

    /// Configuration file
    #[arg(short, long, value_name = "PATH", help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Disable colors in output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Highlighted diff, metric table and summary
    Text,
    /// JSON output for scripting
    Json,
    /// Single-line score and change counts
    Compact,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

impl Cli {
    pub fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Load the config file (if any) and apply command-line overrides
    pub fn load_config(&self) -> anyhow::Result<CopyDeltaConfig> {
        let mut config = CopyDeltaConfig::load_or_default(self.config.as_deref())?;
        if self.no_color {
            config.output.color = false;
        }
        Ok(config)
    }

    /// Output format from the flag, falling back to the configured default
    pub fn output_format(&self, config: &CopyDeltaConfig) -> OutputFormat {
        self.output
            .or_else(|| OutputFormat::from_name(&config.output.format))
            .unwrap_or(OutputFormat::Text)
    }

    pub fn validate(&self) -> Result<(), String> {
        for path in [&self.before, &self.after] {
            check_input(path)?;
        }

        if let Some(config) = &self.config {
            if !config.is_file() {
                return Err(format!("Config file does not exist: {}", config.display()));
            }
        }

        Ok(())
    }
}

fn check_input(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Path is not a file: {}", path.display()));
    }

    Ok(())
}
