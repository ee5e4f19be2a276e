//! Command line, config layering and log setup for the `fallgrid` binary.
//!
//! Config precedence: built-in defaults, then `--config <file.toml>`, then the
//! individual flags.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::{EngineConfig, RandomizerKind};

#[derive(Debug, Parser)]
#[command(name = "fallgrid")]
#[command(about = "Falling-block puzzle game for the terminal")]
pub struct Cli {
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    pub width: Option<u16>,

    /// Grid height in cells
    #[arg(long)]
    pub height: Option<u16>,

    /// Gravity interval in milliseconds per row
    #[arg(long = "fall-ms")]
    pub fall_interval_ms: Option<u32>,

    /// Seed for the piece stream
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the 7-bag randomizer instead of uniform draws
    #[arg(long)]
    pub bag: bool,

    /// Write logs to this file (RUST_LOG filters, default "fallgrid=info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Layer the config file and flags over the defaults, then validate.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                EngineConfig::from_toml_str(&text)
                    .with_context(|| format!("loading config {}", path.display()))?
            }
            None => EngineConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(ms) = self.fall_interval_ms {
            config.fall_interval_ms = ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.bag {
            config.randomizer = RandomizerKind::Bag;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Install a file-backed tracing subscriber. The terminal is in raw mode while
/// playing, so logs never go to stdout or stderr.
pub fn init_logging(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("creating log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fallgrid=info,fallgrid_core=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fallgrid").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_gives_defaults() {
        let config = parse(&[]).engine_config().unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&["--width", "12", "--fall-ms", "500", "--seed", "3", "--bag"])
            .engine_config()
            .unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 20);
        assert_eq!(config.fall_interval_ms, 500);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.randomizer, RandomizerKind::Bag);
    }

    #[test]
    fn invalid_flags_fail_validation() {
        assert!(parse(&["--height", "2"]).engine_config().is_err());
        assert!(parse(&["--fall-ms", "0"]).engine_config().is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = parse(&["--config", "/nonexistent/fallgrid.toml"])
            .engine_config()
            .unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
