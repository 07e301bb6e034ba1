//! CLI argument definitions for the Concord application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Concord — turn a paragraph into sentences, concept relations, and a
/// quantized embedding preview.
#[derive(Parser, Debug)]
#[command(name = "concord", version, about)]
pub struct CliArgs {
    /// File containing the input text. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > CONCORD_CONFIG env var > ./concord.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("CONCORD_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("concord.toml")
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["concord"]);
        assert!(args.input.is_none());
        assert!(args.config.is_none());
        assert!(!args.pretty);
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let args = CliArgs::parse_from(["concord", "--config", "/tmp/custom.toml"]);
        assert_eq!(args.resolve_config_path(), PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_log_level_flag_overrides_config() {
        let args = CliArgs::parse_from(["concord", "--log-level", "debug"]);
        assert_eq!(args.resolve_log_level("info"), "debug");
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        let args = CliArgs::parse_from(["concord"]);
        assert_eq!(args.resolve_log_level("warn"), "warn");
    }

    #[test]
    fn test_positional_input() {
        let args = CliArgs::parse_from(["concord", "paragraph.txt", "--pretty"]);
        assert_eq!(args.input, Some(PathBuf::from("paragraph.txt")));
        assert!(args.pretty);
    }
}
