// Application configuration, loaded from environment variables and CLI flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::countdown::DEFAULT_STEP_DELAY;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Delay between countdown steps.
    pub countdown_delay: Duration,
    /// Optional JSON file of launch type definitions.
    /// When unset, the built-in launch types are used.
    pub launch_types_file: Option<PathBuf>,
    /// Optional RNG seed for reproducible battles.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables and CLI arguments.
    ///
    /// Environment variables:
    /// - `BITARENA_COUNTDOWN_MS` - Delay between countdown steps (default: 800)
    /// - `LAUNCH_TYPES_FILE` - Path to a launch-type registry JSON file
    ///
    /// CLI flags:
    /// - `--seed <N>` - Seed the battle RNG for a reproducible run
    pub fn load() -> Self {
        let args: Vec<String> = std::env::args().collect();

        let countdown_delay = std::env::var("BITARENA_COUNTDOWN_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_STEP_DELAY);

        let launch_types_file = std::env::var("LAUNCH_TYPES_FILE").ok().map(PathBuf::from);

        let seed = Self::parse_cli_value(&args, "--seed").and_then(|v| v.parse().ok());

        Config {
            countdown_delay,
            launch_types_file,
            seed,
        }
    }

    /// Parse a CLI flag value like `--seed 42`.
    fn parse_cli_value(args: &[String], flag: &str) -> Option<String> {
        args.windows(2).find_map(|pair| {
            if pair[0] == flag {
                Some(pair[1].clone())
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_value() {
        let args: Vec<String> = ["bitarena", "--seed", "42"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            Config::parse_cli_value(&args, "--seed"),
            Some("42".to_string())
        );
        assert_eq!(Config::parse_cli_value(&args, "--other"), None);
    }
}
