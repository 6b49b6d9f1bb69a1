//! CLI configuration management.
//!
//! Merges command-line overrides over environment variables, falling back to
//! defaults.

use std::str::FromStr;
use thiserror::Error;
use tourney::EventKind;

/// How a generated schedule is written out
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'text' or 'json', got '{other}'")),
        }
    }
}

/// Values given on the command line; they win over the environment
#[derive(Clone, Debug, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub json: bool,
    pub event_kind: Option<EventKind>,
}

/// Resolved CLI configuration
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CliConfig {
    /// Seed for a reproducible draw; `None` draws from the thread RNG
    pub seed: Option<u64>,
    /// Output format
    pub output: OutputMode,
    /// Event kind when not chosen interactively
    pub event_kind: Option<EventKind>,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment
    ///
    /// * `TOURNEY_SEED` - Shuffle seed
    /// * `TOURNEY_OUTPUT` - `text` or `json`
    /// * `TOURNEY_EVENT` - `singles` or `doubles`
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`], reading variables through `lookup`
    pub fn from_lookup<F>(overrides: CliOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => parse_var(&lookup, "TOURNEY_SEED")?,
        };

        let output = if overrides.json {
            OutputMode::Json
        } else {
            parse_var(&lookup, "TOURNEY_OUTPUT")?.unwrap_or_default()
        };

        let event_kind = match overrides.event_kind {
            Some(kind) => Some(kind),
            None => parse_var(&lookup, "TOURNEY_EVENT")?,
        };

        Ok(Self {
            seed,
            output,
            event_kind,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse an optional environment variable, rejecting bad values
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = CliConfig::from_lookup(CliOverrides::default(), env(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_env_values_are_read() {
        let config = CliConfig::from_lookup(
            CliOverrides::default(),
            env(&[
                ("TOURNEY_SEED", "42"),
                ("TOURNEY_OUTPUT", "json"),
                ("TOURNEY_EVENT", "doubles"),
            ]),
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.output, OutputMode::Json);
        assert_eq!(config.event_kind, Some(EventKind::Doubles));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = CliOverrides {
            seed: Some(7),
            json: true,
            event_kind: Some(EventKind::Singles),
        };
        let config = CliConfig::from_lookup(
            overrides,
            env(&[
                ("TOURNEY_SEED", "42"),
                ("TOURNEY_OUTPUT", "text"),
                ("TOURNEY_EVENT", "doubles"),
            ]),
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.output, OutputMode::Json);
        assert_eq!(config.event_kind, Some(EventKind::Singles));
    }

    #[test]
    fn test_invalid_seed_rejected() {
        let err = CliConfig::from_lookup(CliOverrides::default(), env(&[("TOURNEY_SEED", "abc")]))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("TOURNEY_SEED"));
    }

    #[test]
    fn test_invalid_output_rejected() {
        let err = CliConfig::from_lookup(
            CliOverrides::default(),
            env(&[("TOURNEY_OUTPUT", "yaml")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_blank_variable_ignored() {
        let config =
            CliConfig::from_lookup(CliOverrides::default(), env(&[("TOURNEY_SEED", "  ")]))
                .unwrap();
        assert_eq!(config.seed, None);
    }
}
