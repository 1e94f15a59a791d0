/// Default number of preference bundles processed per batch.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Admin tool configuration loaded from environment variables.
///
/// All fields have defaults suitable for running against local fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Bundles filtered per batch (default: `100`).
    pub batch_size: usize,
    /// Pretty-print JSON output (default: `true`).
    pub pretty: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            pretty: true,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default |
    /// |-------------------------|---------|
    /// | `NOTIFPREFS_BATCH_SIZE` | `100`   |
    /// | `NOTIFPREFS_PRETTY`     | `true`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let batch_size = match lookup("NOTIFPREFS_BATCH_SIZE") {
            None => defaults.batch_size,
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "NOTIFPREFS_BATCH_SIZE",
                        expected: "a positive integer",
                        value,
                    })
                }
            },
        };

        let pretty = match lookup("NOTIFPREFS_PRETTY") {
            None => defaults.pretty,
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::Invalid {
                var: "NOTIFPREFS_PRETTY",
                expected: "a boolean",
                value: value.clone(),
            })?,
        };

        Ok(Self { batch_size, pretty })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AdminConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AdminConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), AdminConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[("NOTIFPREFS_BATCH_SIZE", "25"), ("NOTIFPREFS_PRETTY", "off")]).unwrap();
        assert_eq!(config.batch_size, 25);
        assert!(!config.pretty);
    }

    #[test]
    fn zero_batch_size_rejects() {
        assert_matches!(
            load(&[("NOTIFPREFS_BATCH_SIZE", "0")]),
            Err(ConfigError::Invalid { var: "NOTIFPREFS_BATCH_SIZE", .. })
        );
    }

    #[test]
    fn non_numeric_batch_size_rejects() {
        assert!(load(&[("NOTIFPREFS_BATCH_SIZE", "many")]).is_err());
    }

    #[test]
    fn unknown_boolean_rejects() {
        assert_matches!(
            load(&[("NOTIFPREFS_PRETTY", "maybe")]),
            Err(ConfigError::Invalid { var: "NOTIFPREFS_PRETTY", .. })
        );
    }
}
