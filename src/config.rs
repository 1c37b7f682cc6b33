//! Runtime configuration read from the environment (after `.env` loading).

/// Path of the log4rs config when `ROUTER_ADDR_LOG_CONFIG` is unset.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file loaded by the binary.
    pub log_config: String,
    /// Reject non-contiguous mask arguments in the CLI.
    pub strict_masks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            strict_masks: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_config = lookup("ROUTER_ADDR_LOG_CONFIG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string());
        let strict_masks = lookup("ROUTER_ADDR_STRICT_MASKS")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Config {
            log_config,
            strict_masks,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, "log4rs.yml");
        assert!(!config.strict_masks);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ROUTER_ADDR_LOG_CONFIG", "/etc/router-addr/log.yml"),
            ("ROUTER_ADDR_STRICT_MASKS", "TRUE"),
        ]));
        assert_eq!(config.log_config, "/etc/router-addr/log.yml");
        assert!(config.strict_masks);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" yes "));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_blank_log_config() {
        let config = Config::from_lookup(lookup_from(&[("ROUTER_ADDR_LOG_CONFIG", "  ")]));
        assert_eq!(config.log_config, DEFAULT_LOG_CONFIG);
    }
}
