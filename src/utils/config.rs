use std::str::FromStr;

use tracing::{warn, Level};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";
pub const DEFAULT_UPSTREAM_MAX_CONCURRENT: usize = 8;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upstream_base_url: String,
    /// Upper bound on in-flight upstream requests across the whole process.
    pub upstream_max_concurrent: usize,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            upstream_max_concurrent: DEFAULT_UPSTREAM_MAX_CONCURRENT,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn init() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        let upstream_base_url = lookup("UPSTREAM_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.upstream_base_url);

        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        Config {
            port: parse_or(&lookup, "PORT", defaults.port),
            upstream_base_url,
            upstream_max_concurrent: parse_or(
                &lookup,
                "UPSTREAM_MAX_CONCURRENT",
                defaults.upstream_max_concurrent,
            )
            .max(1),
            log_level,
        }
    }

    pub fn with_upstream(upstream_base_url: &str) -> Self {
        Config {
            upstream_base_url: upstream_base_url.trim_end_matches('/').to_string(),
            ..Config::default()
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {key}={raw:?}");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.upstream_base_url, DEFAULT_UPSTREAM_BASE_URL);
        assert_eq!(config.upstream_max_concurrent, 8);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("UPSTREAM_BASE_URL", "http://localhost:9000/api/f1/"),
            ("UPSTREAM_MAX_CONCURRENT", "3"),
            ("LOG_LEVEL", "DEBUG"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_base_url, "http://localhost:9000/api/f1");
        assert_eq!(config.upstream_max_concurrent, 3);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("PORT", "not-a-port"),
            ("UPSTREAM_MAX_CONCURRENT", "0"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.upstream_max_concurrent, 1);
        assert_eq!(config.log_level, Level::INFO);
    }
}
