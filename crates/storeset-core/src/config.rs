use thiserror::Error;

use crate::app_config::{AppConfig, Environment, FeedSource};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a config value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a config value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("STORESET_ENV", "development"));
    let bind_addr = parse_addr("STORESET_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STORESET_LOG_LEVEL", "info");
    let feed_source = FeedSource::from_raw(&or_default("STORESET_FEED_SOURCE", "./Source.txt"));
    let fetch_timeout_secs = parse_u64("STORESET_FETCH_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("STORESET_USER_AGENT", "storeset/0.1 (outlet-lookup)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        feed_source,
        fetch_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;
    use std::path::PathBuf;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_all_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).expect("defaults should parse");
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.feed_source,
            FeedSource::Path(PathBuf::from("./Source.txt"))
        );
        assert_eq!(config.fetch_timeout_secs, 30);
    }

    #[test]
    fn build_app_config_url_feed_source() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("STORESET_FEED_SOURCE", "https://cdn.example.com/Source.txt");
        let config = build_app_config(lookup_from_map(&map)).expect("config should parse");
        assert_eq!(
            config.feed_source,
            FeedSource::Url("https://cdn.example.com/Source.txt".to_string())
        );
    }

    #[test]
    fn build_app_config_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("STORESET_BIND_ADDR", "not-an-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STORESET_BIND_ADDR"),
            "expected InvalidEnvVar(STORESET_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_invalid_timeout() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("STORESET_FETCH_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STORESET_FETCH_TIMEOUT_SECS")
        );
    }

    #[test]
    fn feed_source_from_raw_http_is_url() {
        assert_eq!(
            FeedSource::from_raw("http://example.com/feed.txt"),
            FeedSource::Url("http://example.com/feed.txt".to_string())
        );
    }

    #[test]
    fn feed_source_from_raw_relative_path() {
        assert_eq!(
            FeedSource::from_raw("data/Source.txt"),
            FeedSource::Path(PathBuf::from("data/Source.txt"))
        );
    }
}
