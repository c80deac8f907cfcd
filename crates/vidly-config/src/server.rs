//! Process-level settings: listen port, logging, metrics.

use std::env;

use crate::{flag_or_true, parse_or};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub metrics_enabled: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: parse_or(get("PORT"), 3000),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            log_format: LogFormat::parse(get("LOG_FORMAT").as_deref()),
            metrics_enabled: flag_or_true(get("METRICS_ENABLED")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.metrics_enabled);
    }

    #[test]
    fn test_reads_overrides() {
        let config = ServerConfig::from_lookup(|key| {
            let value = match key {
                "PORT" => "8080",
                "LOG_LEVEL" => "debug",
                "LOG_FORMAT" => "json",
                "METRICS_ENABLED" => "false",
                _ => return None,
            };
            Some(value.to_string())
        });
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.metrics_enabled);
    }

    #[test]
    fn test_out_of_range_port_falls_back() {
        let config = ServerConfig::from_lookup(|key| (key == "PORT").then(|| "70000".to_string()));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_unknown_log_format_is_compact() {
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Compact);
    }
}
