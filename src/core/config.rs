// src/core/config.rs
use log::LevelFilter;
use secrecy::SecretString;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::generators::Strategy;

pub const DEFAULT_ADVISOR_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_ADVISOR_MODEL: &str = "gemini-1.5-flash";

// Configuration for the password meter
#[derive(Debug, Clone)]
pub struct Config {
    // Advisory service
    pub api_key: Option<SecretString>,
    pub advisor_base_url: String,
    pub advisor_model: String,
    pub advisor_timeout: Duration,

    // Password Generation
    pub generator_strategy: Strategy,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,

    // Rejected settings, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Advisory service
            api_key: None,
            advisor_base_url: DEFAULT_ADVISOR_BASE_URL.to_string(),
            advisor_model: DEFAULT_ADVISOR_MODEL.to_string(),
            advisor_timeout: Duration::from_secs(30),

            // Password Generation
            generator_strategy: Strategy::PerClass,

            // Logging
            log_level: LevelFilter::Info,
            log_file: crate::utils::default_log_file(),

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build a configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Advisory service
        if let Some(key) = lookup("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                config.api_key = Some(SecretString::from(key));
            }
        }

        if let Some(url) = lookup("ADVISOR_BASE_URL") {
            config.advisor_base_url = url;
        }

        if let Some(model) = lookup("ADVISOR_MODEL") {
            config.advisor_model = model;
        }

        if let Some(val) = lookup("ADVISOR_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(secs) => config.advisor_timeout = Duration::from_secs(secs),
                Err(_) => config
                    .warnings
                    .push(format!("Invalid ADVISOR_TIMEOUT_SECS '{}', using default", val)),
            }
        }

        // Password Generation
        if let Some(val) = lookup("GENERATOR_STRATEGY") {
            match val.parse() {
                Ok(strategy) => config.generator_strategy = strategy,
                Err(e) => config.warnings.push(format!("{}, using per-class", e)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config
                    .warnings
                    .push(format!("Unknown LOG_LEVEL '{}', using info", level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
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
        let config = Config::from_lookup(|_| None);
        assert!(!config.has_api_key());
        assert_eq!(config.advisor_base_url, DEFAULT_ADVISOR_BASE_URL);
        assert_eq!(config.advisor_model, DEFAULT_ADVISOR_MODEL);
        assert_eq!(config.advisor_timeout, Duration::from_secs(30));
        assert_eq!(config.generator_strategy, Strategy::PerClass);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret-key"),
            ("ADVISOR_BASE_URL", "http://localhost:8080/v1"),
            ("ADVISOR_MODEL", "gemini-2.0-flash"),
            ("ADVISOR_TIMEOUT_SECS", "5"),
            ("GENERATOR_STRATEGY", "uniform"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "/tmp/meter.log"),
        ]));

        let key = config.api_key.as_ref().unwrap();
        assert_eq!(key.expose_secret(), "secret-key");
        assert_eq!(config.advisor_base_url, "http://localhost:8080/v1");
        assert_eq!(config.advisor_model, "gemini-2.0-flash");
        assert_eq!(config.advisor_timeout, Duration::from_secs(5));
        assert_eq!(config.generator_strategy, Strategy::Uniform);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, PathBuf::from("/tmp/meter.log"));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "   "),
            ("ADVISOR_TIMEOUT_SECS", "soon"),
            ("GENERATOR_STRATEGY", "dice"),
            ("LOG_LEVEL", "loud"),
        ]));
        assert!(!config.has_api_key());
        assert_eq!(config.advisor_timeout, Duration::from_secs(30));
        assert_eq!(config.generator_strategy, Strategy::PerClass);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(
            config.warnings,
            vec![
                "Invalid ADVISOR_TIMEOUT_SECS 'soon', using default",
                "unknown generator strategy 'dice', using per-class",
                "Unknown LOG_LEVEL 'loud', using info",
            ]
        );
    }

    #[test]
    fn test_valid_values_leave_no_warnings() {
        let config = Config::from_lookup(lookup_from(&[
            ("ADVISOR_TIMEOUT_SECS", "10"),
            ("GENERATOR_STRATEGY", "uniform"),
            ("LOG_LEVEL", "warn"),
        ]));
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "super-secret")]));
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
