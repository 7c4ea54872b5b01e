use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::ChartLimits;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_top_synergy_companies")]
    pub top_synergy_companies: usize,
    #[serde(default = "default_top_network_companies")]
    pub top_network_companies: usize,
    /// Largest accepted contacts file, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_synergy_companies: default_top_synergy_companies(),
            top_network_companies: default_top_network_companies(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl AnalysisSettings {
    pub fn chart_limits(&self) -> ChartLimits {
        ChartLimits {
            synergy_companies: self.top_synergy_companies,
            network_companies: self.top_network_companies,
        }
    }
}

fn default_top_synergy_companies() -> usize { 5 }
fn default_top_network_companies() -> usize { 10 }
fn default_max_upload_bytes() -> usize { 10 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with NETSYN)
    /// 5. `PORT`, when set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., NETSYN__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("NETSYN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_port_override(settings, std::env::var("PORT").ok())?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("NETSYN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Hosting platforms hand the listen port over in `PORT`
fn apply_port_override(settings: Config, port: Option<String>) -> Result<Config, ConfigError> {
    let Some(port) = port else {
        return Ok(settings);
    };

    let port: u16 = port
        .trim()
        .parse()
        .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;

    Config::builder()
        .add_source(settings)
        .set_override("server.port", port as i64)?
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_analysis_settings() {
        let analysis = AnalysisSettings::default();
        assert_eq!(analysis.top_synergy_companies, 5);
        assert_eq!(analysis.top_network_companies, 10);
        assert_eq!(analysis.chart_limits(), ChartLimits::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "compact");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: Settings = Config::builder().build().unwrap().try_deserialize().unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.analysis.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_port_override() {
        let config = apply_port_override(Config::builder().build().unwrap(), Some("9090".to_string())).unwrap();
        let settings: Settings = config.try_deserialize().unwrap();
        assert_eq!(settings.server.port, 9090);

        assert!(apply_port_override(Config::builder().build().unwrap(), Some("nope".to_string())).is_err());
    }
}
