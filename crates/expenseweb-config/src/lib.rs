//! Configuration management for expenseweb
//!
//! This module handles loading, validation, and management of
//! expenseweb configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Remote expense API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection URL of the expense resource
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds, 0 disables it
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:30015/api/expenses".to_string()
}

/// Form submission rules
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Treat a zero amount as a missing field
    #[serde(default = "default_false")]
    pub zero_amount_is_missing: bool,
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

/// Page display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Page heading
    #[serde(default = "default_title")]
    pub title: String,
    /// Render a notice when a request fails
    #[serde(default = "default_true")]
    pub show_errors: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_errors: true,
        }
    }
}

fn default_title() -> String {
    "Daily Expense Tracker".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Currency and number formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Symbol shown next to totals
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Number of decimal places
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Currency symbol position ("before" or "after")
    #[serde(default = "default_symbol_position")]
    pub symbol_position: SymbolPosition,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimal_places: 2,
            symbol_position: SymbolPosition::Before,
        }
    }
}

impl CurrencyConfig {
    /// Format an amount with the configured symbol and precision
    pub fn format(&self, amount: f64) -> String {
        let value = expenseweb_utils::format_fixed(amount, self.decimal_places as usize);
        match self.symbol_position {
            SymbolPosition::Before => format!("{}{}", self.symbol, value),
            SymbolPosition::After => format!("{} {}", value, self.symbol),
        }
    }
}

fn default_symbol() -> String {
    "₹".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_symbol_position() -> SymbolPosition {
    SymbolPosition::Before
}

/// Currency symbol position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

impl Default for SymbolPosition {
    fn default() -> Self {
        SymbolPosition::Before
    }
}


/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote expense API
    #[serde(default)]
    pub api: ApiConfig,
    /// Form rules
    #[serde(default)]
    pub form: FormConfig,
    /// Page display
    #[serde(default)]
    pub ui: UiConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError { message: e.to_string() })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        // An empty document means "all defaults"
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "Base URL must start with http:// or https://".to_string(),
            });
        }

        if self.currency.decimal_places > 10 {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 10".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Text for `--print-config`
    ///
    /// A run on pure defaults gets the commented template; anything loaded
    /// or overridden is dumped as plain YAML.
    pub fn listing(&self, pure_defaults: bool) -> ConfigResult<String> {
        if pure_defaults {
            return Ok(Self::generate_default().to_string());
        }
        serde_yaml::to_string(self).map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })
    }

    /// Collection URL without a trailing slash
    pub fn expenses_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Socket address the view server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.api.base_url, "http://localhost:30015/api/expenses");
        assert_eq!(config.api.timeout_secs, 0);
        assert!(!config.form.zero_amount_is_missing);
        assert!(config.ui.show_errors);
        assert_eq!(config.currency.symbol, "₹");
    }

    #[test]
    fn test_bundled_template_is_valid() {
        let config = Config::from_yaml(Config::generate_default()).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.currency.decimal_places, 2);
        assert_eq!(config.ui.title, "Daily Expense Tracker");
    }

    #[test]
    fn test_template_matches_builtin_defaults() {
        let from_template = Config::from_yaml(Config::generate_default()).unwrap();
        assert_eq!(
            serde_yaml::to_string(&from_template).unwrap(),
            serde_yaml::to_string(&Config::default()).unwrap()
        );
    }

    #[test]
    fn test_listing() {
        let mut config = Config::default();
        assert_eq!(config.listing(true).unwrap(), Config::generate_default());

        config.server.port = 9000;
        let text = config.listing(false).unwrap();
        assert!(text.contains("port: 9000"));
        assert!(!text.starts_with('#'));
    }

    #[test]
    fn test_symbol_position_from_yaml() {
        let config = Config::from_yaml("currency:\n  symbol_position: after\n").unwrap();
        assert_eq!(config.currency.symbol_position, SymbolPosition::After);
        assert!(Config::from_yaml("currency:\n  symbol_position: left\n").is_err());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::from_yaml("api:\n  base_url: \"https://example.com/api/expenses/\"\n").unwrap();
        assert_eq!(config.expenses_url(), "https://example.com/api/expenses");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = Config::from_yaml("server:\n  port: 0\n").unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => assert_eq!(field, "server.port"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = Config::from_yaml("api:\n  base_url: \"ftp://nowhere\"\n").unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Config::from_yaml("server: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidYaml { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_currency_format() {
        let mut currency = CurrencyConfig::default();
        assert_eq!(currency.format(6.0), "₹6.00");
        currency.symbol = "EUR".to_string();
        currency.symbol_position = SymbolPosition::After;
        assert_eq!(currency.format(1.005), "1.00 EUR");
    }
}
