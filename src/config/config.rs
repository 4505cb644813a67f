//! Config file handling

use std::path::PathBuf;

use crate::codegen::Language;
use crate::errors::Curl2RetrofitError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "CURL2RETROFIT_CONFIG_DIR";

/// Interface name used when neither the CLI nor the config names one
pub const DEFAULT_CLASS_NAME: &str = "ApiService";

/// Function name used when neither the CLI nor the config names one
pub const DEFAULT_METHOD_NAME: &str = "performRequest";

/// curl2retrofit configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub config_dir: PathBuf,
    pub language: Language,
    pub class_name: String,
    pub method_name: String,
    pub default_options: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            language: Language::Kotlin,
            class_name: DEFAULT_CLASS_NAME.to_string(),
            method_name: DEFAULT_METHOD_NAME.to_string(),
            default_options: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the config file (TOML format)
    pub fn load() -> Result<Self, Curl2RetrofitError> {
        let config_dir = Self::default_config_dir();
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self {
                config_dir,
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| Curl2RetrofitError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_toml(&content, config_dir)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str, config_dir: PathBuf) -> Result<Self, Curl2RetrofitError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| Curl2RetrofitError::Config(format!("Invalid config TOML: {}", e)))?;

        let defaults = toml_value.get("defaults");
        let get_str = |key: &str| defaults.and_then(|d| d.get(key)).and_then(|v| v.as_str());

        let language = match get_str("language") {
            Some(name) => name.parse::<Language>().map_err(Curl2RetrofitError::Config)?,
            None => Language::Kotlin,
        };

        let class_name = get_str("class_name")
            .unwrap_or(DEFAULT_CLASS_NAME)
            .to_string();

        let method_name = get_str("method_name")
            .unwrap_or(DEFAULT_METHOD_NAME)
            .to_string();

        let default_options = defaults
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            config_dir,
            language,
            class_name,
            method_name,
            default_options,
        })
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("curl2retrofit"))
            .unwrap_or_else(|| PathBuf::from(".curl2retrofit"))
    }
}
