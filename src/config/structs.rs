use serde::{Deserialize, Serialize};

/// Static configuration, loaded once at startup.
///
/// Priority: ENV > archlinks.toml > defaults.
/// ENV prefix: AL, separator: __
/// Example: AL__API__BASE_URL=http://127.0.0.1:5003
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Self {
        Self::load_from("archlinks.toml")
    }

    /// Load configuration from a specific TOML file and environment variables
    pub fn load_from(path: &str) -> Self {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("AL")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the shortening backend. Empty in production builds,
    /// points at a local backend address in development.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_health_timeout_ms")]
    pub health_timeout_ms: u64,
    #[serde(default = "default_demo_base_url")]
    pub demo_base_url: String,
    #[serde(default = "default_demo_delay_ms")]
    pub demo_delay_ms: u64,
}

/// Share capability configuration
///
/// When `command` is set, it is invoked with the short URL as its single
/// argument. When unset, sharing falls back to copy-and-notify.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShareConfig {
    #[serde(default)]
    pub command: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_health_timeout_ms() -> u64 {
    2000
}

fn default_demo_base_url() -> String {
    "http://demo.archlinks.com".to_string()
}

fn default_demo_delay_ms() -> u64 {
    800
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    7
}

fn default_enable_rotation() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            health_timeout_ms: default_health_timeout_ms(),
            demo_base_url: default_demo_base_url(),
            demo_delay_ms: default_demo_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
