use serde::Deserialize;

use crate::domain::a001_asset::DateField;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix for every API call, e.g. "/api" or "https://assets.example.com/api"
    pub base_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Quiescence window before a filter change triggers a fetch
    pub debounce_ms: u32,
    /// Number of monthly buckets in the trend series
    pub trend_window: usize,
    pub default_date_field: DateField,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            trend_window: 12,
            default_date_field: DateField::Purchase,
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_path = "/api"

[report]
debounce_ms = 300
trend_window = 12
default_date_field = "purchase"
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_path: "/api".to_string(),
            },
            report: ReportConfig::default(),
        }
    }
}

/// Load configuration
///
/// Search order:
/// 1. The TOML document served next to the bundle (`override_toml`)
/// 2. Falls back to the embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    if let Some(contents) = override_toml {
        log::info!("Loading config from served config.toml");
        let config: AppConfig = toml::from_str(contents)?;
        return Ok(config);
    }

    log::info!("Using default embedded configuration");
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}
