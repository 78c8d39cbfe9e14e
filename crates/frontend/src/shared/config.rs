use contracts::shared::config::{load_config, AppConfig};
use gloo_net::http::Request;

/// Optional deployment override served next to the bundle
const CONFIG_URL: &str = "config.toml";

/// Fetch the deployment config, falling back to the embedded default when
/// it is missing or invalid
pub async fn fetch_config() -> AppConfig {
    let served = match Request::get(CONFIG_URL).send().await {
        Ok(response) if response.ok() => response.text().await.ok(),
        Ok(response) => {
            log::debug!("No served config ({})", response.status());
            None
        }
        Err(e) => {
            log::debug!("Config request failed: {}", e);
            None
        }
    };

    match load_config(served.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid config.toml, using defaults: {}", e);
            AppConfig::default()
        }
    }
}
