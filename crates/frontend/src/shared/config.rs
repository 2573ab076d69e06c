use serde::Deserialize;

/// localStorage key holding an optional TOML override of the default config.
pub const CONFIG_STORAGE_KEY: &str = "taskup_config";

/// Port the backend listens on when the base URL is derived from the page.
pub const DEFAULT_API_PORT: u16 = 5000;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL for admin and login calls. Empty means "derive from window location".
    #[serde(default)]
    pub base_url: String,
    /// Absolute registration endpoint.
    pub register_url: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
register_url = "http://localhost:5000/auth/register"
"#;

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn default_config() -> AppConfig {
    parse_config(DEFAULT_CONFIG).expect("embedded default config is valid TOML")
}

/// Load configuration.
///
/// Search order:
/// 1. TOML stored in localStorage under [`CONFIG_STORAGE_KEY`]
/// 2. Falls back to embedded default config
pub fn load_config() -> AppConfig {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    if let Some(contents) = stored {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loaded config override from localStorage");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid config override: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    default_config()
}

impl AppConfig {
    /// Base URL for API calls, without trailing slash.
    pub fn api_base(&self) -> String {
        let configured = self.api.base_url.trim().trim_end_matches('/');
        if !configured.is_empty() {
            return configured.to_string();
        }
        super::api_utils::api_base()
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.register_url, "http://localhost:5000/auth/register");
        assert_eq!(default_config(), config);
    }

    #[test]
    fn test_configured_base_is_used_verbatim() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://api.taskup.dev/"
            register_url = "https://api.taskup.dev/auth/register"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base(), "https://api.taskup.dev");
        assert_eq!(
            config.api_url("/admin/users"),
            "https://api.taskup.dev/admin/users"
        );
    }

    #[test]
    fn test_missing_register_url_is_rejected() {
        assert!(parse_config("[api]\nbase_url = \"http://x\"\n").is_err());
    }
}
