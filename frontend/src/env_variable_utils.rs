use lazy_static::lazy_static;
use web_sys::window;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_APP_NAME: &str = "Pokemon GO Tracker";

lazy_static! {
    pub static ref CONFIG: Config = Config::from_window();
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub app_name: String,
    pub debug_mode: bool,
}

impl Config {
    /// Builds the config from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let app_name = lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let debug_mode = lookup("DEBUG_MODE")
            .unwrap_or_else(|| "false".to_string())
            .trim()
            .parse()
            .unwrap_or(false);

        Self {
            api_url,
            app_name,
            debug_mode,
        }
    }

    pub fn from_window() -> Self {
        Self::from_lookup(get_env_var)
    }
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - using default configuration");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn api_url() -> &'static str {
    &CONFIG.api_url
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert!(!config.debug_mode);
    }

    #[test]
    fn api_url_loses_trailing_slash() {
        let config = config_from(&[("API_URL", "https://api.example.org/")]);
        assert_eq!(config.api_url, "https://api.example.org");
    }

    #[test]
    fn blank_api_url_uses_default() {
        let config = config_from(&[("API_URL", "  ")]);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn debug_mode_parses_booleans_only() {
        assert!(config_from(&[("DEBUG_MODE", "true")]).debug_mode);
        assert!(!config_from(&[("DEBUG_MODE", "yes")]).debug_mode);
        assert!(!config_from(&[("DEBUG_MODE", "false")]).debug_mode);
    }
}
