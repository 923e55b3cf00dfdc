use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Scraper configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScraperConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every page request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the source priority.
    pub fn load() -> crate::error::Result<Self> {
        Ok(load_config()?)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_SCRAPER__ prefix
/// 2. recipe-scraper.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_SCRAPER__TIMEOUT
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-scraper").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_SCRAPER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::env;
    use std::sync::Mutex;

    // Tests that touch RECIPE_SCRAPER__ variables must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_scraper_env() {
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("RECIPE_SCRAPER__"))
            .map(|(k, _)| k)
            .collect();

        for key in keys_to_clear {
            env::remove_var(&key);
        }
    }

    #[test]
    fn test_default_values() {
        let config = ScraperConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: ScraperConfig = Config::builder()
            .add_source(File::from_str("timeout = 5", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.timeout, 5);
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn test_user_agent_override() {
        let config: ScraperConfig = Config::builder()
            .add_source(File::from_str(
                r#"user_agent = "RecipeBot/1.0""#,
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.timeout, default_timeout());
        assert_eq!(config.user_agent, "RecipeBot/1.0");
    }

    #[test]
    fn test_empty_sources_equal_default() {
        let config: ScraperConfig = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config, ScraperConfig::default());
    }

    #[test]
    fn test_load_config_without_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_scraper_env();

        // No recipe-scraper.toml in the crate root, so only defaults apply
        let config = load_config().unwrap();
        assert_eq!(config, ScraperConfig::default());

        let config = ScraperConfig::load().unwrap();
        assert_eq!(config, ScraperConfig::default());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_scraper_env();
        env::set_var("RECIPE_SCRAPER__TIMEOUT", "7");
        env::set_var("RECIPE_SCRAPER__USER_AGENT", "RecipeBot/2.0");

        let result = load_config();
        clear_scraper_env();

        let config = result.unwrap();
        assert_eq!(config.timeout, 7);
        assert_eq!(config.user_agent, "RecipeBot/2.0");
    }
}
