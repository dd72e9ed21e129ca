//! Configuration management

use crate::application::errors::ConfigError;
use crate::domain::entities::LanguageCode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default WhoisXML endpoint; overridable for tests and proxies.
const DEFAULT_WHOIS_ENDPOINT: &str = "https://www.whoisxmlapi.com/whoisserver/WhoisService";

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub adapters: AdaptersConfig,
    pub whois: WhoisConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    /// Language used for users who never picked one.
    pub default_language: LanguageCode,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdaptersConfig {
    pub telegram: Option<TelegramConfig>,
    pub console: Option<ConsoleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TelegramConfig {
    pub enabled: bool,
    /// Never commit this; prefer the BOT_TOKEN env var.
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WhoisConfig {
    pub endpoint: String,
    /// Never commit this; prefer the WHOIS_API_KEY env var.
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "whois-bot".to_string(),
                default_language: LanguageCode::Ru,
            },
            adapters: AdaptersConfig {
                telegram: Some(TelegramConfig {
                    enabled: false,
                    token: None,
                }),
                console: Some(ConsoleConfig { enabled: true }),
            },
            whois: WhoisConfig {
                endpoint: DEFAULT_WHOIS_ENDPOINT.to_string(),
                api_key: None,
                timeout_seconds: 10,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Overlay secrets and overrides from the environment. Env always wins
    /// over the file so deployments can keep tokens out of it.
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("BOT_TOKEN") {
            let tg = self.adapters.telegram.get_or_insert(TelegramConfig {
                enabled: false,
                token: None,
            });
            tg.token = Some(token);
            tg.enabled = true;
        }

        if let Ok(api_key) = std::env::var("WHOIS_API_KEY") {
            self.whois.api_key = Some(api_key);
        }

        if let Ok(lang) = std::env::var("BOT_DEFAULT_LANGUAGE") {
            match LanguageCode::parse(&lang) {
                Some(code) => self.bot.default_language = code,
                None => tracing::warn!("Ignoring invalid BOT_DEFAULT_LANGUAGE {:?}", lang),
            }
        }
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Resolved Telegram token, if the adapter is usable.
    pub fn telegram_token(&self) -> Option<String> {
        self.adapters
            .telegram
            .as_ref()
            .filter(|t| t.enabled)
            .and_then(|t| t.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_russian() {
        let config = Config::default();
        assert_eq!(config.bot.default_language, LanguageCode::Ru);
        assert_eq!(config.whois.timeout_seconds, 10);
        assert!(config.whois.api_key.is_none());
    }

    #[test]
    fn yaml_round_trip_keeps_language() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("default-language: ru"), "yaml: {}", yaml);
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.bot.default_language, LanguageCode::Ru);
    }

    #[test]
    fn env_overrides_token_and_key() {
        std::env::set_var("BOT_TOKEN", "123:abc");
        std::env::set_var("WHOIS_API_KEY", "at_test_key");

        let config = Config::load_env();

        assert_eq!(config.telegram_token().as_deref(), Some("123:abc"));
        assert_eq!(config.whois.api_key.as_deref(), Some("at_test_key"));

        std::env::remove_var("BOT_TOKEN");
        std::env::remove_var("WHOIS_API_KEY");
    }
}
