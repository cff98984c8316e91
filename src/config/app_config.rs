use serde::Deserialize;

use crate::domain::slug::{TtlPolicy, DEFAULT_TTL_SECS, MAX_TTL_SECS};
use crate::infrastructure::slug::DEFAULT_REDIS_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub redis: RedisConfig,
    pub slug: SlugConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    pub url: String,
}

/// TTL policy bounds for created slugs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    pub default_ttl_secs: u64,
    pub max_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: DEFAULT_TTL_SECS,
            max_ttl_secs: MAX_TTL_SECS,
        }
    }
}

impl SlugConfig {
    pub fn ttl_policy(&self) -> TtlPolicy {
        TtlPolicy {
            default_secs: self.default_ttl_secs,
            max_secs: self.max_ttl_secs,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.redis.url, DEFAULT_REDIS_URL);
        assert_eq!(config.slug.default_ttl_secs, 86_400);
        assert_eq!(config.slug.max_ttl_secs, 604_800);
    }

    #[test]
    fn test_ttl_policy_from_config() {
        let config = SlugConfig {
            default_ttl_secs: 60,
            max_ttl_secs: 120,
        };
        let policy = config.ttl_policy();

        assert_eq!(policy.default_secs, 60);
        assert_eq!(policy.max_secs, 120);
    }

    #[test]
    fn test_partial_deserialization_falls_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"redis": {"url": "redis://cache:6379/1"}}"#).unwrap();

        assert_eq!(config.redis.url, "redis://cache:6379/1");
        assert_eq!(config.server.port, 8080);
    }
}
