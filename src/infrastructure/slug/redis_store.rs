//! Redis-backed slug store

use std::fmt;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tracing::warn;

use crate::domain::slug::SlugStore;
use crate::domain::{DomainError, SlugRecord};

/// Fallback used when the configured URL cannot be parsed
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/0";

const FIELD_USER: &str = "user";
const FIELD_USER_TYPE: &str = "userType";
const FIELD_ACTION: &str = "action";

/// Configuration for the Redis slug store
#[derive(Debug, Clone)]
pub struct RedisStoreConfig {
    /// Redis connection URL (e.g., "redis://127.0.0.1:6379/0")
    pub url: String,
}

impl Default for RedisStoreConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}

impl RedisStoreConfig {
    /// Creates a new configuration with the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Redis slug store
///
/// Records are hashes keyed by slug; expiry is Redis-native (`EXPIRE ... LT`),
/// so eviction needs no driving from this process. The `ConnectionManager`
/// handle is cheap to clone and safe for concurrent use, shared by every
/// request for the lifetime of the process.
#[derive(Clone)]
pub struct RedisSlugStore {
    connection: ConnectionManager,
    config: RedisStoreConfig,
}

impl fmt::Debug for RedisSlugStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisSlugStore")
            .field("config", &self.config)
            .field("connection", &"<ConnectionManager>")
            .finish()
    }
}

impl RedisSlugStore {
    /// Connects to Redis and verifies the connection with a PING.
    ///
    /// An unparsable URL falls back to the built-in default address; if the
    /// default is also unusable, or the server is unreachable, this fails
    /// and startup aborts.
    pub async fn connect(config: RedisStoreConfig) -> Result<Self, DomainError> {
        let client = match Client::open(config.url.as_str()) {
            Ok(client) => client,
            Err(e) => {
                warn!(
                    url = %config.url,
                    error = %e,
                    "Could not parse the configured Redis URL, trying the default"
                );
                Client::open(DEFAULT_REDIS_URL).map_err(|e| {
                    DomainError::configuration(format!(
                        "Failed to parse the default Redis URL: {}",
                        e
                    ))
                })?
            }
        };

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| DomainError::configuration(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self { connection, config };
        store.ping().await?;

        Ok(store)
    }

    /// Connects with default configuration
    pub async fn with_url(url: impl Into<String>) -> Result<Self, DomainError> {
        Self::connect(RedisStoreConfig::new(url)).await
    }
}

#[async_trait]
impl SlugStore for RedisSlugStore {
    async fn put(
        &self,
        slug: &str,
        record: &SlugRecord,
        ttl_secs: u64,
    ) -> Result<(), DomainError> {
        let mut conn = self.connection.clone();

        let user_type = record.user_type.to_string();
        let action = record.action.to_string();

        // Single HSET keeps the multi-field write atomic: the entry is never
        // readable half-populated.
        let fields = [
            (FIELD_USER, record.user.as_str()),
            (FIELD_USER_TYPE, user_type.as_str()),
            (FIELD_ACTION, action.as_str()),
        ];

        let _: () = conn.hset_multiple(slug, &fields).await.map_err(|e| {
            DomainError::store_write(format!("Failed to write entry '{}': {}", slug, e))
        })?;

        // EXPIRE with LT only shortens or establishes an expiry, never
        // extends one already set lower.
        let _: i64 = redis::cmd("EXPIRE")
            .arg(slug)
            .arg(ttl_secs)
            .arg("LT")
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                warn!(
                    slug = %slug,
                    "Entry was written but applying its TTL failed; it will persist until removed"
                );
                DomainError::store_expire(format!("Failed to expire entry '{}': {}", slug, e))
            })?;

        Ok(())
    }

    async fn fetch(&self, slug: &str) -> Result<Option<SlugRecord>, DomainError> {
        let mut conn = self.connection.clone();

        let fields: std::collections::HashMap<String, String> =
            conn.hgetall(slug).await.map_err(|e| {
                DomainError::store_read(format!("Failed to read entry '{}': {}", slug, e))
            })?;

        // A missing key and an entry with an empty user field are the same
        // thing here: nothing to resolve.
        let user = match fields.get(FIELD_USER) {
            Some(user) if !user.is_empty() => user.clone(),
            _ => return Ok(None),
        };

        let user_type = fields
            .get(FIELD_USER_TYPE)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                DomainError::internal(format!("Malformed userType in entry '{}'", slug))
            })?;

        let action = fields
            .get(FIELD_ACTION)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                DomainError::internal(format!("Malformed action in entry '{}'", slug))
            })?;

        Ok(Some(SlugRecord {
            user,
            user_type,
            action,
        }))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        let mut conn = self.connection.clone();

        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| DomainError::store_read(format!("Redis ping failed: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConsentAction, UserType};

    // Note: These tests require a running Redis instance

    async fn get_test_store() -> RedisSlugStore {
        RedisSlugStore::connect(RedisStoreConfig::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "Requires running Redis instance"]
    async fn test_put_and_fetch() {
        let store = get_test_store().await;
        let record = SlugRecord::new("u123", UserType::Resident, ConsentAction::SmsConsent);

        store.put("test:put-fetch", &record, 60).await.unwrap();

        let fetched = store.fetch("test:put-fetch").await.unwrap();
        assert_eq!(fetched, Some(record));
    }

    #[tokio::test]
    #[ignore = "Requires running Redis instance"]
    async fn test_fetch_missing_slug() {
        let store = get_test_store().await;

        let fetched = store.fetch("test:never-created").await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    #[ignore = "Requires running Redis instance"]
    async fn test_put_applies_ttl() {
        let store = get_test_store().await;
        let record = SlugRecord::new("u1", UserType::Prospect, ConsentAction::AppointmentChange);

        store.put("test:ttl", &record, 1).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(1500)).await;

        let fetched = store.fetch("test:ttl").await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    #[ignore = "Requires running Redis instance"]
    async fn test_ping() {
        let store = get_test_store().await;
        store.ping().await.unwrap();
    }
}
