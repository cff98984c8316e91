//! Identity Slug API
//!
//! Issues short-lived, opaque lookup tokens ("slugs") mapping to an identity
//! record held in Redis with a TTL. One call creates a token, a later call
//! resolves it back to the record until it expires:
//! - `GET /save/{userType}/{userId}/{action}[/{ttl}]` returns a fresh slug
//! - `GET /lookup/{slug}` returns the stored record or a 404 body
//!
//! Slugs are ULIDs, so keys sort by creation time and are safe in a URL
//! path. Records are write-once: there is no update or revoke, only expiry.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::DomainError;
use infrastructure::{RedisSlugStore, RedisStoreConfig, SlugService};

/// Build the application state: connect to Redis and wire up the slug
/// service with the configured TTL policy.
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let store = RedisSlugStore::connect(RedisStoreConfig::new(&config.redis.url)).await?;
    let slug_service = SlugService::new(Arc::new(store), config.slug.ttl_policy());

    Ok(AppState::new(Arc::new(slug_service)))
}
