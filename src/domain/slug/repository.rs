//! Slug store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::SlugRecord;
use crate::domain::DomainError;

/// Key-value store for slug records with TTL support
///
/// Implementations persist the record's fields as a structured entry keyed
/// by the slug. The store owns eviction: expired entries disappear without
/// this crate polling for them.
#[async_trait]
pub trait SlugStore: Send + Sync + Debug {
    /// Persists a record under the given slug with an expiry.
    ///
    /// The field write is a single atomic operation. The expiry is applied
    /// conditionally: it only takes effect if it would shorten an existing
    /// expiry or establish one where none is set. If the expiry step fails
    /// after the write succeeded, the entry is left behind without a TTL
    /// and the error is surfaced.
    async fn put(&self, slug: &str, record: &SlugRecord, ttl_secs: u64)
        -> Result<(), DomainError>;

    /// Fetches the record stored under the given slug.
    ///
    /// Returns `None` when the entry is missing or its `user` field is
    /// empty. A never-created slug and an expired one are indistinguishable
    /// here.
    async fn fetch(&self, slug: &str) -> Result<Option<SlugRecord>, DomainError>;

    /// Connectivity probe for readiness checks
    async fn ping(&self) -> Result<(), DomainError>;
}
