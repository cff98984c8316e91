//! In-memory slug store
//!
//! Mirrors the Redis store's semantics without a server: per-entry
//! deadlines with the same shorten-or-establish expiry rule, and lazy
//! eviction on read. Used by tests and Redis-free deployments of the
//! service layer.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::domain::slug::SlugStore;
use crate::domain::{DomainError, SlugRecord};

#[derive(Debug, Clone)]
struct StoredEntry {
    record: SlugRecord,
    expires_at: Option<Instant>,
}

/// Thread-safe in-memory slug store
#[derive(Debug, Default)]
pub struct InMemorySlugStore {
    entries: Mutex<HashMap<String, StoredEntry>>,
}

impl InMemorySlugStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.expires_at.is_none_or(|at| at > now))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SlugStore for InMemorySlugStore {
    async fn put(
        &self,
        slug: &str,
        record: &SlugRecord,
        ttl_secs: u64,
    ) -> Result<(), DomainError> {
        let new_deadline = Instant::now() + Duration::from_secs(ttl_secs);
        let mut entries = self.entries.lock().unwrap();

        // Expiry only shortens or establishes a deadline, matching the
        // backing store's conditional-expire semantics.
        let expires_at = match entries.get(slug).and_then(|e| e.expires_at) {
            Some(existing) if existing <= new_deadline => Some(existing),
            _ => Some(new_deadline),
        };

        entries.insert(
            slug.to_string(),
            StoredEntry {
                record: record.clone(),
                expires_at,
            },
        );

        Ok(())
    }

    async fn fetch(&self, slug: &str) -> Result<Option<SlugRecord>, DomainError> {
        let mut entries = self.entries.lock().unwrap();

        match entries.get(slug) {
            Some(entry) if entry.expires_at.is_some_and(|at| at <= Instant::now()) => {
                entries.remove(slug);
                Ok(None)
            }
            Some(entry) if entry.record.user.is_empty() => Ok(None),
            Some(entry) => Ok(Some(entry.record.clone())),
            None => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
