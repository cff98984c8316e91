//! Slug service tying validation, generation, and storage together

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::slug::{resolve_ttl, validate_request, SlugStore, TtlPolicy};
use crate::domain::{DomainError, SlugRecord};
use crate::infrastructure::slug::SlugGenerator;

/// Service for creating and resolving slugs
///
/// Stateless apart from the shared store handle; safe to share across
/// concurrent requests.
#[derive(Debug)]
pub struct SlugService {
    generator: SlugGenerator,
    store: Arc<dyn SlugStore>,
    ttl_policy: TtlPolicy,
}

impl SlugService {
    pub fn new(store: Arc<dyn SlugStore>, ttl_policy: TtlPolicy) -> Self {
        Self {
            generator: SlugGenerator::new(),
            store,
            ttl_policy,
        }
    }

    /// Create a record from raw request inputs and return its slug.
    ///
    /// Validation failures reject the request before anything is written;
    /// an out-of-range or malformed TTL is normalized, never an error.
    pub async fn create(
        &self,
        raw_user_type: &str,
        raw_user_id: &str,
        raw_action: &str,
        raw_ttl: Option<&str>,
    ) -> Result<String, DomainError> {
        let record = validate_request(raw_user_type, raw_user_id, raw_action).map_err(|e| {
            warn!(user_type = %raw_user_type, action = %raw_action, "Rejected create request: {}", e);
            DomainError::validation(e.to_string())
        })?;

        let ttl_secs = resolve_ttl(raw_ttl, self.ttl_policy);
        let slug = self.generator.generate();

        self.store.put(&slug, &record, ttl_secs).await?;

        info!(slug = %slug, ttl_secs, "Created slug entry");
        Ok(slug)
    }

    /// Resolve a slug back to its record
    pub async fn lookup(&self, slug: &str) -> Result<SlugRecord, DomainError> {
        self.store
            .fetch(slug)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Slug '{}' not found", slug)))
    }

    /// Probe the backing store
    pub async fn ping_store(&self) -> Result<(), DomainError> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConsentAction, UserType};
    use crate::infrastructure::slug::InMemorySlugStore;

    fn service() -> SlugService {
        SlugService::new(Arc::new(InMemorySlugStore::new()), TtlPolicy::default())
    }

    #[tokio::test]
    async fn test_create_then_lookup_round_trip() {
        let service = service();

        let slug = service
            .create("resident", "u123", "smsConsent", Some("3600"))
            .await
            .unwrap();

        let record = service.lookup(&slug).await.unwrap();
        assert_eq!(record.user, "u123");
        assert_eq!(record.user_type, UserType::Resident);
        assert_eq!(record.action, ConsentAction::SmsConsent);
    }

    #[tokio::test]
    async fn test_lookup_unknown_slug_is_not_found() {
        let service = service();

        let err = service.lookup("01JGXW00000000000000000000").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_invalid_user_type_rejected_before_store_write() {
        let store = Arc::new(InMemorySlugStore::new());
        let service = SlugService::new(store.clone(), TtlPolicy::default());

        let err = service
            .create("bogus", "u1", "smsConsent", None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_action_rejected() {
        let service = service();

        let err = service
            .create("prospect", "u1", "mailConsent", None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_out_of_range_ttl_still_creates() {
        let service = service();

        for raw_ttl in [Some("0"), Some("-1"), Some("999999999"), Some("soon"), None] {
            let slug = service
                .create("prospect", "u42", "appointmentChange", raw_ttl)
                .await
                .unwrap();
            assert!(service.lookup(&slug).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_identical_creates_yield_distinct_slugs() {
        let service = service();

        let first = service
            .create("resident", "u123", "smsConsent", None)
            .await
            .unwrap();
        let second = service
            .create("resident", "u123", "smsConsent", None)
            .await
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(service.lookup(&first).await.unwrap(), service.lookup(&second).await.unwrap());
    }
}
