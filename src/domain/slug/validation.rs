//! Request validation and TTL normalization

use thiserror::Error;

use super::entity::{ConsentAction, SlugRecord, UserType};

/// Default TTL applied when the caller omits one or supplies one we reject
pub const DEFAULT_TTL_SECS: u64 = 24 * 60 * 60;

/// Upper bound on caller-supplied TTLs
pub const MAX_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Errors that can occur while validating a create request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlugValidationError {
    #[error("Invalid user type: '{0}'")]
    InvalidUserType(String),

    #[error("Invalid action: '{0}'")]
    InvalidAction(String),

    #[error("User ID cannot be empty")]
    EmptyUserId,
}

/// TTL bounds used when normalizing caller-supplied TTLs
#[derive(Debug, Clone, Copy)]
pub struct TtlPolicy {
    pub default_secs: u64,
    pub max_secs: u64,
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self {
            default_secs: DEFAULT_TTL_SECS,
            max_secs: MAX_TTL_SECS,
        }
    }
}

/// Validate the raw path segments of a create request into a record.
///
/// Checks userType first, then action; the first failure short-circuits.
/// An empty userId is rejected last (a stored empty user field reads back
/// as absence, so letting it through would mint slugs that can never
/// resolve).
pub fn validate_request(
    raw_user_type: &str,
    raw_user_id: &str,
    raw_action: &str,
) -> Result<SlugRecord, SlugValidationError> {
    let user_type: UserType = raw_user_type
        .parse()
        .map_err(|_| SlugValidationError::InvalidUserType(raw_user_type.to_string()))?;

    let action: ConsentAction = raw_action
        .parse()
        .map_err(|_| SlugValidationError::InvalidAction(raw_action.to_string()))?;

    if raw_user_id.is_empty() {
        return Err(SlugValidationError::EmptyUserId);
    }

    Ok(SlugRecord::new(raw_user_id, user_type, action))
}

/// Normalize a raw TTL string into seconds.
///
/// Missing, non-numeric, non-positive, or over-limit values all fall back
/// to the default. Normalization never fails a create.
pub fn resolve_ttl(raw: Option<&str>, policy: TtlPolicy) -> u64 {
    match raw.and_then(|s| s.parse::<i64>().ok()) {
        Some(ttl) if ttl > 0 && ttl as u64 <= policy.max_secs => ttl as u64,
        _ => policy.default_secs,
    }
}
