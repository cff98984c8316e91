use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Store write failed: {message}")]
    StoreWrite { message: String },

    #[error("Store expire failed: {message}")]
    StoreExpire { message: String },

    #[error("Store read failed: {message}")]
    StoreRead { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn store_write(message: impl Into<String>) -> Self {
        Self::StoreWrite {
            message: message.into(),
        }
    }

    pub fn store_expire(message: impl Into<String>) -> Self {
        Self::StoreExpire {
            message: message.into(),
        }
    }

    pub fn store_read(message: impl Into<String>) -> Self {
        Self::StoreRead {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error is a backing-store transport failure
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            Self::StoreWrite { .. } | Self::StoreExpire { .. } | Self::StoreRead { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Slug '01ABC' not found");
        assert_eq!(error.to_string(), "Not found: Slug '01ABC' not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid user type");
        assert_eq!(error.to_string(), "Validation error: Invalid user type");
    }

    #[test]
    fn test_store_error_classification() {
        assert!(DomainError::store_write("hset failed").is_store_error());
        assert!(DomainError::store_expire("expire failed").is_store_error());
        assert!(DomainError::store_read("hgetall failed").is_store_error());
        assert!(!DomainError::not_found("missing").is_store_error());
        assert!(!DomainError::validation("bad input").is_store_error());
    }
}
