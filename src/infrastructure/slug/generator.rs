//! Slug generation
//!
//! Mints the opaque lookup keys records are stored under.

use ulid::Ulid;

/// Generator for slug identifiers
///
/// Slugs are ULIDs: 128 bits combining a millisecond timestamp with 80 bits
/// of randomness, Crockford base32 encoded. The encoding is URL-safe and
/// lexicographic order follows creation order, so a key listing in the
/// backing store reads as a timeline.
///
/// Generation cannot fail under normal operation; an unusable clock or
/// entropy source panics rather than returning an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlugGenerator;

impl SlugGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh slug
    pub fn generate(&self) -> String {
        Ulid::new().to_string()
    }
}
