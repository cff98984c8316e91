//! Infrastructure layer - Concrete implementations of domain capabilities

pub mod logging;
pub mod slug;

pub use slug::{InMemorySlugStore, RedisSlugStore, RedisStoreConfig, SlugGenerator, SlugService};
