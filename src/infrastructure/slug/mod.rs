//! Slug infrastructure - generator and store implementations

mod generator;
mod in_memory;
mod redis_store;
mod service;

pub use generator::SlugGenerator;
pub use in_memory::InMemorySlugStore;
pub use redis_store::{RedisSlugStore, RedisStoreConfig, DEFAULT_REDIS_URL};
pub use service::SlugService;
