//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::SlugService;

/// Application state shared by every request handler
///
/// Constructed once at startup; the slug service carries the long-lived
/// store handle, so cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub slug_service: Arc<SlugService>,
}

impl AppState {
    pub fn new(slug_service: Arc<SlugService>) -> Self {
        Self { slug_service }
    }
}
