//! Application state for the web layer.

use std::sync::Arc;

use crate::reconstruct::Reconstructor;

/// Shared application state.
///
/// Constructed once at startup and cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    /// The itinerary reconstruction core
    pub reconstructor: Arc<Reconstructor>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(reconstructor: Reconstructor) -> Self {
        Self {
            reconstructor: Arc::new(reconstructor),
        }
    }
}
