//! Web layer for the itinerary service.
//!
//! Provides the HTTP endpoints for reconstructing itineraries and
//! checking service health.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
