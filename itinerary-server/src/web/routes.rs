//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domain::{ItineraryError, Ticket};

use super::dto::*;
use super::state::AppState;

/// Service name reported by the health endpoint.
const SERVICE_NAME: &str = "itinerary-server";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health/status", get(health_status))
        .route("/api/v1/itinerary/reconstruct", post(reconstruct_itinerary))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
async fn health_status() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Reconstruct a travel itinerary from an unordered list of tickets.
async fn reconstruct_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<String>>, AppError> {
    // Parse JSON manually so the body can be logged on failure
    let request: ReconstructRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(
            body = %String::from_utf8_lossy(&body),
            "rejected unparseable request"
        );
        AppError::Validation {
            message: format!("invalid JSON format: {e}"),
        }
    })?;

    let tickets = request.into_tickets();
    validate_tickets(&tickets)?;

    let itinerary = state.reconstructor.reconstruct(&tickets)?;
    Ok(Json(itinerary))
}

/// Request-level validation, run before the reconstructor is invoked.
///
/// The reconstructor re-checks these conditions; rejecting here keeps
/// error messages phrased in terms of the wire request.
fn validate_tickets(tickets: &[Ticket]) -> Result<(), AppError> {
    if tickets.is_empty() {
        return Err(AppError::Validation {
            message: "at least one ticket is required".to_string(),
        });
    }

    for (index, ticket) in tickets.iter().enumerate() {
        if ticket.source().is_empty() || ticket.destination().is_empty() {
            return Err(AppError::Validation {
                message: format!("ticket at index {index} has empty source or destination"),
            });
        }
    }

    Ok(())
}

/// Application error type mapped onto the wire error contract.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Business { message: String },
    Internal { message: String },
}

impl From<ItineraryError> for AppError {
    fn from(e: ItineraryError) -> Self {
        if e.is_validation() {
            AppError::Validation {
                message: e.to_string(),
            }
        } else {
            AppError::Business {
                message: e.to_string(),
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            AppError::Validation { message } => {
                (StatusCode::BAD_REQUEST, "validation_error", message)
            }
            AppError::Business { message } => (StatusCode::BAD_REQUEST, "business_error", message),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
            }
        };

        tracing::warn!(status = %status, kind, %message, "request failed");

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message,
            kind,
        });
        (status, body).into_response()
    }
}

/// Convert a handler panic into the standard internal-error body.
///
/// The panic payload goes to the log, never to the client.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "handler panicked");

    AppError::Internal {
        message: "internal server error".to_string(),
    }
    .into_response()
}
