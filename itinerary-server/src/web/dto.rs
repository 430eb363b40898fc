//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Ticket;

/// Request body for itinerary reconstruction.
///
/// Two wire shapes are accepted: a bare array of `[source, destination]`
/// pairs, or the same array wrapped in an object under `"tickets"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReconstructRequest {
    /// `[["JFK","LAX"],["LAX","DXB"]]`
    Tickets(Vec<Ticket>),

    /// `{"tickets":[["JFK","LAX"],["LAX","DXB"]]}`
    Wrapped { tickets: Vec<Ticket> },
}

impl ReconstructRequest {
    /// Unwrap to the ticket list, whichever wire shape was used.
    pub fn into_tickets(self) -> Vec<Ticket> {
        match self {
            ReconstructRequest::Tickets(tickets)
            | ReconstructRequest::Wrapped { tickets } => tickets,
        }
    }
}

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process is serving
    pub status: &'static str,

    /// Service name
    pub service: &'static str,
}

/// Structured error body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// HTTP status code, duplicated in the body
    pub code: u16,

    /// Human-readable description
    pub message: String,

    /// Error class: "validation_error", "business_error" or
    /// "internal_error"
    #[serde(rename = "type")]
    pub kind: &'static str,
}
