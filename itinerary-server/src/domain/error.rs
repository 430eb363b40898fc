//! Itinerary error taxonomy.
//!
//! Validation errors reject the input itself; business errors are ticket
//! sets that parse fine but describe an impossible route.

/// Errors returned by itinerary reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryError {
    /// A ticket has an empty source or destination
    #[error("ticket at index {0} has empty source or destination")]
    InvalidTicket(usize),

    /// The input ticket list is empty
    #[error("no tickets provided")]
    NoTicketsProvided,

    /// Two tickets depart from the same city
    #[error("duplicate route from {0}")]
    DuplicateRoute(String),

    /// No city has in-degree zero (includes a route that is a pure cycle)
    #[error("no valid starting point found")]
    NoStartingPoint,

    /// The walk revisited a city before the hop budget was exhausted
    #[error("circular route detected")]
    CircularRoute,

    /// The walk ended before consuming every ticket
    #[error("disconnected route found")]
    DisconnectedRoute,
}

impl ItineraryError {
    /// Whether this is an input-validation failure, as opposed to a
    /// business-rule failure over well-formed input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ItineraryError::InvalidTicket(_)
                | ItineraryError::NoTicketsProvided
                | ItineraryError::DuplicateRoute(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ItineraryError::InvalidTicket(2);
        assert_eq!(
            err.to_string(),
            "ticket at index 2 has empty source or destination"
        );

        let err = ItineraryError::NoTicketsProvided;
        assert_eq!(err.to_string(), "no tickets provided");

        let err = ItineraryError::DuplicateRoute("JFK".into());
        assert_eq!(err.to_string(), "duplicate route from JFK");

        let err = ItineraryError::NoStartingPoint;
        assert_eq!(err.to_string(), "no valid starting point found");

        let err = ItineraryError::CircularRoute;
        assert_eq!(err.to_string(), "circular route detected");

        let err = ItineraryError::DisconnectedRoute;
        assert_eq!(err.to_string(), "disconnected route found");
    }

    #[test]
    fn validation_classification() {
        assert!(ItineraryError::InvalidTicket(0).is_validation());
        assert!(ItineraryError::NoTicketsProvided.is_validation());
        assert!(ItineraryError::DuplicateRoute("JFK".into()).is_validation());

        assert!(!ItineraryError::NoStartingPoint.is_validation());
        assert!(!ItineraryError::CircularRoute.is_validation());
        assert!(!ItineraryError::DisconnectedRoute.is_validation());
    }
}
