//! Flight ticket type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single flight ticket: one directed hop from a source city to a
/// destination city.
///
/// Serialized on the wire as a 2-element array, e.g. `["JFK","LAX"]`.
/// Construction does not validate the endpoints; emptiness is checked by
/// the reconstructor, which is the correctness boundary for ticket sets.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket(String, String);

impl Ticket {
    /// Create a ticket from a source and destination city code.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self(source.into(), destination.into())
    }

    /// The city this ticket departs from.
    pub fn source(&self) -> &str {
        &self.0
    }

    /// The city this ticket arrives at.
    pub fn destination(&self) -> &str {
        &self.1
    }
}

impl fmt::Debug for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ticket({} -> {})", self.0, self.1)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let ticket = Ticket::new("JFK", "LAX");
        assert_eq!(ticket.source(), "JFK");
        assert_eq!(ticket.destination(), "LAX");
    }

    #[test]
    fn serializes_as_pair() {
        let ticket = Ticket::new("JFK", "LAX");
        let json = serde_json::to_string(&ticket).unwrap();
        assert_eq!(json, r#"["JFK","LAX"]"#);
    }

    #[test]
    fn deserializes_from_pair() {
        let ticket: Ticket = serde_json::from_str(r#"["LAX","DXB"]"#).unwrap();
        assert_eq!(ticket, Ticket::new("LAX", "DXB"));
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(serde_json::from_str::<Ticket>(r#"["LAX"]"#).is_err());
        assert!(serde_json::from_str::<Ticket>(r#"["LAX","DXB","SFO"]"#).is_err());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Ticket::new("JFK", "LAX"), Ticket::new("JFK", "LAX"));
        assert_ne!(Ticket::new("JFK", "LAX"), Ticket::new("LAX", "JFK"));
    }

    #[test]
    fn display() {
        let ticket = Ticket::new("JFK", "LAX");
        assert_eq!(format!("{}", ticket), "JFK -> LAX");
        assert_eq!(format!("{:?}", ticket), "Ticket(JFK -> LAX)");
    }
}
