//! Itinerary reconstruction from unordered one-hop tickets.
//!
//! This module contains the core logic that answers: "given a pile of
//! one-hop tickets, in what order were the cities visited?"
//!
//! The ticket set is assumed to describe a single linear route: every
//! city departs at most once, exactly one city is never arrived at, and
//! following successors from that city consumes every ticket. Each of
//! those assumptions is checked and violations are reported as a typed
//! error rather than a partial result.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{ItineraryError, Ticket};

/// Reconstructs ordered itineraries from unordered ticket sets.
///
/// Stateless and side-effect free: one instance is created at startup and
/// shared across requests, and concurrent calls need no coordination.
#[derive(Debug, Clone, Default)]
pub struct Reconstructor;

impl Reconstructor {
    /// Create a new reconstructor.
    pub fn new() -> Self {
        Self
    }

    /// Reconstruct the travel order from an unordered set of tickets.
    ///
    /// On success the returned itinerary holds `tickets.len() + 1` city
    /// codes, starting at the unique city no ticket arrives at.
    ///
    /// The same input always produces the same output or the same error:
    /// the starting point is chosen by scanning tickets in input order,
    /// never by iterating an unordered map.
    pub fn reconstruct(&self, tickets: &[Ticket]) -> Result<Vec<String>, ItineraryError> {
        if tickets.is_empty() {
            return Err(ItineraryError::NoTicketsProvided);
        }

        // The web layer validates endpoints too; re-check, callers vary.
        for (index, ticket) in tickets.iter().enumerate() {
            if ticket.source().is_empty() || ticket.destination().is_empty() {
                return Err(ItineraryError::InvalidTicket(index));
            }
        }

        // Successor mapping: at most one outgoing edge per city.
        let mut successors: HashMap<&str, &str> = HashMap::with_capacity(tickets.len());
        for ticket in tickets {
            if successors
                .insert(ticket.source(), ticket.destination())
                .is_some()
            {
                return Err(ItineraryError::DuplicateRoute(ticket.source().to_string()));
            }
        }

        let start = find_starting_point(tickets)?;
        debug!(tickets = tickets.len(), start, "walking ticket chain");

        let itinerary = walk_chain(&successors, start, tickets.len())?;

        // A simple path over N tickets visits exactly N + 1 cities; fewer
        // means the walk could not reach some ticket from the start.
        if itinerary.len() != tickets.len() + 1 {
            return Err(ItineraryError::DisconnectedRoute);
        }

        Ok(itinerary)
    }
}

/// Find the starting city: the first ticket source that never appears as
/// any ticket's destination.
///
/// A pure cycle has no such city and is reported as `NoStartingPoint`
/// before the walk ever runs.
fn find_starting_point(tickets: &[Ticket]) -> Result<&str, ItineraryError> {
    let destinations: HashSet<&str> = tickets.iter().map(Ticket::destination).collect();

    tickets
        .iter()
        .map(Ticket::source)
        .find(|source| !destinations.contains(source))
        .ok_or(ItineraryError::NoStartingPoint)
}

/// Follow the successor mapping from `start` for at most `hop_budget`
/// hops.
///
/// Revisiting a city while hops remain is a circular route. A city with
/// no successor ends the walk early; whether that consumed every ticket
/// is the caller's completeness check.
fn walk_chain(
    successors: &HashMap<&str, &str>,
    start: &str,
    hop_budget: usize,
) -> Result<Vec<String>, ItineraryError> {
    let mut itinerary = vec![start.to_string()];
    let mut visited = HashSet::with_capacity(hop_budget + 1);
    let mut current = start;

    for _ in 0..hop_budget {
        if !visited.insert(current) {
            return Err(ItineraryError::CircularRoute);
        }
        let Some(&next) = successors.get(current) else {
            break;
        };
        itinerary.push(next.to_string());
        current = next;
    }

    Ok(itinerary)
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    /// Strategy producing a route over distinct cities together with a
    /// shuffled copy of its tickets.
    fn shuffled_route() -> impl Strategy<Value = (Vec<String>, Vec<Ticket>)> {
        proptest::collection::hash_set("[A-Z]{3}", 2..10)
            .prop_map(|cities| cities.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|cities| {
                let tickets: Vec<Ticket> = cities
                    .windows(2)
                    .map(|pair| Ticket::new(pair[0].clone(), pair[1].clone()))
                    .collect();
                (Just(cities), Just(tickets).prop_shuffle())
            })
    }

    proptest! {
        /// Any shuffled simple path reconstructs to its unique ordering,
        /// one city longer than the ticket count.
        #[test]
        fn shuffled_simple_path_reconstructs((cities, tickets) in shuffled_route()) {
            let itinerary = Reconstructor::new().reconstruct(&tickets).unwrap();
            prop_assert_eq!(itinerary.len(), tickets.len() + 1);
            prop_assert_eq!(itinerary, cities);
        }

        /// Reconstruction is a pure function of its input.
        #[test]
        fn reconstruction_is_idempotent((_cities, tickets) in shuffled_route()) {
            let reconstructor = Reconstructor::new();
            prop_assert_eq!(
                reconstructor.reconstruct(&tickets),
                reconstructor.reconstruct(&tickets)
            );
        }
    }
}
