//! Domain types for the itinerary service.
//!
//! A ticket is one directed hop between two cities; the error taxonomy
//! covers every way a ticket set can fail to describe a single linear
//! route.

mod error;
mod ticket;

pub use error::ItineraryError;
pub use ticket::Ticket;
