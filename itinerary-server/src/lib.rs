//! Flight itinerary reconstruction server.
//!
//! Rebuilds an ordered travel itinerary from an unordered collection of
//! one-hop flight tickets and serves it over a small JSON API.

pub mod domain;
pub mod reconstruct;
pub mod web;
