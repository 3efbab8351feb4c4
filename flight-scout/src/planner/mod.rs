//! Round-trip fare search.
//!
//! This module implements the search that answers: "what is the cheapest
//! way to fly from around A to around B and back, within a few days of a
//! given date?"
//!
//! The enumerator prices every date × origin × destination triple through a
//! [`FareSource`]; the planner builds the inputs for both directions and
//! pairs the results into ranked round trips.

mod config;
mod rank;
mod search;
mod trip;


pub use config::{InvalidPairingMode, PairingMode, SearchConfig};
pub use rank::{pair_round_trips, rank_round_trips, truncate_results};
pub use search::{FareSource, enumerate_triples, get_flights, get_flights_concurrent};
pub use trip::{AirportSets, PlanError, Planner, TripReport};
