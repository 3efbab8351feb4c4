//! Domain types for the flight search.
//!
//! Airport codes, coordinates, search triples, quotes and date windows.
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod airport;
mod dates;
mod quote;

pub use airport::{
    AirportCode, AirportRecord, Coordinates, EARTH_RADIUS_KM, InvalidAirportCode, haversine_km,
};
pub use dates::{DateWindow, DateWindowError};
pub use quote::{FlightQuote, RoundTrip, SearchTriple};
