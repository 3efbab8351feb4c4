//! Fare lookups.
//!
//! [`FareClient`] fetches the fare site's results page for a route and date
//! and extracts the cheapest price. [`MockFareSource`] serves prices from a
//! JSON table instead.
//!
//! Both implement [`crate::planner::FareSource`], the only interface the
//! search enumerator depends on.

mod client;
mod error;
mod mock;
mod parse;

pub use client::{DEFAULT_BASE_URL, FareClient, FareConfig};
pub use error::FareError;
pub use mock::MockFareSource;
pub use parse::extract_cheapest_price;
