//! Search configuration for the round-trip planner.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::AirportCode;

/// How outbound and return quotes are combined into round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingMode {
    /// Pair the two quote lists by position.
    ///
    /// Index-aligned, not content-matched: once either direction drops a
    /// triple for lack of a price the lists fall out of step and pairs mix
    /// unrelated dates and airports. Pairing stops at the shorter list.
    #[default]
    Index,

    /// Pair an outbound `(o, d, t)` with the return `(d, o, t + trip length)`.
    Route,
}

/// Error returned when parsing an unknown pairing mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pairing mode {0:?} (expected \"index\" or \"route\")")]
pub struct InvalidPairingMode(String);

impl FromStr for PairingMode {
    type Err = InvalidPairingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "index" => Ok(PairingMode::Index),
            "route" => Ok(PairingMode::Route),
            _ => Err(InvalidPairingMode(s.to_string())),
        }
    }
}

impl fmt::Display for PairingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingMode::Index => f.write_str("index"),
            PairingMode::Route => f.write_str("route"),
        }
    }
}

/// Configuration parameters for a round-trip search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Home airport; outbound flights leave from around here.
    pub origin: AirportCode,

    /// Destination airport; return flights leave from around here.
    pub destination: AirportCode,

    /// Centre of the departure date window.
    pub pivot_date: NaiveDate,

    /// Days either side of the pivot to search.
    pub plus_minus_days: u32,

    /// Days between outbound and return flight.
    pub trip_length_days: u32,

    /// Airports strictly closer than this (km) count as nearby.
    pub near_km: f64,

    /// Restrict outbound departure airports to the origin's country.
    pub departure_start_same_country: bool,

    /// Restrict outbound arrival airports to the destination's country.
    pub departure_end_same_country: bool,

    /// Restrict return departure airports to the destination's country.
    pub return_start_same_country: bool,

    /// Restrict return arrival airports to the origin's country.
    pub return_end_same_country: bool,

    /// How outbound and return quotes are paired.
    pub pairing: PairingMode,

    /// Maximum fare lookups in flight. 1 means strictly sequential.
    pub concurrency: usize,

    /// Maximum number of round trips to report. 0 means no limit.
    pub max_results: usize,
}

impl SearchConfig {
    /// Create a configuration for a route with default search parameters.
    pub fn new(origin: AirportCode, destination: AirportCode, pivot_date: NaiveDate) -> Self {
        Self {
            origin,
            destination,
            pivot_date,
            plus_minus_days: 2,
            trip_length_days: 4,
            near_km: 300.0,
            departure_start_same_country: true,
            departure_end_same_country: true,
            return_start_same_country: true,
            return_end_same_country: true,
            pairing: PairingMode::Index,
            concurrency: 1,
            max_results: 0,
        }
    }

    /// Set the date window span around the pivot.
    pub fn with_plus_minus_days(mut self, days: u32) -> Self {
        self.plus_minus_days = days;
        self
    }

    /// Set the trip length in days.
    pub fn with_trip_length(mut self, days: u32) -> Self {
        self.trip_length_days = days;
        self
    }

    /// Set the nearby-airport threshold.
    pub fn with_near_km(mut self, km: f64) -> Self {
        self.near_km = km;
        self
    }

    /// Set the same-country restriction for all four airport sets.
    pub fn with_same_country(mut self, same_country: bool) -> Self {
        self.departure_start_same_country = same_country;
        self.departure_end_same_country = same_country;
        self.return_start_same_country = same_country;
        self.return_end_same_country = same_country;
        self
    }

    /// Set the pairing mode.
    pub fn with_pairing(mut self, pairing: PairingMode) -> Self {
        self.pairing = pairing;
        self
    }

    /// Set the number of concurrent fare lookups.
    pub fn with_concurrency(mut self, n: usize) -> Self {
        self.concurrency = n;
        self
    }

    /// Set the maximum number of round trips to report.
    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SearchConfig {
        SearchConfig::new(
            AirportCode::parse("MUC").unwrap(),
            AirportCode::parse("HAM").unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        )
    }

    #[test]
    fn default_parameters() {
        let config = config();

        assert_eq!(config.plus_minus_days, 2);
        assert_eq!(config.trip_length_days, 4);
        assert_eq!(config.near_km, 300.0);
        assert!(config.departure_start_same_country);
        assert!(config.return_end_same_country);
        assert_eq!(config.pairing, PairingMode::Index);
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.max_results, 0);
    }

    #[test]
    fn builder_methods() {
        let config = config()
            .with_plus_minus_days(1)
            .with_trip_length(7)
            .with_near_km(150.0)
            .with_same_country(false)
            .with_pairing(PairingMode::Route)
            .with_concurrency(4)
            .with_max_results(10);

        assert_eq!(config.plus_minus_days, 1);
        assert_eq!(config.trip_length_days, 7);
        assert_eq!(config.near_km, 150.0);
        assert!(!config.departure_start_same_country);
        assert!(!config.departure_end_same_country);
        assert!(!config.return_start_same_country);
        assert!(!config.return_end_same_country);
        assert_eq!(config.pairing, PairingMode::Route);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.max_results, 10);
    }

    #[test]
    fn pairing_mode_parse() {
        assert_eq!("index".parse::<PairingMode>().unwrap(), PairingMode::Index);
        assert_eq!("Route".parse::<PairingMode>().unwrap(), PairingMode::Route);
        assert!("date".parse::<PairingMode>().is_err());
        assert_eq!(PairingMode::Route.to_string(), "route");
    }
}
