//! Round-trip search orchestration.
//!
//! Builds the date windows and the four nearby-airport sets, prices both
//! directions and pairs the results.

use serde::Serialize;
use tracing::info;

use crate::airports::{AirportDataset, ProximityError, near_airports};
use crate::domain::{AirportCode, DateWindow, DateWindowError, FlightQuote, RoundTrip};

use super::config::SearchConfig;
use super::rank::{pair_round_trips, rank_round_trips, truncate_results};
use super::search::{FareSource, get_flights, get_flights_concurrent};

/// Error from planning a round-trip search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// An endpoint airport is not in the dataset
    #[error(transparent)]
    UnknownAirport(#[from] ProximityError),

    /// The date window cannot be built
    #[error(transparent)]
    DateWindow(#[from] DateWindowError),
}

/// The four airport sets a round-trip search queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirportSets {
    /// Outbound departure airports, near the origin.
    pub departure_origins: Vec<AirportCode>,
    /// Outbound arrival airports, near the destination.
    pub departure_destinations: Vec<AirportCode>,
    /// Return departure airports, near the destination.
    pub return_origins: Vec<AirportCode>,
    /// Return arrival airports, near the origin.
    pub return_destinations: Vec<AirportCode>,
}

impl AirportSets {
    /// Run the proximity filter for all four sets.
    pub fn resolve(dataset: &AirportDataset, config: &SearchConfig) -> Result<Self, PlanError> {
        let from = &config.origin;
        let to = &config.destination;
        let km = config.near_km;

        Ok(Self {
            departure_origins: near_airports(
                dataset,
                from,
                to,
                km,
                config.departure_start_same_country,
            )?,
            departure_destinations: near_airports(
                dataset,
                to,
                from,
                km,
                config.departure_end_same_country,
            )?,
            return_origins: near_airports(dataset, to, from, km, config.return_start_same_country)?,
            return_destinations: near_airports(
                dataset,
                from,
                to,
                km,
                config.return_end_same_country,
            )?,
        })
    }
}

/// Everything a round-trip search produced.
#[derive(Debug, Clone)]
pub struct TripReport {
    pub airports: AirportSets,
    pub departure_dates: DateWindow,
    pub return_dates: DateWindow,
    /// Priced outbound triples in enumeration order.
    pub outbound: Vec<FlightQuote>,
    /// Priced return triples in enumeration order.
    pub inbound: Vec<FlightQuote>,
    /// Paired, ranked and truncated round trips.
    pub round_trips: Vec<RoundTrip>,
}

/// Round-trip planner.
pub struct Planner<'a, S: FareSource> {
    dataset: &'a AirportDataset,
    source: &'a S,
    config: &'a SearchConfig,
}

impl<'a, S: FareSource> Planner<'a, S> {
    /// Create a new planner.
    pub fn new(dataset: &'a AirportDataset, source: &'a S, config: &'a SearchConfig) -> Self {
        Self {
            dataset,
            source,
            config,
        }
    }

    /// Search both directions and pair the results.
    ///
    /// Airport sets and date windows are resolved before any fare is
    /// fetched, so an unknown airport fails the run immediately.
    pub async fn plan(&self) -> Result<TripReport, PlanError> {
        let config = self.config;

        let departure_dates = DateWindow::around(config.pivot_date, config.plus_minus_days)?;
        let return_dates = departure_dates.shifted(config.trip_length_days)?;
        let airports = AirportSets::resolve(self.dataset, config)?;

        info!(
            dates = departure_dates.len(),
            origins = airports.departure_origins.len(),
            destinations = airports.departure_destinations.len(),
            "Searching outbound flights"
        );
        let outbound = self
            .fetch(
                departure_dates.dates(),
                &airports.departure_origins,
                &airports.departure_destinations,
            )
            .await;

        info!(
            dates = return_dates.len(),
            origins = airports.return_origins.len(),
            destinations = airports.return_destinations.len(),
            "Searching return flights"
        );
        let inbound = self
            .fetch(
                return_dates.dates(),
                &airports.return_origins,
                &airports.return_destinations,
            )
            .await;

        let pairs = pair_round_trips(
            &outbound,
            &inbound,
            config.pairing,
            config.trip_length_days,
        );
        let round_trips = truncate_results(rank_round_trips(pairs), config.max_results);

        info!(
            outbound = outbound.len(),
            inbound = inbound.len(),
            round_trips = round_trips.len(),
            pairing = %config.pairing,
            "Search complete"
        );

        Ok(TripReport {
            airports,
            departure_dates,
            return_dates,
            outbound,
            inbound,
            round_trips,
        })
    }

    async fn fetch(
        &self,
        dates: &[chrono::NaiveDate],
        origins: &[AirportCode],
        destinations: &[AirportCode],
    ) -> Vec<FlightQuote> {
        if self.config.concurrency > 1 {
            get_flights_concurrent(
                self.source,
                dates,
                origins,
                destinations,
                self.config.concurrency,
            )
            .await
        } else {
            get_flights(self.source, dates, origins, destinations).await
        }
    }
}
