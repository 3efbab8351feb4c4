//! Search triple enumeration and fare lookup.
//!
//! Every date × origin × destination combination (minus self-pairs) is
//! priced through a [`FareSource`]. Triples without a price are dropped.

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::domain::{AirportCode, FlightQuote, SearchTriple};
use crate::fares::FareError;

/// Trait for providing fares.
///
/// This abstraction allows the enumerator to be tested with mock data.
#[allow(async_fn_in_trait)]
pub trait FareSource {
    /// Cheapest price for a triple.
    ///
    /// `Ok(None)` means the source answered but had no usable price.
    async fn cheapest_price(&self, triple: &SearchTriple) -> Result<Option<u32>, FareError>;
}

/// All triples to query, date-major, then origin, then destination.
///
/// Pairs where origin equals destination are skipped.
pub fn enumerate_triples(
    dates: &[NaiveDate],
    origins: &[AirportCode],
    destinations: &[AirportCode],
) -> Vec<SearchTriple> {
    dates
        .iter()
        .flat_map(move |date| {
            origins.iter().flat_map(move |origin| {
                destinations
                    .iter()
                    .filter_map(move |destination| SearchTriple::new(*origin, *destination, *date))
            })
        })
        .collect()
}

/// Price every triple one at a time, keeping those with a price.
///
/// Each lookup completes before the next starts. Output order follows
/// [`enumerate_triples`]. Failed lookups are logged and omitted.
pub async fn get_flights<S: FareSource>(
    source: &S,
    dates: &[NaiveDate],
    origins: &[AirportCode],
    destinations: &[AirportCode],
) -> Vec<FlightQuote> {
    let mut flights = Vec::new();

    for triple in enumerate_triples(dates, origins, destinations) {
        let result = source.cheapest_price(&triple).await;
        if let Some(price) = accept(&triple, result) {
            flights.push(triple.quote(price));
        }
    }

    flights
}

/// Like [`get_flights`] but with up to `limit` lookups in flight.
///
/// Results come back in the same order as the sequential enumeration, and
/// a failing lookup only drops its own triple. A `limit` of 0 is treated as 1.
pub async fn get_flights_concurrent<S: FareSource>(
    source: &S,
    dates: &[NaiveDate],
    origins: &[AirportCode],
    destinations: &[AirportCode],
    limit: usize,
) -> Vec<FlightQuote> {
    let triples = enumerate_triples(dates, origins, destinations);

    stream::iter(triples)
        .map(|triple| async move {
            let result = source.cheapest_price(&triple).await;
            accept(&triple, result).map(|price| triple.quote(price))
        })
        .buffered(limit.max(1))
        .filter_map(|quote| async move { quote })
        .collect()
        .await
}

/// Turn a lookup result into a price, logging why one is missing.
fn accept(triple: &SearchTriple, result: Result<Option<u32>, FareError>) -> Option<u32> {
    match result {
        Ok(Some(price)) => {
            debug!(
                origin = %triple.origin(),
                destination = %triple.destination(),
                date = %triple.date(),
                price,
                "Found fare"
            );
            Some(price)
        }
        Ok(None) => {
            debug!(
                origin = %triple.origin(),
                destination = %triple.destination(),
                date = %triple.date(),
                "No flights found or price could not be extracted"
            );
            None
        }
        Err(e) => {
            warn!(
                origin = %triple.origin(),
                destination = %triple.destination(),
                date = %triple.date(),
                error = %e,
                "Fare lookup failed, skipping"
            );
            None
        }
    }
}
