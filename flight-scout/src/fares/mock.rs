//! Mock fare source for running without hitting the fare site.
//!
//! Loads prices from a JSON file and serves them as if they had been
//! scraped. Useful for development, demos and tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;

use crate::domain::{AirportCode, SearchTriple};
use crate::planner::FareSource;

use super::error::FareError;

type RouteKey = (AirportCode, AirportCode, NaiveDate);

/// Mock fare source backed by an in-memory price table.
///
/// The JSON file maps `"ORG-DST-YYYY-MM-DD"` keys to integer prices:
///
/// ```json
/// { "MUC-HAM-2025-04-01": 1850, "HAM-MUC-2025-04-05": 1720 }
/// ```
///
/// Triples missing from the table have no price unless a fallback price is set.
#[derive(Debug, Clone, Default)]
pub struct MockFareSource {
    prices: Arc<HashMap<RouteKey, u32>>,
    fallback: Option<u32>,
    calls: Arc<AtomicUsize>,
}

impl MockFareSource {
    /// Load a price table from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FareError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| FareError::Mock(format!("failed to read {:?}: {}", path, e)))?;
        Self::from_json(&json)
    }

    /// Parse a price table from JSON text.
    pub fn from_json(json: &str) -> Result<Self, FareError> {
        let raw: HashMap<String, u32> = serde_json::from_str(json)
            .map_err(|e| FareError::Mock(format!("failed to parse price table: {}", e)))?;

        let prices = raw
            .into_iter()
            .map(|(key, price)| parse_key(&key).map(|k| (k, price)))
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self {
            prices: Arc::new(prices),
            ..Self::default()
        })
    }

    /// Build a source from explicit quotes.
    pub fn from_prices(prices: impl IntoIterator<Item = (SearchTriple, u32)>) -> Self {
        let prices = prices
            .into_iter()
            .map(|(t, price)| ((t.origin(), t.destination(), t.date()), price))
            .collect();
        Self {
            prices: Arc::new(prices),
            ..Self::default()
        }
    }

    /// A source that quotes `price` for every triple.
    pub fn fixed(price: u32) -> Self {
        Self::default().with_fallback(price)
    }

    /// Price returned for triples missing from the table.
    pub fn with_fallback(mut self, price: u32) -> Self {
        self.fallback = Some(price);
        self
    }

    /// Number of price lookups served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Number of entries in the price table.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    fn lookup(&self, triple: &SearchTriple) -> Option<u32> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.prices
            .get(&(triple.origin(), triple.destination(), triple.date()))
            .copied()
            .or(self.fallback)
    }
}

impl FareSource for MockFareSource {
    async fn cheapest_price(&self, triple: &SearchTriple) -> Result<Option<u32>, FareError> {
        Ok(self.lookup(triple))
    }
}

/// Parse `"MUC-HAM-2025-04-01"` into its parts.
fn parse_key(key: &str) -> Result<RouteKey, FareError> {
    let bad = |reason: String| FareError::Mock(format!("invalid key {key:?}: {reason}"));

    let mut parts = key.splitn(3, '-');
    let (Some(origin), Some(destination), Some(date)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(bad("expected ORG-DST-YYYY-MM-DD".to_string()));
    };

    let origin = AirportCode::parse(origin).map_err(|e| bad(e.to_string()))?;
    let destination = AirportCode::parse(destination).map_err(|e| bad(e.to_string()))?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| bad(e.to_string()))?;

    Ok((origin, destination, date))
}
