//! Search triples, flight quotes and round trips.

use chrono::NaiveDate;
use serde::Serialize;

use super::AirportCode;

/// A single price lookup: fly from `origin` to `destination` on `date`.
///
/// Origin and destination always differ; [`SearchTriple::new`] refuses to
/// build a triple that pairs an airport with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTriple {
    origin: AirportCode,
    destination: AirportCode,
    date: NaiveDate,
}

impl SearchTriple {
    /// Returns `None` when `origin == destination`.
    pub fn new(origin: AirportCode, destination: AirportCode, date: NaiveDate) -> Option<Self> {
        (origin != destination).then_some(Self {
            origin,
            destination,
            date,
        })
    }

    pub fn origin(&self) -> AirportCode {
        self.origin
    }

    pub fn destination(&self) -> AirportCode {
        self.destination
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Attach a price, producing a quote.
    pub fn quote(self, price: u32) -> FlightQuote {
        FlightQuote {
            origin: self.origin,
            destination: self.destination,
            date: self.date,
            price,
        }
    }
}

/// The cheapest price found for a search triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FlightQuote {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub date: NaiveDate,
    pub price: u32,
}

impl FlightQuote {
    pub fn new(origin: AirportCode, destination: AirportCode, date: NaiveDate, price: u32) -> Self {
        Self {
            origin,
            destination,
            date,
            price,
        }
    }
}

/// An outbound quote paired with a return quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundTrip {
    pub outbound: FlightQuote,
    #[serde(rename = "return")]
    pub inbound: FlightQuote,
}

impl RoundTrip {
    pub fn new(outbound: FlightQuote, inbound: FlightQuote) -> Self {
        Self { outbound, inbound }
    }

    /// Sum of both legs. Widened so two large prices cannot overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.outbound.price) + u64::from(self.inbound.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    #[test]
    fn triple_rejects_same_airport() {
        assert!(SearchTriple::new(code("MUC"), code("MUC"), date()).is_none());
    }

    #[test]
    fn triple_quote_carries_fields() {
        let triple = SearchTriple::new(code("MUC"), code("HAM"), date()).unwrap();
        let quote = triple.quote(120);
        assert_eq!(quote, FlightQuote::new(code("MUC"), code("HAM"), date(), 120));
    }

    #[test]
    fn round_trip_total() {
        let out = FlightQuote::new(code("MUC"), code("HAM"), date(), u32::MAX);
        let back = FlightQuote::new(code("HAM"), code("MUC"), date(), 1);
        assert_eq!(RoundTrip::new(out, back).total(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn round_trip_serializes_return_key() {
        let out = FlightQuote::new(code("MUC"), code("HAM"), date(), 100);
        let back = FlightQuote::new(code("HAM"), code("MUC"), date(), 80);
        let json = serde_json::to_value(RoundTrip::new(out, back)).unwrap();
        assert_eq!(json["outbound"]["origin"], "MUC");
        assert_eq!(json["return"]["price"], 80);
        assert_eq!(json["return"]["date"], "2025-04-01");
    }
}
