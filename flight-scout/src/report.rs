//! Console output for search results.

use std::fmt::Write;

use serde::Serialize;

use crate::domain::{FlightQuote, RoundTrip};
use crate::planner::{AirportSets, TripReport};

/// Render round trips as the plain-text report.
///
/// Each trip prints its departure leg, return leg and total, followed by a
/// blank line.
pub fn render_text(trips: &[RoundTrip], currency: &str) -> String {
    if trips.is_empty() {
        return "No round trips found.\n".to_string();
    }

    let mut out = String::new();
    for trip in trips {
        let _ = writeln!(out, "Departure: {}", leg(&trip.outbound, currency));
        let _ = writeln!(out, "Return: {}", leg(&trip.inbound, currency));
        let _ = writeln!(out, "Total cost: {} {}.", trip.total(), currency);
        out.push('\n');
    }
    out
}

fn leg(quote: &FlightQuote, currency: &str) -> String {
    format!(
        "{} to {} on {} costs {} {}.",
        quote.origin, quote.destination, quote.date, quote.price, currency
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    currency: &'a str,
    airports: &'a AirportSets,
    round_trips: Vec<JsonRoundTrip<'a>>,
}

#[derive(Serialize)]
struct JsonRoundTrip<'a> {
    #[serde(flatten)]
    trip: &'a RoundTrip,
    total: u64,
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &TripReport, currency: &str) -> serde_json::Result<String> {
    let json = JsonReport {
        currency,
        airports: &report.airports,
        round_trips: report
            .round_trips
            .iter()
            .map(|trip| JsonRoundTrip {
                trip,
                total: trip.total(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, DateWindow};
    use chrono::NaiveDate;

    fn quote(o: &str, d: &str, date: &str, price: u32) -> FlightQuote {
        FlightQuote::new(
            AirportCode::parse(o).unwrap(),
            AirportCode::parse(d).unwrap(),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            price,
        )
    }

    fn trip() -> RoundTrip {
        RoundTrip::new(
            quote("MUC", "HAM", "2025-04-01", 1850),
            quote("HAM", "MUC", "2025-04-05", 1720),
        )
    }

    #[test]
    fn text_report_lines() {
        let text = render_text(&[trip()], "TL");
        assert_eq!(
            text,
            "Departure: MUC to HAM on 2025-04-01 costs 1850 TL.\n\
             Return: HAM to MUC on 2025-04-05 costs 1720 TL.\n\
             Total cost: 3570 TL.\n\n"
        );
    }

    #[test]
    fn empty_text_report() {
        assert_eq!(render_text(&[], "TL"), "No round trips found.\n");
    }

    #[test]
    fn json_report_includes_totals() {
        let code = |s| AirportCode::parse(s).unwrap();
        let report = TripReport {
            airports: AirportSets {
                departure_origins: vec![code("MUC")],
                departure_destinations: vec![code("HAM")],
                return_origins: vec![code("HAM")],
                return_destinations: vec![code("MUC")],
            },
            departure_dates: DateWindow::from_dates(vec![]),
            return_dates: DateWindow::from_dates(vec![]),
            outbound: vec![trip().outbound],
            inbound: vec![trip().inbound],
            round_trips: vec![trip()],
        };

        let json = render_json(&report, "EUR").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["currency"], "EUR");
        assert_eq!(value["airports"]["departure_origins"][0], "MUC");
        assert_eq!(value["round_trips"][0]["total"], 3570);
        assert_eq!(value["round_trips"][0]["outbound"]["price"], 1850);
        assert_eq!(value["round_trips"][0]["return"]["destination"], "MUC");
    }
}
