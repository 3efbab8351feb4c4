//! Round-trip pairing and ranking.

use chrono::Days;

use crate::domain::{FlightQuote, RoundTrip};

use super::config::PairingMode;

/// Combine outbound and return quotes into round trips.
///
/// See [`PairingMode`] for how each mode matches quotes. `trip_length_days`
/// is only consulted by [`PairingMode::Route`].
pub fn pair_round_trips(
    outbound: &[FlightQuote],
    inbound: &[FlightQuote],
    mode: PairingMode,
    trip_length_days: u32,
) -> Vec<RoundTrip> {
    match mode {
        PairingMode::Index => outbound
            .iter()
            .zip(inbound)
            .map(|(out, back)| RoundTrip::new(*out, *back))
            .collect(),
        PairingMode::Route => outbound
            .iter()
            .flat_map(move |out| {
                let return_date = out
                    .date
                    .checked_add_days(Days::new(u64::from(trip_length_days)));
                inbound
                    .iter()
                    .filter(move |back| {
                        back.origin == out.destination
                            && back.destination == out.origin
                            && Some(back.date) == return_date
                    })
                    .map(move |back| RoundTrip::new(*out, *back))
            })
            .collect(),
    }
}

/// Sort round trips cheapest first.
///
/// The sort is stable, so trips with equal totals keep their pairing order.
pub fn rank_round_trips(mut trips: Vec<RoundTrip>) -> Vec<RoundTrip> {
    trips.sort_by_key(RoundTrip::total);
    trips
}

/// Keep at most `max_results` trips; 0 keeps everything.
pub fn truncate_results(mut trips: Vec<RoundTrip>, max_results: usize) -> Vec<RoundTrip> {
    if max_results > 0 {
        trips.truncate(max_results);
    }
    trips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AirportCode;
    use chrono::NaiveDate;

    fn quote(o: &str, d: &str, date: &str, price: u32) -> FlightQuote {
        FlightQuote::new(
            AirportCode::parse(o).unwrap(),
            AirportCode::parse(d).unwrap(),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            price,
        )
    }

    #[test]
    fn index_pairing_zips_positionally() {
        let outbound = [
            quote("MUC", "HAM", "2025-04-01", 100),
            quote("STR", "HAM", "2025-04-01", 90),
        ];
        let inbound = [
            quote("HAM", "MUC", "2025-04-05", 80),
            quote("HAM", "STR", "2025-04-05", 70),
            quote("HAM", "MUC", "2025-04-06", 60),
        ];

        let trips = pair_round_trips(&outbound, &inbound, PairingMode::Index, 4);
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0], RoundTrip::new(outbound[0], inbound[0]));
        assert_eq!(trips[1], RoundTrip::new(outbound[1], inbound[1]));
    }

    #[test]
    fn index_pairing_mismatches_after_a_gap() {
        // The return to MUC went missing, so MUC's outbound is paired with
        // the return to STR. Index pairing does not look at content.
        let outbound = [
            quote("MUC", "HAM", "2025-04-01", 100),
            quote("STR", "HAM", "2025-04-01", 90),
        ];
        let inbound = [quote("HAM", "STR", "2025-04-05", 70)];

        let trips = pair_round_trips(&outbound, &inbound, PairingMode::Index, 4);
        assert_eq!(trips, [RoundTrip::new(outbound[0], inbound[0])]);
    }

    #[test]
    fn route_pairing_matches_reverse_leg_and_date() {
        let outbound = [
            quote("MUC", "HAM", "2025-04-01", 100),
            quote("STR", "HAM", "2025-04-01", 90),
        ];
        let inbound = [
            quote("HAM", "STR", "2025-04-05", 70),
            quote("HAM", "MUC", "2025-04-06", 60), // wrong date for MUC
        ];

        let trips = pair_round_trips(&outbound, &inbound, PairingMode::Route, 4);
        assert_eq!(trips, [RoundTrip::new(outbound[1], inbound[0])]);
    }

    #[test]
    fn empty_inputs_pair_to_nothing() {
        let outbound = [quote("MUC", "HAM", "2025-04-01", 100)];
        assert!(pair_round_trips(&outbound, &[], PairingMode::Index, 4).is_empty());
        assert!(pair_round_trips(&[], &outbound, PairingMode::Route, 4).is_empty());
    }

    #[test]
    fn ranking_is_cheapest_first_and_stable() {
        let a = RoundTrip::new(
            quote("MUC", "HAM", "2025-04-01", 100),
            quote("HAM", "MUC", "2025-04-05", 100),
        );
        let b = RoundTrip::new(
            quote("STR", "HAM", "2025-04-01", 50),
            quote("HAM", "STR", "2025-04-05", 50),
        );
        let c = RoundTrip::new(
            quote("NUE", "HAM", "2025-04-01", 150),
            quote("HAM", "NUE", "2025-04-05", 50),
        );

        let ranked = rank_round_trips(vec![a, b, c]);
        assert_eq!(ranked, [b, a, c]);
    }

    #[test]
    fn truncate_zero_keeps_all() {
        let a = RoundTrip::new(
            quote("MUC", "HAM", "2025-04-01", 1),
            quote("HAM", "MUC", "2025-04-05", 1),
        );
        assert_eq!(truncate_results(vec![a, a, a], 0).len(), 3);
        assert_eq!(truncate_results(vec![a, a, a], 2).len(), 2);
    }
}
