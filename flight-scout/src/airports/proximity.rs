//! Nearby-airport filter.

use tracing::info;

use crate::domain::AirportCode;

use super::dataset::AirportDataset;
use super::error::ProximityError;

/// Airports within `max_km` of `reference`, reference first.
///
/// A candidate is kept when it is neither `reference` nor `excluded`, shares
/// the reference airport's country if `same_country` is set, and lies
/// strictly closer than `max_km`. Candidates keep dataset order. The
/// reference code always leads the result regardless of the filters.
///
/// # Errors
///
/// Returns [`ProximityError::NotFound`] if `reference` is not in the dataset.
pub fn near_airports(
    dataset: &AirportDataset,
    reference: &AirportCode,
    excluded: &AirportCode,
    max_km: f64,
    same_country: bool,
) -> Result<Vec<AirportCode>, ProximityError> {
    let origin = dataset
        .get(reference)
        .ok_or(ProximityError::NotFound(*reference))?;

    let mut near = vec![*reference];
    near.extend(
        dataset
            .iter()
            .filter(|candidate| {
                candidate.code != *reference
                    && candidate.code != *excluded
                    && (!same_country || candidate.country == origin.country)
            })
            .filter(|candidate| origin.position.distance_km(&candidate.position) < max_km)
            .map(|candidate| candidate.code),
    );

    info!(
        airport = %reference,
        near = ?near.iter().map(AirportCode::as_str).collect::<Vec<_>>(),
        count = near.len(),
        "Found nearby airports"
    );

    Ok(near)
}
