//! Airport reference data and the nearby-airport filter.
//!
//! The dataset is read once from CSV into an immutable lookup that every
//! proximity query shares.

mod dataset;
mod error;
mod proximity;

pub use dataset::AirportDataset;
pub use error::{DatasetError, ProximityError};
pub use proximity::near_airports;
