//! In-memory airport reference dataset.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{AirportCode, AirportRecord, Coordinates};

use super::error::DatasetError;

/// Columns every airport dataset must provide.
const REQUIRED_COLUMNS: [&str; 4] = ["code", "country", "latitude", "longitude"];

/// Raw CSV row before code validation.
#[derive(Debug, Deserialize)]
struct AirportRow {
    code: String,
    country: String,
    latitude: f64,
    longitude: f64,
}

/// Immutable airport lookup, loaded once per run.
///
/// Records keep the order of the source file. Lookup by code returns the
/// first record with that code; proximity iteration still visits every row.
#[derive(Debug, Clone, Default)]
pub struct AirportDataset {
    records: Vec<AirportRecord>,
    index: HashMap<AirportCode, usize>,
}

impl AirportDataset {
    /// Load the dataset from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        debug!(path = %path.display(), airports = dataset.len(), "Loaded airport dataset");
        Ok(dataset)
    }

    /// Load the dataset from any CSV source with a header row.
    ///
    /// Codes must be three uppercase ASCII letters (IATA style). Rows with any
    /// other code, such as `"EDDM"` or `"muc"`, are skipped with a warning
    /// rather than failing the load.
    pub fn from_reader(reader: impl Read) -> Result<Self, DatasetError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        for row in rdr.deserialize() {
            let row: AirportRow = row?;
            match AirportCode::parse(&row.code) {
                Ok(code) => records.push(AirportRecord::new(
                    code,
                    row.country,
                    Coordinates::new(row.latitude, row.longitude),
                )),
                Err(e) => warn!(error = %e, "Skipping airport row"),
            }
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self::from_records(records))
    }

    /// Build a dataset from records already in memory.
    pub fn from_records(records: Vec<AirportRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            index.entry(record.code).or_insert(i);
        }
        Self { records, index }
    }

    /// Look up an airport by code.
    pub fn get(&self, code: &AirportCode) -> Option<&AirportRecord> {
        self.index.get(code).map(|&i| &self.records[i])
    }

    pub fn contains(&self, code: &AirportCode) -> bool {
        self.index.contains_key(code)
    }

    /// All records in file order.
    pub fn iter(&self) -> impl Iterator<Item = &AirportRecord> {
        self.records.iter()
    }

    /// Number of rows (duplicate codes counted separately).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
