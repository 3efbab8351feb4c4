//! Date windows for the departure and return legs.

use chrono::{Days, NaiveDate};

/// Error returned when a date window would leave chrono's supported range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("date window out of range: {pivot} offset by {offset} days")]
pub struct DateWindowError {
    pivot: NaiveDate,
    offset: i64,
}

/// An ordered run of consecutive calendar dates.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use flight_scout::domain::DateWindow;
///
/// let pivot = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
/// let window = DateWindow::around(pivot, 1).unwrap();
/// let dates: Vec<String> = window.iter().map(|d| d.to_string()).collect();
/// assert_eq!(dates, ["2025-03-31", "2025-04-01", "2025-04-02"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    dates: Vec<NaiveDate>,
}

impl DateWindow {
    /// Dates from `pivot - plus_minus_days` to `pivot + plus_minus_days` inclusive.
    pub fn around(pivot: NaiveDate, plus_minus_days: u32) -> Result<Self, DateWindowError> {
        let span = i64::from(plus_minus_days);
        let dates = (-span..=span)
            .map(|offset| offset_date(pivot, offset))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dates })
    }

    /// Build a window from explicit dates, kept in the given order.
    pub fn from_dates(dates: Vec<NaiveDate>) -> Self {
        Self { dates }
    }

    /// Every date moved forward by `days` (the return window for a trip of that length).
    pub fn shifted(&self, days: u32) -> Result<Self, DateWindowError> {
        let dates = self
            .dates
            .iter()
            .map(|date| offset_date(*date, i64::from(days)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dates })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

fn offset_date(pivot: NaiveDate, offset: i64) -> Result<NaiveDate, DateWindowError> {
    let days = Days::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        pivot.checked_add_days(days)
    } else {
        pivot.checked_sub_days(days)
    };
    shifted.ok_or(DateWindowError { pivot, offset })
}
