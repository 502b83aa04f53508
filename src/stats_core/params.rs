//! Calculator parameters: statistic label and the date range it covers

use chrono::{DateTime, Utc};

/// Parameters supplied to a calculator before accumulation starts.
///
/// `start_date <= end_date` is not enforced; see [`super::months::months_in_range`]
/// for how an inverted range is counted.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsParams {
    pub stat_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl StatsParams {
    pub fn new(
        stat_name: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            stat_name: stat_name.into(),
            start_date,
            end_date,
        }
    }
}
