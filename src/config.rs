//! Post statistics configuration from environment variables

use crate::stats_core::{StatsError, StatsParams, AVERAGE_POSTS_PER_USER_PER_MONTH};
use chrono::{DateTime, NaiveDate, Utc};
use std::env;
use std::path::PathBuf;

/// Configuration for the `post_stats` binary
///
/// Loaded from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Path to the JSONL file of posts
    pub posts_path: PathBuf,

    /// Statistic label written into every result node
    pub stat_name: String,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    /// Where to write the JSON report; stdout when unset
    pub output_path: Option<PathBuf>,
}

impl StatsConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `POSTS_PATH` (default: data/posts.jsonl)
    /// - `STAT_NAME` (default: average-posts-per-user)
    /// - `STATS_START_DATE` (required, RFC 3339 or YYYY-MM-DD)
    /// - `STATS_END_DATE` (required, RFC 3339 or YYYY-MM-DD)
    /// - `STATS_OUTPUT_PATH` (optional)
    pub fn from_env() -> Result<Self, StatsError> {
        Ok(Self {
            posts_path: env::var("POSTS_PATH")
                .unwrap_or_else(|_| "data/posts.jsonl".to_string())
                .into(),
            stat_name: env::var("STAT_NAME")
                .unwrap_or_else(|_| AVERAGE_POSTS_PER_USER_PER_MONTH.to_string()),
            start_date: required_date("STATS_START_DATE")?,
            end_date: required_date("STATS_END_DATE")?,
            output_path: env::var("STATS_OUTPUT_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn params(&self) -> StatsParams {
        StatsParams::new(self.stat_name.clone(), self.start_date, self.end_date)
    }
}

fn required_date(key: &'static str) -> Result<DateTime<Utc>, StatsError> {
    let raw = env::var(key).map_err(|_| StatsError::MissingVar(key))?;
    parse_date(&raw).ok_or(StatsError::InvalidDate { key, raw })
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC)
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_formats() {
        let midnight = Utc.with_ymd_and_hms(2018, 8, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2018-08-01"), Some(midnight));
        assert_eq!(parse_date("2018-08-01T00:00:00+00:00"), Some(midnight));
        assert_eq!(
            parse_date("2018-08-01T02:00:00+02:00"),
            Some(midnight)
        );
        assert_eq!(parse_date("yesterday"), None);
    }

    // Single test so the env var mutations do not race
    #[test]
    fn test_config_from_env() {
        env::remove_var("POSTS_PATH");
        env::remove_var("STAT_NAME");
        env::remove_var("STATS_OUTPUT_PATH");
        env::remove_var("STATS_START_DATE");
        env::set_var("STATS_END_DATE", "2023-01-31");

        // Test: missing start date names the variable
        match StatsConfig::from_env() {
            Err(StatsError::MissingVar(key)) => assert_eq!(key, "STATS_START_DATE"),
            other => panic!("expected missing var error, got {:?}", other),
        }

        // Test: unparsable date keeps the raw value
        env::set_var("STATS_START_DATE", "not-a-date");
        match StatsConfig::from_env() {
            Err(StatsError::InvalidDate { key, raw }) => {
                assert_eq!(key, "STATS_START_DATE");
                assert_eq!(raw, "not-a-date");
            }
            other => panic!("expected invalid date error, got {:?}", other),
        }

        env::set_var("STATS_START_DATE", "2023-01-01");
        let config = StatsConfig::from_env().unwrap();
        assert_eq!(config.posts_path, PathBuf::from("data/posts.jsonl"));
        assert_eq!(config.stat_name, AVERAGE_POSTS_PER_USER_PER_MONTH);
        assert!(config.output_path.is_none());
        assert_eq!(
            config.params().end_date,
            Utc.with_ymd_and_hms(2023, 1, 31, 0, 0, 0).unwrap()
        );

        env::set_var("POSTS_PATH", "/tmp/posts.jsonl");
        env::set_var("STAT_NAME", "custom");
        env::set_var("STATS_OUTPUT_PATH", "/tmp/report.json");
        let config = StatsConfig::from_env().unwrap();
        assert_eq!(config.posts_path, PathBuf::from("/tmp/posts.jsonl"));
        assert_eq!(config.params().stat_name, "custom");
        assert_eq!(config.output_path, Some(PathBuf::from("/tmp/report.json")));

        // Cleanup
        env::remove_var("POSTS_PATH");
        env::remove_var("STAT_NAME");
        env::remove_var("STATS_OUTPUT_PATH");
        env::remove_var("STATS_START_DATE");
        env::remove_var("STATS_END_DATE");
    }
}
