//! Social post record normalized from JSONL events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "from_id")]
    pub author_id: Option<String>,
    #[serde(default, alias = "from_name")]
    pub author_name: Option<String>,
    #[serde(default, alias = "created_time")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, alias = "message")]
    pub text: Option<String>,
    #[serde(default, alias = "type")]
    pub post_type: Option<String>,
}

impl SocialPost {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    pub fn with_author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = Some(author_name.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Parse a post from a JSONL line
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
