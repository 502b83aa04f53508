//! Stats Core - Pluggable Post Statistics Calculators
//!
//! This module provides the calculator lifecycle and the concrete statistics
//! computed over a stream of social posts.
//!
//! # Architecture
//!
//! ```text
//! JSONL File → PostReader → SocialPost
//!     ↓
//! StatsService (feeds every post to each calculator)
//!     ↓
//! StatisticsCalculator::accumulate_data (check_post → do_accumulate)
//!     ↓
//! StatisticsCalculator::calculate → StatisticsNode tree
//! ```

pub mod average_posts;
pub mod calculator;
pub mod error;
pub mod months;
pub mod params;
pub mod post;
pub mod reader;
pub mod result;
pub mod service;

pub use average_posts::{AveragePostsPerUserPerMonth, AVERAGE_POSTS_PER_USER_PER_MONTH};
pub use calculator::{StatisticsCalculator, WithParameters};
pub use error::StatsError;
pub use months::{months_in_range, months_spanned, MonthYear};
pub use params::StatsParams;
pub use post::SocialPost;
pub use reader::PostReader;
pub use result::StatisticsNode;
pub use service::StatsService;
