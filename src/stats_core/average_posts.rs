//! Average number of posts per author per calendar month

use super::calculator::StatisticsCalculator;
use super::months::months_in_range;
use super::params::StatsParams;
use super::post::SocialPost;
use super::result::StatisticsNode;
use std::collections::HashMap;

pub const AVERAGE_POSTS_PER_USER_PER_MONTH: &str = "average-posts-per-user";

const UNITS: &str = "posts per month";

#[derive(Debug, Clone)]
struct AuthorTally {
    author_id: String,
    name: Option<String>,
    posts: u64,
}

impl AuthorTally {
    fn split_label(&self) -> String {
        format!("{}[{}]", self.name.as_deref().unwrap_or(""), self.author_id)
    }
}

/// Per-author post count divided by the number of calendar months in range
///
/// Authors are reported in the order they were first seen. Posts without an
/// author id or a date are ignored.
#[derive(Debug, Default)]
pub struct AveragePostsPerUserPerMonth {
    params: Option<StatsParams>,
    authors: Vec<AuthorTally>,
    index: HashMap<String, usize>,
}

impl AveragePostsPerUserPerMonth {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatisticsCalculator for AveragePostsPerUserPerMonth {
    fn set_parameters(&mut self, params: StatsParams) {
        self.params = Some(params);
    }

    fn parameters(&self) -> Option<&StatsParams> {
        self.params.as_ref()
    }

    fn check_post(&self, post: &SocialPost) -> bool {
        post.author_id.is_some() && post.date.is_some()
    }

    fn do_accumulate(&mut self, post: &SocialPost) {
        let Some(author_id) = post.author_id.as_ref() else {
            return;
        };

        let slot = match self.index.get(author_id) {
            Some(&slot) => slot,
            None => {
                self.authors.push(AuthorTally {
                    author_id: author_id.clone(),
                    name: None,
                    posts: 0,
                });
                self.index.insert(author_id.clone(), self.authors.len() - 1);
                self.authors.len() - 1
            }
        };

        let tally = &mut self.authors[slot];
        tally.posts += 1;
        if let Some(name) = &post.author_name {
            tally.name = Some(name.clone());
        }
    }

    fn do_calculate(&self) -> StatisticsNode {
        let mut result = StatisticsNode::new(self.stat_name());

        let Some(params) = self.params.as_ref() else {
            return result;
        };
        if self.authors.is_empty() {
            return result;
        }

        let months = months_in_range(params.start_date, params.end_date) as u64;

        for tally in &self.authors {
            result.add_child(
                StatisticsNode::new(params.stat_name.as_str())
                    .with_split_period(tally.split_label())
                    .with_value(average_per_month(tally.posts, months))
                    .with_units(UNITS),
            );
        }

        result
    }
}

/// `posts / months` rounded half-up to two decimal places
///
/// Rounds the exact ratio in integer hundredths; rounding the float quotient
/// would send ratios like 41/40 (1.025) down to 1.02.
fn average_per_month(posts: u64, months: u64) -> f64 {
    let months = months.max(1);
    let hundredths = (posts * 200 + months) / (2 * months);
    hundredths as f64 / 100.0
}
