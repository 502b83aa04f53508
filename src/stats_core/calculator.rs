//! Calculator lifecycle shared by every statistic
//!
//! A calculator is configured once with [`StatsParams`], fed posts one at a
//! time through [`StatisticsCalculator::accumulate_data`], then asked for its
//! result with [`StatisticsCalculator::calculate`]. Implementors provide the
//! two steps (`do_accumulate`, `do_calculate`) and may narrow `check_post`.

use super::params::StatsParams;
use super::post::SocialPost;
use super::result::StatisticsNode;

pub trait StatisticsCalculator {
    /// Store the parameters for this run
    fn set_parameters(&mut self, params: StatsParams);

    /// Parameters set by `set_parameters`, if any
    fn parameters(&self) -> Option<&StatsParams>;

    /// Filter applied before a post reaches `do_accumulate`
    ///
    /// Any borrowed post is well-formed, so the base filter accepts everything.
    fn check_post(&self, _post: &SocialPost) -> bool {
        true
    }

    /// Fold one qualifying post into the accumulator state
    fn do_accumulate(&mut self, post: &SocialPost);

    /// Build the result from the accumulated state
    fn do_calculate(&self) -> StatisticsNode;

    fn accumulate_data(&mut self, post: &SocialPost) {
        if self.check_post(post) {
            self.do_accumulate(post);
        }
    }

    fn calculate(&self) -> StatisticsNode {
        self.do_calculate()
    }

    /// Configured statistic name, empty when parameters were never set
    fn stat_name(&self) -> &str {
        self.parameters()
            .map(|params| params.stat_name.as_str())
            .unwrap_or_default()
    }
}

/// Builder-style `set_parameters` for sized calculators
pub trait WithParameters: StatisticsCalculator + Sized {
    fn with_parameters(mut self, params: StatsParams) -> Self {
        self.set_parameters(params);
        self
    }
}

impl<T: StatisticsCalculator> WithParameters for T {}
