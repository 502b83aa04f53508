//! Runs several calculators over one post sequence

use super::calculator::StatisticsCalculator;
use super::post::SocialPost;
use super::result::StatisticsNode;

pub struct StatsService {
    calculators: Vec<Box<dyn StatisticsCalculator>>,
}

impl StatsService {
    pub fn new() -> Self {
        Self {
            calculators: Vec::new(),
        }
    }

    pub fn with_calculator(mut self, calculator: Box<dyn StatisticsCalculator>) -> Self {
        self.calculators.push(calculator);
        self
    }

    /// Feed every post to every calculator, then collect one child per calculator
    /// under a root node named `root_name`
    pub fn calculate<'a, I>(mut self, root_name: &str, posts: I) -> StatisticsNode
    where
        I: IntoIterator<Item = &'a SocialPost>,
    {
        let mut accumulated = 0usize;
        for post in posts {
            for calculator in self.calculators.iter_mut() {
                calculator.accumulate_data(post);
            }
            accumulated += 1;
        }

        log::debug!(
            "Accumulated {} posts into {} calculators",
            accumulated,
            self.calculators.len()
        );

        let mut root = StatisticsNode::new(root_name);
        for calculator in &self.calculators {
            let result = calculator.calculate();
            log::info!(
                "📊 {}: {} entries",
                result.name,
                result.children.len()
            );
            root.add_child(result);
        }
        root
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}
