
pub mod config;
pub mod stats_core;

pub use config::StatsConfig;
