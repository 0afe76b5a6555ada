pub mod models;
pub mod config;
pub mod scoring;
pub mod leaderboard;
pub mod sources;
pub mod utils;

pub use models::{CalculationResult, ScoreError, Result, SkillStat, StatisticsSnapshot, WeightResult};
pub use crate::config::Settings;

// Re-export the two entry points front-ends resolve names through
pub use scoring::{ScoreCalculator, StatRegistry};
pub use leaderboard::{LeaderboardPlayer, LeaderboardRegistry};
