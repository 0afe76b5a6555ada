pub mod categories;
pub mod player;

pub use categories::{
    Leaderboard, LeaderboardCategory, LeaderboardEntry, LeaderboardRegistry, PlayerStatFn,
    LEADERBOARD_CATEGORIES,
};
pub use player::LeaderboardPlayer;
