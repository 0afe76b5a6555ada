use crate::{
    leaderboard::LeaderboardPlayer,
    models::{Result, StatisticsSnapshot},
};

/// Where already-fetched player data comes from. The scoring engine never
/// talks to the game API itself; a source hands it finished snapshots.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotSource: Send + Sync {
    /// Statistics snapshot for one player
    fn fetch_snapshot(&self, player: &str) -> Result<StatisticsSnapshot>;

    /// Every guild member, ready to be ranked
    fn fetch_guild_players(&self) -> Result<Vec<LeaderboardPlayer>>;
}
