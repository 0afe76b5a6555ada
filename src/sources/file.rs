use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::{
    leaderboard::LeaderboardPlayer,
    models::{Result, ScoreError, StatisticsSnapshot},
    sources::SnapshotSource,
};

/// Reads snapshots exported to disk:
///
/// ```text
/// <root>/players/<player>.json   StatisticsSnapshot
/// <root>/guild.json              [LeaderboardPlayer]
/// ```
pub struct JsonFileSource {
    root: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn player_path(&self, player: &str) -> Result<PathBuf> {
        let valid = !player.is_empty()
            && player
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ScoreError::InvalidInput(format!("invalid player name: {:?}", player)));
        }

        Ok(self.root.join("players").join(format!("{}.json", player)))
    }
}

impl SnapshotSource for JsonFileSource {
    fn fetch_snapshot(&self, player: &str) -> Result<StatisticsSnapshot> {
        let path = self.player_path(player)?;
        debug!("Loading snapshot for {} from {}", player, path.display());

        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn fetch_guild_players(&self) -> Result<Vec<LeaderboardPlayer>> {
        let path = self.root.join("guild.json");
        debug!("Loading guild roster from {}", path.display());

        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("skyblock-scorer-{}-{}", name, std::process::id()));
        fs::create_dir_all(dir.join("players")).unwrap();
        dir
    }

    #[test]
    fn test_reads_player_snapshot() {
        let dir = scratch_dir("snapshot");
        fs::write(
            dir.join("players").join("Steve.json"),
            r#"{ "skills": { "farming": { "level": 3, "experience": 400.0 } } }"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&dir);
        let snapshot = source.fetch_snapshot("Steve").unwrap();
        assert_eq!(snapshot.skills.farming.level, 3);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_reads_guild_roster() {
        let dir = scratch_dir("guild");
        fs::write(
            dir.join("guild.json"),
            r#"[{ "uuid": "a", "username": "Alex", "mining_xp": 10.0 }, { "uuid": "b", "username": "Bo" }]"#,
        )
        .unwrap();

        let players = JsonFileSource::new(&dir).fetch_guild_players().unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].mining_xp, 10.0);
        assert_eq!(players[1].mining_xp, 0.0);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_player_is_io_error() {
        let dir = scratch_dir("missing");
        let result = JsonFileSource::new(&dir).fetch_snapshot("Nobody");

        assert!(matches!(result, Err(ScoreError::Io(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_path_traversal_rejected() {
        let source = JsonFileSource::new("/tmp");
        assert!(matches!(
            source.fetch_snapshot("../etc/passwd"),
            Err(ScoreError::InvalidInput(_))
        ));
    }
}
