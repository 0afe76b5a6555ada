use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::{
    leaderboard::player::LeaderboardPlayer,
    models::{Result, ScoreError},
    utils::AliasIndex,
};

pub type PlayerStatFn = fn(&LeaderboardPlayer) -> f64;

/// A leaderboard carries up to three extractors over a [`LeaderboardPlayer`]:
/// the value shown, the experience shown next to it, and the value players
/// are sorted on. Skills sort on raw experience rather than on level so that
/// players sharing a level still get a meaningful order.
#[derive(Clone, Copy)]
pub struct LeaderboardCategory {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    stat: Option<PlayerStatFn>,
    exp: Option<PlayerStatFn>,
    order: Option<PlayerStatFn>,
}

impl LeaderboardCategory {
    /// Sorted on `stat` unless [`ordered_by`](Self::ordered_by) says otherwise.
    pub const fn new(
        name: &'static str,
        aliases: &'static [&'static str],
        stat: PlayerStatFn,
        exp: Option<PlayerStatFn>,
    ) -> Self {
        Self { name, aliases, stat: Some(stat), exp, order: Some(stat) }
    }

    /// The guild overview: no per-player value at all.
    pub const fn overview(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, aliases, stat: None, exp: None, order: None }
    }

    pub const fn ordered_by(mut self, order: PlayerStatFn) -> Self {
        self.order = Some(order);
        self
    }

    pub fn is_overview(&self) -> bool {
        self.stat.is_none() && self.order.is_none()
    }

    pub fn stat_value(&self, player: &LeaderboardPlayer) -> Option<f64> {
        self.stat.map(|f| f(player))
    }

    pub fn exp_value(&self, player: &LeaderboardPlayer) -> Option<f64> {
        self.exp.map(|f| f(player))
    }

    pub fn order_value(&self, player: &LeaderboardPlayer) -> Option<f64> {
        self.order.or(self.stat).map(|f| f(player))
    }

    /// Sorts players best first. Players with equal sort values keep their
    /// input order.
    pub fn rank(&self, mut players: Vec<LeaderboardPlayer>) -> Result<Vec<LeaderboardPlayer>> {
        let order = self.order.or(self.stat).ok_or_else(|| ScoreError::UnsupportedCategory {
            category: self.name.to_string(),
            operation: "rank".to_string(),
        })?;

        // sort_by is stable
        players.sort_by(|a, b| order(b).total_cmp(&order(a)));
        Ok(players)
    }

    /// Ranks `players` and keeps the first `limit` rows.
    pub fn leaderboard(&self, players: Vec<LeaderboardPlayer>, limit: usize) -> Result<Leaderboard> {
        let ranked = self.rank(players)?;

        let entries = ranked
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, player)| LeaderboardEntry {
                position: index + 1,
                uuid: player.uuid.clone(),
                username: player.username.clone(),
                stat_value: self.stat_value(player).unwrap_or_default(),
                exp_value: self.exp_value(player),
            })
            .collect();

        Ok(Leaderboard { category: self.name.to_string(), entries })
    }
}

impl fmt::Debug for LeaderboardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeaderboardCategory")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("overview", &self.is_overview())
            .finish()
    }
}

impl PartialEq for LeaderboardCategory {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub position: usize,
    pub uuid: String,
    pub username: String,
    pub stat_value: f64,
    pub exp_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub category: String,
    pub entries: Vec<LeaderboardEntry>,
}

const fn skill(
    name: &'static str,
    aliases: &'static [&'static str],
    level: PlayerStatFn,
    experience: PlayerStatFn,
) -> LeaderboardCategory {
    LeaderboardCategory::new(name, aliases, level, Some(experience)).ordered_by(experience)
}

pub static LEADERBOARD_CATEGORIES: &[LeaderboardCategory] = &[
    LeaderboardCategory::overview("Overview", &["guild", "overview", "view", "metrics", "metric"]),
    LeaderboardCategory::new(
        "Average Skill",
        &["skills", "skill"],
        |p| p.average_skill_progress,
        Some(|p| p.average_skill),
    ),
    LeaderboardCategory::new("Total Slayer", &["slayers", "slayer"], |p| p.total_slayer, None),
    LeaderboardCategory::new("Revenant Slayer", &["revenant", "rev", "zombie"], |p| p.revenant_xp, None),
    LeaderboardCategory::new("Tarantula Slayer", &["tarantula", "tara", "spider"], |p| p.tarantula_xp, None),
    LeaderboardCategory::new("Sven Slayer", &["sven", "wolf", "dog"], |p| p.sven_xp, None),
    skill("Mining", &["mining", "mine", "ore"], |p| p.mining, |p| p.mining_xp),
    skill("Foraging", &["foraging", "forage", "tree"], |p| p.foraging, |p| p.foraging_xp),
    skill("Enchanting", &["enchanting", "enchant"], |p| p.enchanting, |p| p.enchanting_xp),
    skill("Farming", &["farming", "farm"], |p| p.farming, |p| p.farming_xp),
    skill("Combat", &["combat", "fight"], |p| p.combat, |p| p.combat_xp),
    skill("Fishing", &["fishing", "fish"], |p| p.fishing, |p| p.fishing_xp),
    skill("Alchemy", &["alchemy", "pot"], |p| p.alchemy, |p| p.alchemy_xp),
    skill("Taming", &["taming", "tame", "pet"], |p| p.taming, |p| p.taming_xp),
    skill("Carpentry", &["carpentry", "craft"], |p| p.carpentry, |p| p.carpentry_xp),
    skill("Runecrafting", &["runecrafting", "rune"], |p| p.runecrafting, |p| p.runecrafting_xp),
];

/// Leaderboard name lookup. Kept apart from the stat registry: the same
/// spelling may mean different things to the two.
#[derive(Debug, Clone)]
pub struct LeaderboardRegistry {
    categories: Vec<LeaderboardCategory>,
    index: AliasIndex,
}

impl LeaderboardRegistry {
    pub fn new(categories: Vec<LeaderboardCategory>) -> Result<Self> {
        let index = AliasIndex::build(
            categories.iter().map(|category| (category.name, category.aliases)),
        )?;

        Ok(Self { categories, index })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(LEADERBOARD_CATEGORIES.to_vec())
    }

    pub fn resolve(&self, name: &str) -> Result<&LeaderboardCategory> {
        match self.index.lookup(name) {
            Some(position) => Ok(&self.categories[position]),
            None => {
                debug!("No leaderboard category matches '{}'", name);
                Err(ScoreError::NotFound(name.to_string()))
            }
        }
    }

    pub fn categories(&self) -> &[LeaderboardCategory] {
        &self.categories
    }

    pub fn rank(&self, name: &str, players: Vec<LeaderboardPlayer>) -> Result<Vec<LeaderboardPlayer>> {
        self.resolve(name)?.rank(players)
    }

    pub fn leaderboard(
        &self,
        name: &str,
        players: Vec<LeaderboardPlayer>,
        limit: usize,
    ) -> Result<Leaderboard> {
        let category = self.resolve(name)?;
        let player_count = players.len();

        let leaderboard = category.leaderboard(players, limit)?;
        info!(
            "Ranked {} players on {} ({} shown)",
            player_count,
            leaderboard.category,
            leaderboard.entries.len()
        );
        Ok(leaderboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LeaderboardRegistry {
        LeaderboardRegistry::builtin().unwrap()
    }

    fn miner(name: &str, xp: f64) -> LeaderboardPlayer {
        let mut player = LeaderboardPlayer::new(format!("{}-uuid", name), name);
        player.mining_xp = xp;
        player
    }

    #[test]
    fn test_ties_keep_input_order() {
        let players = vec![miner("player1", 50.0), miner("player2", 100.0), miner("player3", 100.0)];

        let ranked = registry().rank("mining", players).unwrap();
        let names: Vec<&str> = ranked.iter().map(|p| p.username.as_str()).collect();

        assert_eq!(names, vec!["player2", "player3", "player1"]);
    }

    #[test]
    fn test_overview_resolves_but_cannot_rank() {
        let registry = registry();
        let overview = registry.resolve("overview").unwrap();

        assert!(overview.is_overview());
        assert!(matches!(
            overview.rank(vec![miner("a", 1.0)]),
            Err(ScoreError::UnsupportedCategory { .. })
        ));
        assert!(matches!(
            registry.leaderboard("guild", vec![], 10),
            Err(ScoreError::UnsupportedCategory { .. })
        ));
    }

    #[test]
    fn test_skills_sort_on_experience_not_level() {
        let mut low_xp = miner("low", 1_000.0);
        low_xp.mining = 7.0;
        let mut high_xp = miner("high", 1_100.0);
        high_xp.mining = 7.0;

        let category = *registry().resolve("ore").unwrap();
        assert_eq!(category.order_value(&high_xp), Some(1_100.0));
        assert_eq!(category.stat_value(&high_xp), Some(7.0));

        let ranked = category.rank(vec![low_xp, high_xp]).unwrap();
        assert_eq!(ranked[0].username, "high");
    }

    #[test]
    fn test_slayer_sorts_on_stat_and_has_no_exp() {
        let mut first = LeaderboardPlayer::new("1", "first");
        first.total_slayer = 10.0;
        let mut second = LeaderboardPlayer::new("2", "second");
        second.total_slayer = 20.0;

        let registry = registry();
        let category = registry.resolve("slayers").unwrap();
        assert_eq!(category.exp_value(&first), None);
        assert_eq!(category.order_value(&first), category.stat_value(&first));

        let board = registry.leaderboard("slayer", vec![first, second], 10).unwrap();
        assert_eq!(board.category, "Total Slayer");
        assert_eq!(board.entries[0].username, "second");
        assert_eq!(board.entries[0].position, 1);
        assert_eq!(board.entries[1].exp_value, None);
    }

    #[test]
    fn test_average_skill_sorts_on_progress() {
        let mut a = LeaderboardPlayer::new("a", "a");
        a.average_skill = 20.0;
        a.average_skill_progress = 20.2;
        let mut b = LeaderboardPlayer::new("b", "b");
        b.average_skill = 20.0;
        b.average_skill_progress = 20.9;

        let board = registry().leaderboard("skills", vec![a, b], 10).unwrap();
        assert_eq!(board.entries[0].username, "b");
        assert_eq!(board.entries[0].stat_value, 20.9);
        assert_eq!(board.entries[0].exp_value, Some(20.0));
    }

    #[test]
    fn test_leaderboard_truncates_to_limit() {
        let players = (0..5).map(|i| miner(&format!("p{}", i), i as f64)).collect();
        let board = registry().leaderboard("mine", players, 3).unwrap();

        assert_eq!(board.entries.len(), 3);
        assert_eq!(board.entries[0].username, "p4");
        assert_eq!(board.entries[2].position, 3);
    }

    #[test]
    fn test_alias_resolution() {
        let registry = registry();
        for category in LEADERBOARD_CATEGORIES {
            for alias in category.aliases {
                assert_eq!(registry.resolve(&alias.to_uppercase()).unwrap().name, category.name);
            }
        }
        assert!(matches!(registry.resolve("catacombs"), Err(ScoreError::NotFound(_))));
    }
}
