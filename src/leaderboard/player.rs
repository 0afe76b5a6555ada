use serde::{Deserialize, Serialize};
use crate::{
    models::{Result, SkillType, StatisticsSnapshot},
    scoring::experience::CalculationFamily,
};

/// Per-player figures a guild leaderboard is sorted on. Skill levels are
/// whole levels; the `_xp` fields carry the raw experience behind them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardPlayer {
    pub uuid: String,
    pub username: String,

    pub average_skill: f64,
    pub average_skill_progress: f64,

    pub total_slayer: f64,
    pub revenant_xp: f64,
    pub tarantula_xp: f64,
    pub sven_xp: f64,

    pub mining: f64,
    pub mining_xp: f64,
    pub foraging: f64,
    pub foraging_xp: f64,
    pub enchanting: f64,
    pub enchanting_xp: f64,
    pub farming: f64,
    pub farming_xp: f64,
    pub combat: f64,
    pub combat_xp: f64,
    pub fishing: f64,
    pub fishing_xp: f64,
    pub alchemy: f64,
    pub alchemy_xp: f64,
    pub taming: f64,
    pub taming_xp: f64,
    pub carpentry: f64,
    pub carpentry_xp: f64,
    pub runecrafting: f64,
    pub runecrafting_xp: f64,
}

impl LeaderboardPlayer {
    pub fn new(uuid: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            username: username.into(),
            ..Default::default()
        }
    }

    /// Derives every leaderboard figure from a freshly fetched snapshot.
    pub fn from_snapshot(
        uuid: impl Into<String>,
        username: impl Into<String>,
        snapshot: &StatisticsSnapshot,
    ) -> Result<Self> {
        let mut player = Self::new(uuid, username);

        let general = CalculationFamily::General.table();
        let mut level_sum = 0.0;
        let mut progress_sum = 0.0;
        for skill in SkillType::AVERAGED {
            let experience = snapshot.skills.skill(skill).experience;
            level_sum += general.level_for(experience)? as f64;
            progress_sum += general.level_with_progress(experience)?;
        }
        player.average_skill = level_sum / SkillType::AVERAGED.len() as f64;
        player.average_skill_progress = progress_sum / SkillType::AVERAGED.len() as f64;

        for skill in [
            SkillType::Mining,
            SkillType::Foraging,
            SkillType::Enchanting,
            SkillType::Farming,
            SkillType::Combat,
            SkillType::Fishing,
            SkillType::Alchemy,
            SkillType::Taming,
            SkillType::Carpentry,
            SkillType::Runecrafting,
        ] {
            let family = match skill {
                SkillType::Runecrafting => CalculationFamily::Runecrafting,
                _ => CalculationFamily::General,
            };
            let experience = snapshot.skills.skill(skill).experience;
            let level = family.table().level_for(experience)? as f64;
            player.set_skill(skill, level, experience);
        }

        player.revenant_xp = snapshot.slayers.revenant.experience;
        player.tarantula_xp = snapshot.slayers.tarantula.experience;
        player.sven_xp = snapshot.slayers.sven.experience;
        player.total_slayer = snapshot.slayers.total_experience();

        Ok(player)
    }

    fn set_skill(&mut self, skill: SkillType, level: f64, experience: f64) {
        let (level_field, xp_field) = match skill {
            SkillType::Mining => (&mut self.mining, &mut self.mining_xp),
            SkillType::Foraging => (&mut self.foraging, &mut self.foraging_xp),
            SkillType::Enchanting => (&mut self.enchanting, &mut self.enchanting_xp),
            SkillType::Farming => (&mut self.farming, &mut self.farming_xp),
            SkillType::Combat => (&mut self.combat, &mut self.combat_xp),
            SkillType::Fishing => (&mut self.fishing, &mut self.fishing_xp),
            SkillType::Alchemy => (&mut self.alchemy, &mut self.alchemy_xp),
            SkillType::Taming => (&mut self.taming, &mut self.taming_xp),
            SkillType::Carpentry => (&mut self.carpentry, &mut self.carpentry_xp),
            SkillType::Runecrafting => (&mut self.runecrafting, &mut self.runecrafting_xp),
        };
        *level_field = level;
        *xp_field = experience;
    }
}
