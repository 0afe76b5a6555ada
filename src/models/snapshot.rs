use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A (level, experience) pair for a single skill, dungeon or slayer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillStat {
    pub level: u32,
    pub experience: f64,
}

impl SkillStat {
    pub fn new(level: u32, experience: f64) -> Self {
        Self { level, experience }
    }

    pub fn set_level_and_experience(&mut self, level: u32, experience: f64) {
        self.level = level;
        self.experience = experience;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Mining,
    Foraging,
    Enchanting,
    Farming,
    Combat,
    Fishing,
    Alchemy,
    Taming,
    Carpentry,
    Runecrafting,
}

impl SkillType {
    /// Skills that count toward a player's skill average.
    pub const AVERAGED: [SkillType; 8] = [
        SkillType::Mining,
        SkillType::Foraging,
        SkillType::Enchanting,
        SkillType::Farming,
        SkillType::Combat,
        SkillType::Fishing,
        SkillType::Alchemy,
        SkillType::Taming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillType::Mining => "mining",
            SkillType::Foraging => "foraging",
            SkillType::Enchanting => "enchanting",
            SkillType::Farming => "farming",
            SkillType::Combat => "combat",
            SkillType::Fishing => "fishing",
            SkillType::Alchemy => "alchemy",
            SkillType::Taming => "taming",
            SkillType::Carpentry => "carpentry",
            SkillType::Runecrafting => "runecrafting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DungeonType {
    Catacombs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DungeonClassType {
    Healer,
    Mage,
    Berserk,
    Archer,
    Tank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlayerType {
    Revenant,
    Tarantula,
    Sven,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsResponse {
    pub mining: SkillStat,
    pub foraging: SkillStat,
    pub enchanting: SkillStat,
    pub farming: SkillStat,
    pub combat: SkillStat,
    pub fishing: SkillStat,
    pub alchemy: SkillStat,
    pub taming: SkillStat,
    pub carpentry: SkillStat,
    pub runecrafting: SkillStat,
}

impl SkillsResponse {
    pub fn skill(&self, skill: SkillType) -> &SkillStat {
        match skill {
            SkillType::Mining => &self.mining,
            SkillType::Foraging => &self.foraging,
            SkillType::Enchanting => &self.enchanting,
            SkillType::Farming => &self.farming,
            SkillType::Combat => &self.combat,
            SkillType::Fishing => &self.fishing,
            SkillType::Alchemy => &self.alchemy,
            SkillType::Taming => &self.taming,
            SkillType::Carpentry => &self.carpentry,
            SkillType::Runecrafting => &self.runecrafting,
        }
    }

    pub fn skill_mut(&mut self, skill: SkillType) -> &mut SkillStat {
        match skill {
            SkillType::Mining => &mut self.mining,
            SkillType::Foraging => &mut self.foraging,
            SkillType::Enchanting => &mut self.enchanting,
            SkillType::Farming => &mut self.farming,
            SkillType::Combat => &mut self.combat,
            SkillType::Fishing => &mut self.fishing,
            SkillType::Alchemy => &mut self.alchemy,
            SkillType::Taming => &mut self.taming,
            SkillType::Carpentry => &mut self.carpentry,
            SkillType::Runecrafting => &mut self.runecrafting,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonClasses {
    pub healer: SkillStat,
    pub mage: SkillStat,
    pub berserk: SkillStat,
    pub archer: SkillStat,
    pub tank: SkillStat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonResponse {
    pub catacombs: SkillStat,
    pub classes: DungeonClasses,
}

impl DungeonResponse {
    pub fn dungeon_from_type(&self, dungeon: DungeonType) -> &SkillStat {
        match dungeon {
            DungeonType::Catacombs => &self.catacombs,
        }
    }

    pub fn dungeon_from_type_mut(&mut self, dungeon: DungeonType) -> &mut SkillStat {
        match dungeon {
            DungeonType::Catacombs => &mut self.catacombs,
        }
    }

    pub fn class_from_type(&self, class: DungeonClassType) -> &SkillStat {
        match class {
            DungeonClassType::Healer => &self.classes.healer,
            DungeonClassType::Mage => &self.classes.mage,
            DungeonClassType::Berserk => &self.classes.berserk,
            DungeonClassType::Archer => &self.classes.archer,
            DungeonClassType::Tank => &self.classes.tank,
        }
    }

    pub fn class_from_type_mut(&mut self, class: DungeonClassType) -> &mut SkillStat {
        match class {
            DungeonClassType::Healer => &mut self.classes.healer,
            DungeonClassType::Mage => &mut self.classes.mage,
            DungeonClassType::Berserk => &mut self.classes.berserk,
            DungeonClassType::Archer => &mut self.classes.archer,
            DungeonClassType::Tank => &mut self.classes.tank,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlayerResponse {
    pub revenant: SkillStat,
    pub tarantula: SkillStat,
    pub sven: SkillStat,
}

impl SlayerResponse {
    pub fn slayer(&self, slayer: SlayerType) -> &SkillStat {
        match slayer {
            SlayerType::Revenant => &self.revenant,
            SlayerType::Tarantula => &self.tarantula,
            SlayerType::Sven => &self.sven,
        }
    }

    pub fn slayer_mut(&mut self, slayer: SlayerType) -> &mut SkillStat {
        match slayer {
            SlayerType::Revenant => &mut self.revenant,
            SlayerType::Tarantula => &mut self.tarantula,
            SlayerType::Sven => &mut self.sven,
        }
    }

    pub fn total_experience(&self) -> f64 {
        self.revenant.experience + self.tarantula.experience + self.sven.experience
    }
}

/// Everything fetched for one player in a single API round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsSnapshot {
    pub skills: SkillsResponse,
    pub dungeons: DungeonResponse,
    pub slayers: SlayerResponse,
    pub fetched_at: Option<DateTime<Utc>>,
}
