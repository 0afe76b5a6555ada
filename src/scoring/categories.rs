use crate::{
    models::{
        DungeonClassType, DungeonType, Result, ScoreError, SkillStat, SkillType, SlayerType,
        StatisticsSnapshot, WeightResult,
    },
    scoring::{
        experience::{validate_experience, CalculationFamily, ExperienceTable},
        weights::{DungeonWeight, SkillWeight, SlayerWeight, WeightFormula},
    },
    utils::AliasIndex,
};

/// Read/write access to one (level, experience) pair inside a snapshot.
pub trait StatAccessor {
    fn stat<'a>(&self, snapshot: &'a StatisticsSnapshot) -> &'a SkillStat;

    fn stat_mut<'a>(&self, snapshot: &'a mut StatisticsSnapshot) -> &'a mut SkillStat;
}

impl StatAccessor for SkillType {
    fn stat<'a>(&self, snapshot: &'a StatisticsSnapshot) -> &'a SkillStat {
        snapshot.skills.skill(*self)
    }

    fn stat_mut<'a>(&self, snapshot: &'a mut StatisticsSnapshot) -> &'a mut SkillStat {
        snapshot.skills.skill_mut(*self)
    }
}

impl StatAccessor for DungeonType {
    fn stat<'a>(&self, snapshot: &'a StatisticsSnapshot) -> &'a SkillStat {
        snapshot.dungeons.dungeon_from_type(*self)
    }

    fn stat_mut<'a>(&self, snapshot: &'a mut StatisticsSnapshot) -> &'a mut SkillStat {
        snapshot.dungeons.dungeon_from_type_mut(*self)
    }
}

impl StatAccessor for DungeonClassType {
    fn stat<'a>(&self, snapshot: &'a StatisticsSnapshot) -> &'a SkillStat {
        snapshot.dungeons.class_from_type(*self)
    }

    fn stat_mut<'a>(&self, snapshot: &'a mut StatisticsSnapshot) -> &'a mut SkillStat {
        snapshot.dungeons.class_from_type_mut(*self)
    }
}

impl StatAccessor for SlayerType {
    fn stat<'a>(&self, snapshot: &'a StatisticsSnapshot) -> &'a SkillStat {
        snapshot.slayers.slayer(*self)
    }

    fn stat_mut<'a>(&self, snapshot: &'a mut StatisticsSnapshot) -> &'a mut SkillStat {
        snapshot.slayers.slayer_mut(*self)
    }
}

/// Where in the snapshot a category's stat is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatTarget {
    Skill(SkillType),
    Dungeon(DungeonType),
    DungeonClass(DungeonClassType),
    Slayer(SlayerType),
}

impl StatTarget {
    fn accessor(&self) -> &dyn StatAccessor {
        match self {
            StatTarget::Skill(skill) => skill,
            StatTarget::Dungeon(dungeon) => dungeon,
            StatTarget::DungeonClass(class) => class,
            StatTarget::Slayer(slayer) => slayer,
        }
    }
}

/// Ties a category name to where its (level, experience) pair lives in a
/// [`StatisticsSnapshot`] and the experience table that converts it to a
/// level. The weight curve is optional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCategory {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub family: CalculationFamily,
    pub target: StatTarget,
    weight: Option<WeightFormula>,
}

impl StatCategory {
    pub const fn new(
        name: &'static str,
        aliases: &'static [&'static str],
        family: CalculationFamily,
        target: StatTarget,
        weight: Option<WeightFormula>,
    ) -> Self {
        Self { name, aliases, family, target, weight }
    }

    /// Current (level, experience) for this category.
    pub fn stat(&self, snapshot: &StatisticsSnapshot) -> SkillStat {
        *self.target.accessor().stat(snapshot)
    }

    /// Returns a copy of `snapshot` with this category's stat replaced. The
    /// input is left untouched.
    pub fn set_level_and_experience(
        &self,
        snapshot: &StatisticsSnapshot,
        level: u32,
        experience: f64,
    ) -> Result<StatisticsSnapshot> {
        validate_experience(experience)?;

        let mut updated = snapshot.clone();
        self.target
            .accessor()
            .stat_mut(&mut updated)
            .set_level_and_experience(level, experience);
        Ok(updated)
    }

    pub fn experience_table(&self) -> &'static ExperienceTable {
        self.family.table()
    }

    pub fn weight_formula(&self) -> Option<&WeightFormula> {
        self.weight.as_ref()
    }

    pub fn calculate_weight(&self, experience: f64) -> Result<WeightResult> {
        match &self.weight {
            Some(formula) => formula.weight(experience),
            None => Err(ScoreError::MissingFormula(self.name.to_string())),
        }
    }
}

const fn skill(
    name: &'static str,
    aliases: &'static [&'static str],
    skill: SkillType,
    weight: SkillWeight,
) -> StatCategory {
    StatCategory::new(
        name,
        aliases,
        CalculationFamily::General,
        StatTarget::Skill(skill),
        Some(WeightFormula::Skill(weight)),
    )
}

const fn dungeon_class(
    name: &'static str,
    aliases: &'static [&'static str],
    class: DungeonClassType,
    weight: DungeonWeight,
) -> StatCategory {
    StatCategory::new(
        name,
        aliases,
        CalculationFamily::Dungeon,
        StatTarget::DungeonClass(class),
        Some(WeightFormula::Dungeon(weight)),
    )
}

const fn slayer(
    name: &'static str,
    aliases: &'static [&'static str],
    slayer: SlayerType,
    weight: SlayerWeight,
) -> StatCategory {
    StatCategory::new(
        name,
        aliases,
        CalculationFamily::Slayer,
        StatTarget::Slayer(slayer),
        Some(WeightFormula::Slayer(weight)),
    )
}

pub static STAT_CATEGORIES: &[StatCategory] = &[
    skill("Mining", &["mine", "mining"], SkillType::Mining, SkillWeight::Mining),
    skill("Foraging", &["tree", "forage", "foraging"], SkillType::Foraging, SkillWeight::Foraging),
    skill("Enchanting", &["enchant", "enchanting"], SkillType::Enchanting, SkillWeight::Enchanting),
    skill("Farming", &["farm", "farming"], SkillType::Farming, SkillWeight::Farming),
    skill("Combat", &["fight", "combat"], SkillType::Combat, SkillWeight::Combat),
    skill("Fishing", &["fish", "fishing"], SkillType::Fishing, SkillWeight::Fishing),
    skill("Alchemy", &["alch", "alchemy"], SkillType::Alchemy, SkillWeight::Alchemy),
    skill("Taming", &["pet", "pets", "tame", "taming"], SkillType::Taming, SkillWeight::Taming),
    StatCategory::new(
        "Carpentry",
        &["craft", "carpentry"],
        CalculationFamily::General,
        StatTarget::Skill(SkillType::Carpentry),
        None,
    ),
    StatCategory::new(
        "Runecrafting",
        &["rune", "runecraft", "runecrafting"],
        CalculationFamily::Runecrafting,
        StatTarget::Skill(SkillType::Runecrafting),
        None,
    ),
    StatCategory::new(
        "Catacomb",
        &["ca", "cata", "catacomb", "catacombs"],
        CalculationFamily::Dungeon,
        StatTarget::Dungeon(DungeonType::Catacombs),
        Some(WeightFormula::Dungeon(DungeonWeight::Catacomb)),
    ),
    dungeon_class("Healer", &["heal", "healer"], DungeonClassType::Healer, DungeonWeight::Healer),
    dungeon_class("Mage", &["mage", "mages"], DungeonClassType::Mage, DungeonWeight::Mage),
    dungeon_class(
        "Berserker",
        &["warrior", "berserk", "berserker"],
        DungeonClassType::Berserk,
        DungeonWeight::Berserk,
    ),
    dungeon_class("Archer", &["bow", "archer"], DungeonClassType::Archer, DungeonWeight::Archer),
    dungeon_class("Tank", &["tank"], DungeonClassType::Tank, DungeonWeight::Tank),
    slayer("Revenant", &["revenant", "rev", "zombie"], SlayerType::Revenant, SlayerWeight::Revenant),
    slayer("Tarantula", &["tarantula", "tara", "spider"], SlayerType::Tarantula, SlayerWeight::Tarantula),
    slayer("Sven", &["sven", "wolf", "dog"], SlayerType::Sven, SlayerWeight::Sven),
];

/// Case-insensitive alias lookup over a fixed set of stat categories.
#[derive(Debug, Clone)]
pub struct StatRegistry {
    categories: Vec<StatCategory>,
    index: AliasIndex,
}

impl StatRegistry {
    /// Fails if two categories claim the same alias.
    pub fn new(categories: Vec<StatCategory>) -> Result<Self> {
        let index = AliasIndex::build(
            categories.iter().map(|category| (category.name, category.aliases)),
        )?;

        Ok(Self { categories, index })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(STAT_CATEGORIES.to_vec())
    }

    pub fn resolve(&self, name: &str) -> Result<&StatCategory> {
        self.index
            .lookup(name)
            .map(|position| &self.categories[position])
            .ok_or_else(|| ScoreError::NotFound(name.to_string()))
    }

    pub fn categories(&self) -> &[StatCategory] {
        &self.categories
    }
}
