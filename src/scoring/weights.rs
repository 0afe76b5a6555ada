use serde::{Deserialize, Serialize};
use crate::{
    models::{Result, WeightResult},
    scoring::experience::{
        validate_experience, DUNGEON_EXPERIENCE, GENERAL_SKILL_EXPERIENCE,
    },
};

/// Experience past which slayer weight switches to the overflow curve.
const SLAYER_WEIGHT_CAP: f64 = 1_000_000.0;
const SLAYER_OVERFLOW_POWER: f64 = 0.942;
/// Full overflow millions summed one by one before switching to the
/// closed-form tail.
const SLAYER_EXACT_CHUNKS: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillWeight {
    Mining,
    Foraging,
    Enchanting,
    Farming,
    Combat,
    Fishing,
    Alchemy,
    Taming,
}

impl SkillWeight {
    /// (exponent, overflow divider)
    fn coefficients(&self) -> (f64, f64) {
        match self {
            SkillWeight::Mining => (1.18207448, 259_634.0),
            SkillWeight::Foraging => (1.232826, 259_634.0),
            SkillWeight::Enchanting => (0.96976583, 882_758.0),
            SkillWeight::Farming => (1.217848139, 220_689.0),
            SkillWeight::Combat => (1.15797687265, 275_862.0),
            SkillWeight::Fishing => (1.406418, 88_274.0),
            SkillWeight::Alchemy => (1.0, 1_103_448.0),
            SkillWeight::Taming => (1.14744, 441_379.0),
        }
    }

    pub fn calculate_weight(&self, experience: f64) -> Result<WeightResult> {
        let (exponent, divider) = self.coefficients();
        let level = GENERAL_SKILL_EXPERIENCE.level_with_progress(experience)?;
        let max_experience = GENERAL_SKILL_EXPERIENCE.max_experience();

        let base = (level * 10.0).powf(0.5 + exponent + level / 100.0) / 1250.0;
        if experience <= max_experience {
            return Ok(WeightResult::new(base, 0.0));
        }

        let overflow = ((experience - max_experience) / divider).powf(0.968);
        Ok(WeightResult::new(base.round(), overflow))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DungeonWeight {
    Catacomb,
    Healer,
    Mage,
    Berserk,
    Archer,
    Tank,
}

impl DungeonWeight {
    fn level_multiplier(&self) -> f64 {
        match self {
            DungeonWeight::Catacomb => 0.0002149604615,
            DungeonWeight::Healer
            | DungeonWeight::Mage
            | DungeonWeight::Berserk
            | DungeonWeight::Archer
            | DungeonWeight::Tank => 0.0000045254834,
        }
    }

    pub fn calculate_weight(&self, experience: f64) -> Result<WeightResult> {
        let level = DUNGEON_EXPERIENCE.level_with_progress(experience)?;
        let max_experience = DUNGEON_EXPERIENCE.max_experience();

        let base = level.powf(4.5) * self.level_multiplier();
        if experience <= max_experience {
            return Ok(WeightResult::new(base, 0.0));
        }

        let remaining = experience - max_experience;
        let splitter = (4.0 * max_experience) / base;
        Ok(WeightResult::new(base.floor(), (remaining / splitter).powf(0.968)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlayerWeight {
    Revenant,
    Tarantula,
    Sven,
}

impl SlayerWeight {
    /// (divider, per-million modifier step)
    fn coefficients(&self) -> (f64, f64) {
        match self {
            SlayerWeight::Revenant => (2_208.0, 0.15),
            SlayerWeight::Tarantula => (2_118.0, 0.08),
            SlayerWeight::Sven => (1_962.0, 0.015),
        }
    }

    pub fn calculate_weight(&self, experience: f64) -> Result<WeightResult> {
        validate_experience(experience)?;
        let (divider, step) = self.coefficients();

        if experience <= SLAYER_WEIGHT_CAP {
            return Ok(WeightResult::new(experience / divider, 0.0));
        }

        let base = SLAYER_WEIGHT_CAP / divider;
        let remaining = experience - SLAYER_WEIGHT_CAP;
        let whole = (remaining / SLAYER_WEIGHT_CAP).floor();
        let partial = (remaining - whole * SLAYER_WEIGHT_CAP).clamp(0.0, SLAYER_WEIGHT_CAP);

        // the k-th further million is worth a little less than the one before
        let chunk_weight =
            |chunk: f64, k: f64| (chunk / (divider * (1.5 + step * k))).powf(SLAYER_OVERFLOW_POWER);

        let exact = whole.min(SLAYER_EXACT_CHUNKS);
        let mut overflow: f64 = (1..=exact as u64)
            .map(|k| chunk_weight(SLAYER_WEIGHT_CAP, k as f64))
            .sum();
        if whole > exact {
            overflow += self.overflow_tail(exact + 1.0, whole);
        }
        overflow += chunk_weight(partial, whole + 1.0);

        Ok(WeightResult::new(base, overflow))
    }

    /// Euler-Maclaurin estimate of the full-million chunk weights `from..=to`.
    fn overflow_tail(&self, from: f64, to: f64) -> f64 {
        let (divider, step) = self.coefficients();
        let p = SLAYER_OVERFLOW_POWER;
        let scale = (SLAYER_WEIGHT_CAP / divider).powf(p);

        let modifier = |k: f64| 1.5 + step * k;
        let term = |k: f64| scale * modifier(k).powf(-p);
        let slope = |k: f64| -p * step * scale * modifier(k).powf(-p - 1.0);

        let integral =
            scale * (modifier(to).powf(1.0 - p) - modifier(from).powf(1.0 - p)) / (step * (1.0 - p));
        integral + (term(from) + term(to)) / 2.0 + (slope(to) - slope(from)) / 12.0
    }
}

/// The weight curve bound to a stat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightFormula {
    Skill(SkillWeight),
    Dungeon(DungeonWeight),
    Slayer(SlayerWeight),
}

impl WeightFormula {
    pub fn weight(&self, experience: f64) -> Result<WeightResult> {
        match self {
            WeightFormula::Skill(skill) => skill.calculate_weight(experience),
            WeightFormula::Dungeon(dungeon) => dungeon.calculate_weight(experience),
            WeightFormula::Slayer(slayer) => slayer.calculate_weight(experience),
        }
    }
}
