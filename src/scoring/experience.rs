use serde::{Deserialize, Serialize};
use crate::models::{Result, ScoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationFamily {
    General,
    Runecrafting,
    Dungeon,
    Slayer,
}

impl CalculationFamily {
    pub fn table(&self) -> &'static ExperienceTable {
        match self {
            CalculationFamily::General => &GENERAL_SKILL_EXPERIENCE,
            CalculationFamily::Runecrafting => &RUNECRAFTING_SKILL_EXPERIENCE,
            CalculationFamily::Dungeon => &DUNGEON_EXPERIENCE,
            CalculationFamily::Slayer => &SLAYER_EXPERIENCE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationFamily::General => "general",
            CalculationFamily::Runecrafting => "runecrafting",
            CalculationFamily::Dungeon => "dungeon",
            CalculationFamily::Slayer => "slayer",
        }
    }
}

/// Cumulative experience table indexed by level: `thresholds[i]` is the total
/// experience needed to reach level `i`, so `thresholds[0]` is always zero.
/// Levels never extrapolate past the last entry.
#[derive(Debug)]
pub struct ExperienceTable {
    pub family: CalculationFamily,
    thresholds: &'static [f64],
}

pub static GENERAL_SKILL_EXPERIENCE: ExperienceTable = ExperienceTable {
    family: CalculationFamily::General,
    thresholds: &[
        0.0, 50.0, 175.0, 375.0, 675.0, 1_175.0, 1_925.0, 2_925.0, 4_425.0, 6_425.0,
        9_925.0, 14_925.0, 22_425.0, 32_425.0, 47_425.0, 67_425.0, 97_425.0, 147_425.0,
        222_425.0, 322_425.0, 522_425.0, 822_425.0, 1_222_425.0, 1_722_425.0, 2_322_425.0,
        3_022_425.0, 3_822_425.0, 4_722_425.0, 5_722_425.0, 6_822_425.0, 8_022_425.0,
        9_322_425.0, 10_722_425.0, 12_222_425.0, 13_822_425.0, 15_522_425.0, 17_322_425.0,
        19_222_425.0, 21_222_425.0, 23_322_425.0, 25_522_425.0, 27_822_425.0, 30_222_425.0,
        32_722_425.0, 35_322_425.0, 38_072_425.0, 40_972_425.0, 44_072_425.0, 47_472_425.0,
        51_172_425.0, 55_172_425.0,
    ],
};

pub static RUNECRAFTING_SKILL_EXPERIENCE: ExperienceTable = ExperienceTable {
    family: CalculationFamily::Runecrafting,
    thresholds: &[
        0.0, 50.0, 150.0, 275.0, 435.0, 635.0, 885.0, 1_200.0, 1_600.0, 2_100.0, 2_725.0,
        3_510.0, 4_510.0, 5_760.0, 7_360.0, 9_360.0, 11_825.0, 14_950.0, 18_950.0, 23_950.0,
        30_150.0, 37_950.0, 47_750.0, 59_950.0, 75_250.0, 94_300.0,
    ],
};

pub static DUNGEON_EXPERIENCE: ExperienceTable = ExperienceTable {
    family: CalculationFamily::Dungeon,
    thresholds: &[
        0.0, 50.0, 125.0, 235.0, 395.0, 625.0, 955.0, 1_425.0, 2_095.0, 3_045.0, 4_385.0,
        6_275.0, 8_940.0, 12_700.0, 17_960.0, 25_340.0, 35_640.0, 50_040.0, 70_040.0,
        97_640.0, 135_640.0, 188_140.0, 259_640.0, 356_640.0, 488_640.0, 668_640.0,
        911_640.0, 1_239_640.0, 1_684_640.0, 2_284_640.0, 3_084_640.0, 4_149_640.0,
        5_559_640.0, 7_459_640.0, 9_959_640.0, 13_259_640.0, 17_559_640.0, 23_159_640.0,
        30_359_640.0, 39_559_640.0, 51_559_640.0, 66_559_640.0, 85_559_640.0, 109_559_640.0,
        139_559_640.0, 177_559_640.0, 225_559_640.0, 285_559_640.0, 360_559_640.0,
        453_559_640.0, 569_809_640.0,
    ],
};

pub static SLAYER_EXPERIENCE: ExperienceTable = ExperienceTable {
    family: CalculationFamily::Slayer,
    thresholds: &[
        0.0, 5.0, 15.0, 200.0, 1_000.0, 5_000.0, 20_000.0, 100_000.0, 400_000.0, 1_000_000.0,
    ],
};

/// Rejects experience values no table or formula is defined for.
pub(crate) fn validate_experience(experience: f64) -> Result<()> {
    if experience.is_nan() || experience < 0.0 {
        return Err(ScoreError::InvalidInput(format!(
            "experience must be a non-negative number, got {}",
            experience
        )));
    }
    if experience.is_infinite() {
        return Err(ScoreError::InvalidInput("experience must be finite".to_string()));
    }
    Ok(())
}

impl ExperienceTable {
    pub fn max_level(&self) -> u32 {
        (self.thresholds.len() - 1) as u32
    }

    pub fn max_experience(&self) -> f64 {
        self.thresholds[self.thresholds.len() - 1]
    }

    pub fn thresholds(&self) -> &'static [f64] {
        self.thresholds
    }

    /// Greatest level whose cumulative threshold is `<= experience`.
    pub fn level_for(&self, experience: f64) -> Result<u32> {
        validate_experience(experience)?;

        // thresholds[0] is zero, so at least one entry always matches
        let reached = self.thresholds.partition_point(|threshold| *threshold <= experience);
        Ok((reached - 1) as u32)
    }

    /// Level plus the fraction of the way to the next level. Capped at the
    /// max level once the table runs out.
    pub fn level_with_progress(&self, experience: f64) -> Result<f64> {
        let level = self.level_for(experience)?;
        if level >= self.max_level() {
            return Ok(level as f64);
        }

        let current = self.thresholds[level as usize];
        let next = self.thresholds[level as usize + 1];
        Ok(level as f64 + (experience - current) / (next - current))
    }

    /// Cumulative experience needed to reach `level`.
    pub fn experience_for_level(&self, level: u32) -> Result<f64> {
        self.thresholds.get(level as usize).copied().ok_or_else(|| {
            ScoreError::InvalidInput(format!(
                "level {} is past the {} table maximum of {}",
                level,
                self.family.as_str(),
                self.max_level()
            ))
        })
    }
}

pub fn level_for(experience: f64, family: CalculationFamily) -> Result<u32> {
    family.table().level_for(experience)
}
