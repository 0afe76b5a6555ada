pub mod experience;
pub mod weights;
pub mod categories;
pub mod calculator;

pub use experience::{level_for, CalculationFamily, ExperienceTable};
pub use weights::{DungeonWeight, SkillWeight, SlayerWeight, WeightFormula};
pub use categories::{StatAccessor, StatCategory, StatRegistry, StatTarget, STAT_CATEGORIES};
pub use calculator::ScoreCalculator;
