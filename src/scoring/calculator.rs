use crate::{
    models::{CalculationResult, Result, ScoreError, StatisticsSnapshot, WeightResult},
    scoring::{
        categories::{StatCategory, StatRegistry},
        experience::validate_experience,
    },
    sources::SnapshotSource,
};
use chrono::Utc;
use tracing::{debug, info, warn};

pub struct ScoreCalculator {
    registry: StatRegistry,
}

impl ScoreCalculator {
    pub fn new(registry: StatRegistry) -> Self {
        Self { registry }
    }

    pub fn with_builtin_categories() -> Result<Self> {
        Ok(Self::new(StatRegistry::builtin()?))
    }

    pub fn registry(&self) -> &StatRegistry {
        &self.registry
    }

    pub fn resolve(&self, name: &str) -> Result<&StatCategory> {
        self.registry.resolve(name).map_err(|e| {
            debug!("No stat category matches '{}'", name);
            e
        })
    }

    /// Level, progress and (when the category has one) weight for a single
    /// category of `snapshot`.
    pub fn calculate(&self, name: &str, snapshot: &StatisticsSnapshot) -> Result<CalculationResult> {
        let category = self.resolve(name)?;
        let result = Self::calculate_category(category, snapshot).map_err(|e| {
            if let ScoreError::InvalidInput(message) = &e {
                warn!("Could not calculate {}: {}", category.name, message);
            }
            e
        })?;

        debug!(
            "{} level {} ({:.2}) from {} experience",
            result.category_name, result.level, result.progress_level, result.experience
        );
        Ok(result)
    }

    fn calculate_category(
        category: &StatCategory,
        snapshot: &StatisticsSnapshot,
    ) -> Result<CalculationResult> {
        let experience = category.stat(snapshot).experience;
        let table = category.experience_table();

        let level = table.level_for(experience)?;
        let progress_level = table.level_with_progress(experience)?;
        let weight = match category.weight_formula() {
            Some(formula) => Some(formula.weight(experience)?),
            None => None,
        };

        Ok(CalculationResult {
            category_name: category.name.to_string(),
            level,
            progress_level,
            experience,
            weight: weight.map(|w| w.score),
            overflow: weight.map(|w| w.overflow),
            calculated_at: Utc::now(),
        })
    }

    /// Fetches the player's snapshot from `source` and calculates one category.
    pub fn calculate_for_player(
        &self,
        source: &dyn SnapshotSource,
        player: &str,
        name: &str,
    ) -> Result<CalculationResult> {
        // resolve first so an unknown category never costs a fetch
        self.resolve(name)?;
        let snapshot = source.fetch_snapshot(player)?;

        let result = self.calculate(name, &snapshot)?;
        info!("Calculated {} for {}", result.category_name, player);
        Ok(result)
    }

    /// Weight a category would award for `experience`.
    pub fn weight(&self, name: &str, experience: f64) -> Result<WeightResult> {
        self.resolve(name)?.calculate_weight(experience)
    }

    /// What the player's data would look like at exactly `level`, together
    /// with the recalculated result for that category.
    pub fn simulate_level(
        &self,
        name: &str,
        snapshot: &StatisticsSnapshot,
        level: u32,
    ) -> Result<(StatisticsSnapshot, CalculationResult)> {
        let category = self.resolve(name)?;
        let experience = category.experience_table().experience_for_level(level)?;

        let simulated = category.set_level_and_experience(snapshot, level, experience)?;
        let result = Self::calculate_category(category, &simulated)?;
        Ok((simulated, result))
    }

    /// Experience still missing to reach `level`; zero once it is reached.
    pub fn experience_to_level(
        &self,
        name: &str,
        snapshot: &StatisticsSnapshot,
        level: u32,
    ) -> Result<f64> {
        let category = self.resolve(name)?;
        let target = category.experience_table().experience_for_level(level)?;
        let current = category.stat(snapshot).experience;
        validate_experience(current)?;

        Ok((target - current).max(0.0))
    }

    /// Sum of every weighted category in the snapshot.
    pub fn total_weight(&self, snapshot: &StatisticsSnapshot) -> Result<WeightResult> {
        let mut total = WeightResult::ZERO;

        for category in self.registry.categories() {
            if let Some(formula) = category.weight_formula() {
                total = total + formula.weight(category.stat(snapshot).experience)?;
            }
        }

        Ok(total)
    }
}
