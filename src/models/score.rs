use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::ops::Add;

/// Weight earned by a single category. `overflow` is what was earned past the
/// category's last defined level.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightResult {
    pub score: f64,
    pub overflow: f64,
}

impl WeightResult {
    pub const ZERO: WeightResult = WeightResult { score: 0.0, overflow: 0.0 };

    pub fn new(score: f64, overflow: f64) -> Self {
        Self { score, overflow }
    }

    pub fn total(&self) -> f64 {
        self.score + self.overflow
    }
}

impl Add for WeightResult {
    type Output = WeightResult;

    fn add(self, other: WeightResult) -> WeightResult {
        WeightResult::new(self.score + other.score, self.overflow + other.overflow)
    }
}

/// Result of a single-category query handed back to the command layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    pub category_name: String,
    pub level: u32,
    /// Level including progress toward the next one, e.g. `23.41`.
    pub progress_level: f64,
    pub experience: f64,
    pub weight: Option<f64>,
    pub overflow: Option<f64>,
    pub calculated_at: DateTime<Utc>,
}

impl CalculationResult {
    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_addition() {
        let sum = WeightResult::new(10.0, 1.5) + WeightResult::new(2.0, 0.5);
        assert_eq!(sum, WeightResult::new(12.0, 2.0));
        assert_eq!(sum.total(), 14.0);
        assert_eq!(WeightResult::default(), WeightResult::ZERO);
    }
}
