use crate::domain::model::{Metric, WellnessReport};
use crate::utils::error::{Result, WellnessError};
use crate::utils::validation::{validate_metric, Validate};
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Relative importance of each dimension in the composite score.
///
/// Stress is applied to the inverted value `11 - stress_level`, so every
/// weighted term is "higher is better". Weights must be non-negative and sum
/// to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub mood: f64,
    pub energy: f64,
    pub sleep: f64,
    pub stress: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            mood: 0.30,
            energy: 0.25,
            sleep: 0.25,
            stress: 0.20,
        }
    }
}

impl ScoreWeights {
    fn key(metric: Metric) -> &'static str {
        match metric {
            Metric::MoodScore => "mood",
            Metric::EnergyLevel => "energy",
            Metric::SleepQuality => "sleep",
            Metric::StressLevel => "stress",
        }
    }

    pub fn weight(&self, metric: Metric) -> f64 {
        match metric {
            Metric::MoodScore => self.mood,
            Metric::EnergyLevel => self.energy,
            Metric::SleepQuality => self.sleep,
            Metric::StressLevel => self.stress,
        }
    }
}

impl Validate for ScoreWeights {
    fn validate(&self) -> Result<()> {
        for metric in Metric::ALL {
            let weight = self.weight(metric);
            if !weight.is_finite() || weight < 0.0 {
                return Err(WellnessError::InvalidConfigValueError {
                    field: format!("scoring.{}", Self::key(metric)),
                    value: weight.to_string(),
                    reason: "Weight must be a non-negative number".to_string(),
                });
            }
        }

        let sum: f64 = Metric::ALL.iter().map(|m| self.weight(*m)).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WellnessError::InvalidConfigValueError {
                field: "scoring".to_string(),
                value: sum.to_string(),
                reason: "Weights must sum to 1.0".to_string(),
            });
        }
        Ok(())
    }
}

/// Pure composite-score calculator.
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    weights: ScoreWeights,
}

impl ScoreCalculator {
    pub fn new(weights: ScoreWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Weighted average of the four metrics, one decimal, within [1.0, 10.0].
    ///
    /// Inputs outside 1-10 are rejected with `InvalidInput`.
    pub fn compute(
        &self,
        mood_score: u8,
        energy_level: u8,
        sleep_quality: u8,
        stress_level: u8,
    ) -> Result<f64> {
        validate_metric(Metric::MoodScore.field_name(), mood_score)?;
        validate_metric(Metric::EnergyLevel.field_name(), energy_level)?;
        validate_metric(Metric::SleepQuality.field_name(), sleep_quality)?;
        validate_metric(Metric::StressLevel.field_name(), stress_level)?;

        Ok(self.weighted(mood_score, energy_level, sleep_quality, stress_level))
    }

    pub fn compute_report(&self, report: &WellnessReport) -> f64 {
        // 已驗證的報告不會超出範圍
        self.weighted(
            report.mood_score(),
            report.energy_level(),
            report.sleep_quality(),
            report.stress_level(),
        )
    }

    fn weighted(&self, mood_score: u8, energy_level: u8, sleep_quality: u8, stress_level: u8) -> f64 {
        let w = &self.weights;
        let raw = f64::from(mood_score) * w.mood
            + f64::from(energy_level) * w.energy
            + f64::from(sleep_quality) * w.sleep
            + f64::from(11 - stress_level) * w.stress;

        round_to_tenth(raw).clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Snap to hundredths first so float drift such as 7.249999 or 7.250001
/// lands on 7.25, then round half up to tenths.
fn round_to_tenth(raw: f64) -> f64 {
    let hundredths = (raw * 100.0).round() as i64;
    let tenths = (hundredths + 5).div_euclid(10);
    tenths as f64 / 10.0
}

/// Score a report with the default weights.
pub fn compute_wellness_score(
    mood_score: u8,
    energy_level: u8,
    sleep_quality: u8,
    stress_level: u8,
) -> Result<f64> {
    ScoreCalculator::default().compute(mood_score, energy_level, sleep_quality, stress_level)
}
