use crate::config::toml_config::WellnessConfig;
use crate::core::insight::InsightGenerator;
use crate::core::score::ScoreCalculator;
use crate::domain::model::{WellnessReport, WellnessResult};
use crate::domain::ports::CompletionClient;
use crate::utils::error::Result;

/// Scores a report and attaches an insight.
pub struct WellnessEngine<C: CompletionClient> {
    calculator: ScoreCalculator,
    generator: InsightGenerator<C>,
}

impl WellnessEngine<crate::adapters::OpenAiCompatibleClient> {
    pub fn from_config(config: &WellnessConfig) -> Result<Self> {
        let calculator = ScoreCalculator::new(config.scoring)?;
        let generator = InsightGenerator::from_config(&config.insight);
        Ok(Self::new(calculator, generator))
    }
}

impl<C: CompletionClient> WellnessEngine<C> {
    pub fn new(calculator: ScoreCalculator, generator: InsightGenerator<C>) -> Self {
        Self {
            calculator,
            generator,
        }
    }

    pub async fn evaluate(&self, report: &WellnessReport) -> WellnessResult {
        let wellness_score = self.calculator.compute_report(report);
        tracing::debug!("Computed wellness score {:.1}", wellness_score);

        let insight = self.generator.generate(report, wellness_score).await;
        match &insight {
            Some(insight) => tracing::info!(
                "Report scored {:.1} with {:?} insight",
                wellness_score,
                insight.source
            ),
            None => tracing::info!("Report scored {:.1} without insight", wellness_score),
        }

        WellnessResult::new(wellness_score, insight)
    }

    /// Validate raw fields, then [`evaluate`](Self::evaluate).
    pub async fn evaluate_fields(
        &self,
        mood_score: u8,
        energy_level: u8,
        sleep_quality: u8,
        stress_level: u8,
        physical_symptoms: &str,
    ) -> Result<WellnessResult> {
        let report = WellnessReport::new(
            mood_score,
            energy_level,
            sleep_quality,
            stress_level,
            physical_symptoms,
        )?;
        Ok(self.evaluate(&report).await)
    }
}
