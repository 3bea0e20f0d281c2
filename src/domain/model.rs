use crate::utils::error::Result;
use crate::utils::validation::validate_metric;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four numeric dimensions of a daily report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    MoodScore,
    EnergyLevel,
    SleepQuality,
    StressLevel,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::MoodScore,
        Metric::EnergyLevel,
        Metric::SleepQuality,
        Metric::StressLevel,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            Metric::MoodScore => "mood_score",
            Metric::EnergyLevel => "energy_level",
            Metric::SleepQuality => "sleep_quality",
            Metric::StressLevel => "stress_level",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// One daily self-report. Construct through [`WellnessReport::new`] so the
/// 1-10 range of every metric holds for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellnessReport {
    mood_score: u8,
    energy_level: u8,
    sleep_quality: u8,
    stress_level: u8,
    physical_symptoms: String,
}

impl WellnessReport {
    pub fn new(
        mood_score: u8,
        energy_level: u8,
        sleep_quality: u8,
        stress_level: u8,
        physical_symptoms: impl Into<String>,
    ) -> Result<Self> {
        validate_metric(Metric::MoodScore.field_name(), mood_score)?;
        validate_metric(Metric::EnergyLevel.field_name(), energy_level)?;
        validate_metric(Metric::SleepQuality.field_name(), sleep_quality)?;
        validate_metric(Metric::StressLevel.field_name(), stress_level)?;

        Ok(Self {
            mood_score,
            energy_level,
            sleep_quality,
            stress_level,
            physical_symptoms: physical_symptoms.into(),
        })
    }

    pub fn mood_score(&self) -> u8 {
        self.mood_score
    }

    pub fn energy_level(&self) -> u8 {
        self.energy_level
    }

    pub fn sleep_quality(&self) -> u8 {
        self.sleep_quality
    }

    pub fn stress_level(&self) -> u8 {
        self.stress_level
    }

    pub fn physical_symptoms(&self) -> &str {
        &self.physical_symptoms
    }

    pub fn metric(&self, metric: Metric) -> u8 {
        match metric {
            Metric::MoodScore => self.mood_score,
            Metric::EnergyLevel => self.energy_level,
            Metric::SleepQuality => self.sleep_quality,
            Metric::StressLevel => self.stress_level,
        }
    }

    /// Narrative with surrounding whitespace removed; `None` when blank.
    pub fn narrative(&self) -> Option<&str> {
        let trimmed = self.physical_symptoms.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    Remote,
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,
    pub source: InsightSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessResult {
    pub wellness_score: f64,
    pub ai_insights: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight_source: Option<InsightSource>,
}

impl WellnessResult {
    pub fn new(wellness_score: f64, insight: Option<Insight>) -> Self {
        let (ai_insights, insight_source) = match insight {
            Some(insight) => (Some(insight.text), Some(insight.source)),
            None => (None, None),
        };
        Self {
            wellness_score,
            ai_insights,
            insight_source,
        }
    }
}

/// A report as stored by the surrounding application, used for summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedReport {
    pub report_date: NaiveDate,
    pub mood_score: u8,
    pub energy_level: u8,
    pub sleep_quality: u8,
    pub stress_level: u8,
    #[serde(default)]
    pub physical_symptoms: String,
    pub wellness_score: f64,
    #[serde(default)]
    pub ai_insights: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricAverages {
    pub mood_score: f64,
    pub energy_level: f64,
    pub sleep_quality: f64,
    pub stress_level: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessSummary {
    pub total_reports: usize,
    pub average_wellness_score: f64,
    pub averages: MetricAverages,
    pub latest_report_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_rejects_out_of_range_metrics() {
        assert!(WellnessReport::new(8, 7, 6, 3, "").is_ok());
        assert!(WellnessReport::new(0, 7, 6, 3, "").is_err());
        assert!(WellnessReport::new(8, 11, 6, 3, "").is_err());

        let err = WellnessReport::new(8, 7, 6, 42, "").unwrap_err();
        assert!(err.to_string().contains("stress_level"));
    }

    #[test]
    fn test_narrative_trims_blank_text() {
        let report = WellnessReport::new(5, 5, 5, 5, "   \n").unwrap();
        assert_eq!(report.narrative(), None);

        let report = WellnessReport::new(5, 5, 5, 5, "  sore back ").unwrap();
        assert_eq!(report.narrative(), Some("sore back"));
    }

    #[test]
    fn test_result_serializes_without_source_when_no_insight() {
        let result = WellnessResult::new(7.3, None);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["wellness_score"], 7.3);
        assert!(json["ai_insights"].is_null());
        assert!(json.get("insight_source").is_none());
    }
}
