use crate::domain::model::RecordedReport;
use crate::domain::model::Metric;
use crate::utils::error::{Result, WellnessError};
use crate::utils::validation::validate_metric;
use std::path::Path;

/// Load recorded reports from a `.csv` (header row) or `.json` (array) file.
///
/// Every metric must be within 1-10; the first bad row fails the whole load.
pub fn read_history<P: AsRef<Path>>(path: P) -> Result<Vec<RecordedReport>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let reports = match extension.as_deref() {
        Some("csv") => {
            let mut reader = csv::Reader::from_path(path)?;
            reader
                .deserialize()
                .collect::<std::result::Result<Vec<RecordedReport>, _>>()?
        }
        Some("json") => {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        _ => {
            return Err(WellnessError::InvalidConfigValueError {
                field: "input".to_string(),
                value: path.display().to_string(),
                reason: "Unsupported file extension. Allowed extensions: csv, json".to_string(),
            })
        }
    };

    for (index, report) in reports.iter().enumerate() {
        check_metrics(index + 1, report)?;
    }

    tracing::debug!("Loaded {} recorded reports from {}", reports.len(), path.display());
    Ok(reports)
}

fn check_metrics(row: usize, report: &RecordedReport) -> Result<()> {
    let metrics = [
        (Metric::MoodScore, report.mood_score),
        (Metric::EnergyLevel, report.energy_level),
        (Metric::SleepQuality, report.sleep_quality),
        (Metric::StressLevel, report.stress_level),
    ];
    for (metric, value) in metrics {
        validate_metric(&format!("record {} {}", row, metric.field_name()), value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_read_csv_history() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "report_date,mood_score,energy_level,sleep_quality,stress_level,physical_symptoms,wellness_score,ai_insights"
        )
        .unwrap();
        writeln!(file, "2024-03-01,8,7,6,3,sore knee,7.3,Rest it.").unwrap();
        writeln!(file, "2024-03-02,5,5,5,5,,5.2,").unwrap();

        let reports = read_history(file.path()).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].physical_symptoms, "sore knee");
        assert_eq!(reports[1].wellness_score, 5.2);
        assert_eq!(reports[1].ai_insights, None);
    }

    #[test]
    fn test_read_json_history() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(
            br#"[{"report_date":"2024-03-01","mood_score":8,"energy_level":7,"sleep_quality":6,"stress_level":3,"wellness_score":7.3}]"#,
        )
        .unwrap();

        let reports = read_history(file.path()).unwrap();
        assert_eq!(reports[0].mood_score, 8);
        assert_eq!(reports[0].physical_symptoms, "");
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(read_history(file.path()).is_err());
    }

    #[test]
    fn test_out_of_range_row_is_rejected() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "report_date,mood_score,energy_level,sleep_quality,stress_level,physical_symptoms,wellness_score,ai_insights"
        )
        .unwrap();
        writeln!(file, "2024-03-01,8,7,6,3,,7.3,").unwrap();
        writeln!(file, "2024-03-02,5,5,5,42,,5.2,").unwrap();

        let err = read_history(file.path()).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("record 2 stress_level"));
    }
}
