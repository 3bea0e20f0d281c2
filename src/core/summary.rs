//! Averages over a user's recent reports.

use crate::domain::model::{MetricAverages, RecordedReport, WellnessSummary};

pub const DEFAULT_WINDOW: usize = 30;

/// Summarize the `window` most recent reports (by date). A `window` of zero
/// means [`DEFAULT_WINDOW`]. `None` when there are no reports.
pub fn summarize(reports: &[RecordedReport], window: usize) -> Option<WellnessSummary> {
    let window = if window == 0 { DEFAULT_WINDOW } else { window };

    let mut recent: Vec<&RecordedReport> = reports.iter().collect();
    recent.sort_by(|a, b| b.report_date.cmp(&a.report_date));
    recent.truncate(window);

    let latest = recent.first()?;
    let count = recent.len() as f64;
    let average = |value: fn(&RecordedReport) -> f64| {
        round2(recent.iter().map(|r| value(r)).sum::<f64>() / count)
    };

    Some(WellnessSummary {
        total_reports: recent.len(),
        average_wellness_score: average(|r| r.wellness_score),
        averages: MetricAverages {
            mood_score: average(|r| f64::from(r.mood_score)),
            energy_level: average(|r| f64::from(r.energy_level)),
            sleep_quality: average(|r| f64::from(r.sleep_quality)),
            stress_level: average(|r| f64::from(r.stress_level)),
        },
        latest_report_date: latest.report_date,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
