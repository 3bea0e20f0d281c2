//! Local insight rules.
//!
//! The fallback insight is assembled from a static table of
//! `trigger -> message` rules. Keyword triggers look at the narrative,
//! threshold triggers look at the metrics or the composite score. Each rule
//! fires at most once per report and messages keep table order.

use crate::domain::model::{Metric, WellnessReport};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Pain,
    Headache,
    Fatigue,
    Sleep,
    Mood,
    Stress,
    Digestive,
    Dizziness,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Any lowercase stem found in the narrative. A stem with spaces is a
    /// phrase: its leading words match whole tokens, the last word a prefix.
    Keywords(&'static [&'static str]),
    MetricAtLeast(Metric, u8),
    MetricAtMost(Metric, u8),
    ScoreAtLeast(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub category: InsightCategory,
    pub trigger: Trigger,
    pub message: &'static str,
}

pub const INSIGHT_PREFIX: &str = "Insights based on your report:";
pub const SHORT_NARRATIVE_MESSAGE: &str = "No significant symptoms reported.";
pub const GENERIC_MESSAGE: &str = "Continue monitoring symptoms and maintain healthy habits.";

/// Narratives shorter than this (after trimming) count as "nothing notable".
pub const MIN_NARRATIVE_CHARS: usize = 10;

pub const RULES: &[Rule] = &[
    Rule {
        category: InsightCategory::Pain,
        trigger: Trigger::Keywords(&[
            "pain", "ache", "aching", "sore", "cramp", "hurt", "backache", "stomachache", "toothache",
            "earache",
        ]),
        message: "Consider rest and gentle movement. Monitor pain levels.",
    },
    Rule {
        category: InsightCategory::Headache,
        trigger: Trigger::Keywords(&["headache", "migraine"]),
        message: "Stay hydrated and take regular screen breaks.",
    },
    Rule {
        category: InsightCategory::Fatigue,
        trigger: Trigger::Keywords(&["tired", "fatigue", "exhausted", "drained", "sluggish", "weary"]),
        message: "Focus on sleep hygiene and energy management.",
    },
    Rule {
        category: InsightCategory::Sleep,
        trigger: Trigger::Keywords(&["insomnia", "sleepless", "restless", "nightmare", "awake"]),
        message: "A consistent bedtime routine may help your rest.",
    },
    Rule {
        category: InsightCategory::Mood,
        trigger: Trigger::Keywords(&[
            "sad", "feeling down", "feel down", "lonely", "irritable", "unmotivated", "upset",
        ]),
        message: "Reaching out to someone you trust or doing something you enjoy can lift your mood.",
    },
    Rule {
        category: InsightCategory::Stress,
        trigger: Trigger::Keywords(&["stress", "anxious", "anxiety", "overwhelm", "worried", "tense", "panic"]),
        message: "Practice relaxation techniques and mindfulness.",
    },
    Rule {
        category: InsightCategory::Digestive,
        trigger: Trigger::Keywords(&["nausea", "nauseous", "bloat", "stomach", "indigestion"]),
        message: "Monitor food intake and consider dietary adjustments.",
    },
    Rule {
        category: InsightCategory::Dizziness,
        trigger: Trigger::Keywords(&["dizzy", "dizziness", "lightheaded", "faint"]),
        message: "Ensure adequate hydration and rest.",
    },
    Rule {
        category: InsightCategory::Stress,
        trigger: Trigger::MetricAtLeast(Metric::StressLevel, 8),
        message: "Your stress level is high today; short breaks and slow breathing can help you reset.",
    },
    Rule {
        category: InsightCategory::Sleep,
        trigger: Trigger::MetricAtMost(Metric::SleepQuality, 3),
        message: "Your sleep quality was low; try winding down earlier tonight.",
    },
    Rule {
        category: InsightCategory::Fatigue,
        trigger: Trigger::MetricAtMost(Metric::EnergyLevel, 3),
        message: "Energy is low; light activity and regular meals can help.",
    },
    Rule {
        category: InsightCategory::Mood,
        trigger: Trigger::MetricAtMost(Metric::MoodScore, 3),
        message: "Your mood is low today; be gentle with yourself.",
    },
    Rule {
        category: InsightCategory::Positive,
        trigger: Trigger::ScoreAtLeast(8.5),
        message: "You're doing well overall; keep up the habits that got you here.",
    },
];

/// Lowercased alphanumeric words of a narrative.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// True when `phrase` occurs in `tokens`; see [`Trigger::Keywords`].
pub fn contains_phrase(tokens: &[String], phrase: &str) -> bool {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let Some((stem, leading)) = words.split_last() else {
        return false;
    };
    tokens.windows(words.len()).any(|window| {
        window
            .iter()
            .zip(leading.iter())
            .all(|(token, word)| token == word)
            && window[leading.len()].starts_with(stem)
    })
}

impl Rule {
    pub fn matches(&self, report: &WellnessReport, wellness_score: f64, tokens: &[String]) -> bool {
        match self.trigger {
            Trigger::Keywords(stems) => stems.iter().any(|stem| contains_phrase(tokens, stem)),
            Trigger::MetricAtLeast(metric, threshold) => report.metric(metric) >= threshold,
            Trigger::MetricAtMost(metric, threshold) => report.metric(metric) <= threshold,
            Trigger::ScoreAtLeast(threshold) => wellness_score >= threshold,
        }
    }
}

/// Rules that fire for a report, in table order.
pub fn matching_rules<'a>(
    rules: &'a [Rule],
    report: &WellnessReport,
    wellness_score: f64,
) -> Vec<&'a Rule> {
    let tokens = report.narrative().map(tokenize).unwrap_or_default();
    rules
        .iter()
        .filter(|rule| rule.matches(report, wellness_score, &tokens))
        .collect()
}

/// Deterministic local insight.
///
/// Returns `None` only when the narrative is blank and no rule fires.
/// Otherwise: fired messages behind [`INSIGHT_PREFIX`]; with no fired rule a
/// narrative shorter than [`MIN_NARRATIVE_CHARS`] yields
/// [`SHORT_NARRATIVE_MESSAGE`] and a longer one [`GENERIC_MESSAGE`].
pub fn local_insight(rules: &[Rule], report: &WellnessReport, wellness_score: f64) -> Option<String> {
    let fired = matching_rules(rules, report, wellness_score);

    if !fired.is_empty() {
        let messages: Vec<&str> = fired.iter().map(|rule| rule.message).collect();
        return Some(format!("{} {}", INSIGHT_PREFIX, messages.join(" ")));
    }

    let narrative = report.narrative()?;
    if narrative.chars().count() < MIN_NARRATIVE_CHARS {
        Some(SHORT_NARRATIVE_MESSAGE.to_string())
    } else {
        Some(GENERIC_MESSAGE.to_string())
    }
}

/// True when there is nothing to comment on: blank narrative and no fired
/// rule. No insight is produced, local or remote.
pub fn is_minimal(rules: &[Rule], report: &WellnessReport, wellness_score: f64) -> bool {
    report.narrative().is_none() && matching_rules(rules, report, wellness_score).is_empty()
}
