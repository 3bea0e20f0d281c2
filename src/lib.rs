//! Daily wellness scoring with optional language-model insights.
//!
//! A report's four 1-10 metrics are folded into a composite score by
//! [`ScoreCalculator`]; [`InsightGenerator`] then tries one remote
//! chat-completion call and falls back to a local keyword/threshold rule
//! table whenever the remote service is disabled, unconfigured or failing.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::Cli;

pub use crate::adapters::OpenAiCompatibleClient;
pub use crate::config::{toml_config::WellnessConfig, InsightConfig};
pub use crate::core::{
    engine::WellnessEngine,
    insight::{generate_insight, InsightGenerator},
    score::{compute_wellness_score, ScoreCalculator, ScoreWeights},
    summary::summarize,
};
pub use crate::domain::model::{
    Insight, InsightSource, Metric, RecordedReport, WellnessReport, WellnessResult,
    WellnessSummary,
};
pub use crate::domain::ports::{CompletionClient, CompletionRequest, RemoteError};
pub use crate::utils::error::{Result, WellnessError};
