use crate::adapters::OpenAiCompatibleClient;
use crate::config::InsightConfig;
use crate::core::rules::{self, Rule, RULES};
use crate::core::{prompt, safety};
use crate::domain::model::{Insight, InsightSource, WellnessReport};
use crate::domain::ports::{CompletionClient, RemoteError};
use crate::utils::error::Result;
use std::time::{Duration, Instant};

/// Produces the narrative insight for a scored report.
///
/// Mode is resolved once per call: with a remote client configured, one
/// completion request is attempted; any failure (timeout, transport, status,
/// malformed or rejected body) is logged and the local rule table answers
/// instead. Nothing is cached between calls.
pub struct InsightGenerator<C: CompletionClient = OpenAiCompatibleClient> {
    remote: Option<C>,
    model: String,
    max_tokens: u32,
    timeout: Duration,
    rules: &'static [Rule],
}

impl InsightGenerator<OpenAiCompatibleClient> {
    /// Local rules only; never touches the network.
    pub fn local() -> Self {
        Self::build(None, &InsightConfig::default())
    }

    /// HTTP-backed generator when the config enables remote mode, local
    /// otherwise. A client that cannot be constructed also means local mode.
    pub fn from_config(config: &InsightConfig) -> Self {
        let remote = match OpenAiCompatibleClient::from_config(config) {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!("Remote insight client unavailable, using local rules: {}", e);
                None
            }
        };
        Self::build(remote, config)
    }
}

impl<C: CompletionClient> InsightGenerator<C> {
    /// Use an injected client. It is only called when `config` enables
    /// remote mode with a credential.
    pub fn with_client(client: C, config: &InsightConfig) -> Self {
        let remote = config.is_remote_configured().then_some(client);
        Self::build(remote, config)
    }

    fn build(remote: Option<C>, config: &InsightConfig) -> Self {
        if config.remote_enabled && config.checked_timeout().is_none() {
            tracing::warn!(
                "Remote insight timeout {}s is out of range, using local rules",
                config.timeout_seconds
            );
        }
        Self {
            remote,
            model: config.remote_model_name.clone(),
            max_tokens: config.max_tokens,
            timeout: config.timeout(),
            rules: RULES,
        }
    }

    /// Replace the local rule table.
    pub fn with_rules(mut self, rules: &'static [Rule]) -> Self {
        self.rules = rules;
        self
    }

    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// `None` when the narrative is blank and no rule fires; no remote call
    /// is made in that case.
    pub async fn generate(&self, report: &WellnessReport, wellness_score: f64) -> Option<Insight> {
        if rules::is_minimal(self.rules, report, wellness_score) {
            tracing::debug!("Nothing notable in report, skipping insight");
            return None;
        }

        if let Some(client) = &self.remote {
            match self.remote_insight(client, report, wellness_score).await {
                Ok(text) => {
                    return Some(Insight {
                        text,
                        source: InsightSource::Remote,
                    })
                }
                Err(e) => tracing::warn!("Remote insight failed, falling back to local rules: {}", e),
            }
        }

        rules::local_insight(self.rules, report, wellness_score).map(|text| Insight {
            text,
            source: InsightSource::Local,
        })
    }

    async fn remote_insight(
        &self,
        client: &C,
        report: &WellnessReport,
        wellness_score: f64,
    ) -> std::result::Result<String, RemoteError> {
        let request = prompt::build_request(report, wellness_score, &self.model, self.max_tokens);
        let started = Instant::now();

        let text = tokio::time::timeout(self.timeout, client.complete(&request))
            .await
            .map_err(|_| RemoteError::Timeout(self.timeout))??;

        tracing::debug!("Remote insight received in {:?}", started.elapsed());
        safety::screen_completion(&text)
    }
}

/// One-shot insight for raw report fields.
///
/// Fails only on out-of-range metrics; remote problems never surface.
pub async fn generate_insight(
    mood_score: u8,
    energy_level: u8,
    sleep_quality: u8,
    stress_level: u8,
    physical_symptoms: &str,
    wellness_score: f64,
    config: &InsightConfig,
) -> Result<Option<String>> {
    let report = WellnessReport::new(
        mood_score,
        energy_level,
        sleep_quality,
        stress_level,
        physical_symptoms,
    )?;
    let generator = InsightGenerator::from_config(config);
    Ok(generator
        .generate(&report, wellness_score)
        .await
        .map(|insight| insight.text))
}
