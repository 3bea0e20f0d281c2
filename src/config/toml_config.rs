use crate::config::InsightConfig;
use crate::core::score::ScoreWeights;
use crate::utils::error::{Result, WellnessError};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration:
///
/// ```toml
/// [scoring]
/// mood = 0.3
/// energy = 0.25
/// sleep = 0.25
/// stress = 0.2
///
/// [insight]
/// remote_enabled = true
/// remote_credential = "${OPENAI_API_KEY}"
/// timeout_seconds = 5
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WellnessConfig {
    pub scoring: ScoreWeights,
    pub insight: InsightConfig,
}

impl WellnessConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WellnessError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: Self =
            toml::from_str(&processed_content).map_err(|e| WellnessError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;

        // 未替換的 ${VAR} 代表環境變數不存在
        if config
            .insight
            .remote_credential
            .as_deref()
            .is_some_and(|key| key.starts_with("${"))
        {
            tracing::warn!("Remote credential placeholder was not resolved; remote insights disabled");
            config.insight.remote_credential = None;
        }

        Ok(config)
    }

    /// 替換環境變數 (例如 ${OPENAI_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WellnessError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for WellnessConfig {
    fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        self.insight.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = WellnessConfig::from_toml_str("").unwrap();
        assert_eq!(config.scoring, ScoreWeights::default());
        assert!(!config.insight.is_remote_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[scoring]
mood = 0.4
energy = 0.2
sleep = 0.2
stress = 0.2

[insight]
remote_enabled = true
remote_credential = "sk-inline"
remote_model_name = "gpt-4o"
timeout_seconds = 5.5
"#;

        let config = WellnessConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.scoring.mood, 0.4);
        assert!(config.insight.is_remote_configured());
        assert_eq!(config.insight.remote_model_name, "gpt-4o");
        assert_eq!(config.insight.timeout_seconds, 5.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WELLNESS_TEST_TOML_KEY", "sk-from-env");

        let toml_content = r#"
[insight]
remote_enabled = true
remote_credential = "${WELLNESS_TEST_TOML_KEY}"
"#;

        let config = WellnessConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.insight.credential(), Some("sk-from-env"));

        std::env::remove_var("WELLNESS_TEST_TOML_KEY");
    }

    #[test]
    fn test_unresolved_credential_disables_remote() {
        let toml_content = r#"
[insight]
remote_enabled = true
remote_credential = "${WELLNESS_TEST_TOML_MISSING_KEY}"
"#;

        let config = WellnessConfig::from_toml_str(toml_content).unwrap();
        assert!(!config.insight.is_remote_configured());
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[scoring]
mood = 0.9
energy = 0.25
sleep = 0.25
stress = 0.2
"#;

        let config = WellnessConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[insight]\ntimeout_seconds = 3\n")
            .unwrap();

        let config = WellnessConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.insight.timeout_seconds, 3.0);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = WellnessConfig::from_toml_str("[insight\n").unwrap_err();
        assert!(matches!(err, WellnessError::ConfigError { .. }));
    }
}
