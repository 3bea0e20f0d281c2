use thiserror::Error;

#[derive(Error, Debug)]
pub enum WellnessError {
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl WellnessError {
    /// 呼叫端是否應以 client error 回應 (例如 HTTP 400)
    pub fn is_client_error(&self) -> bool {
        matches!(self, WellnessError::InvalidInput { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WellnessError::InvalidInput { .. } => {
                "Mood, energy, sleep and stress must each be whole numbers from 1 to 10"
            }
            WellnessError::IoError(_) => "Check that the file exists and is readable",
            WellnessError::SerializationError(_) | WellnessError::CsvError(_) => {
                "Check the input file format"
            }
            WellnessError::HttpClientError(_) => "Check the TLS setup and the remote endpoint",
            WellnessError::ConfigError { .. } | WellnessError::InvalidConfigValueError { .. } => {
                "Review the configuration file and WELLNESS_* environment variables"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WellnessError>;
