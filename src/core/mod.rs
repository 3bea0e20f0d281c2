pub mod engine;
pub mod insight;
pub mod prompt;
pub mod rules;
pub mod safety;
pub mod score;
pub mod summary;

pub use crate::domain::model::{Insight, InsightSource, WellnessReport, WellnessResult};
pub use crate::domain::ports::{CompletionClient, CompletionRequest, RemoteError};
pub use crate::utils::error::Result;
