use crate::core::rules::{contains_phrase, tokenize};
use crate::domain::ports::RemoteError;

pub const MAX_INSIGHT_CHARS: usize = 1000;

/// Phrases that read as a diagnosis or treatment advice, matched on whole
/// words with the last word as a stem.
const DIAGNOSTIC_PHRASES: &[&str] = &[
    "diagnos",
    "prescri",
    "disorder",
    "syndrome",
    "you have a condition",
    "you are suffering",
    "you re suffering",
];

/// Accept a remote completion for display, trimmed. Clinical-sounding or
/// oversized text is rejected so the caller falls back to local rules.
pub fn screen_completion(text: &str) -> Result<String, RemoteError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RemoteError::EmptyCompletion);
    }
    if trimmed.chars().count() > MAX_INSIGHT_CHARS {
        return Err(RemoteError::Rejected(format!(
            "completion longer than {} characters",
            MAX_INSIGHT_CHARS
        )));
    }

    let tokens = tokenize(trimmed);
    if let Some(phrase) = DIAGNOSTIC_PHRASES
        .iter()
        .find(|phrase| contains_phrase(&tokens, phrase))
    {
        return Err(RemoteError::Rejected(format!(
            "diagnostic language: {}",
            phrase
        )));
    }

    Ok(trimmed.to_string())
}
