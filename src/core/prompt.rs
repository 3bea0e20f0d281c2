use crate::domain::model::WellnessReport;
use crate::domain::ports::CompletionRequest;

pub const SYSTEM_PROMPT: &str = "You are a supportive wellness companion. \
Reply with two or three short sentences of encouraging, practical wellness observations \
based on the user's daily check-in. Do not diagnose, name medical conditions, or recommend \
medication. If symptoms sound severe or persistent, gently suggest speaking with a healthcare \
professional.";

/// Build the chat-completion request for one report.
pub fn build_request(
    report: &WellnessReport,
    wellness_score: f64,
    model: &str,
    max_tokens: u32,
) -> CompletionRequest {
    let narrative = report.narrative().unwrap_or("(none reported)");

    let user_prompt = format!(
        "Today's check-in (1-10 scales):\n\
         - Mood: {}\n\
         - Energy: {}\n\
         - Sleep quality: {}\n\
         - Stress: {} (higher means more stressed)\n\
         - Composite wellness score: {:.1}/10\n\
         - Physical symptoms: {}\n\n\
         Share a brief, supportive observation.",
        report.mood_score(),
        report.energy_level(),
        report.sleep_quality(),
        report.stress_level(),
        wellness_score,
        narrative,
    );

    CompletionRequest {
        model: model.to_string(),
        system_prompt: SYSTEM_PROMPT.to_string(),
        user_prompt,
        max_tokens,
    }
}
