use contracts::domain::a107_voice_command::{VoiceCommand, VoiceCommandRequest};

use crate::shared::http;

pub async fn fetch_history() -> Result<Vec<VoiceCommand>, String> {
    http::get_json("/v5/voice/commands").await
}

/// Send a phrase for server-side intent parsing. The response is the full
/// command record including the parse outcome.
pub async fn submit_phrase(phrase: String) -> Result<VoiceCommand, String> {
    http::post_json("/v5/voice/commands", &VoiceCommandRequest { phrase }).await
}
