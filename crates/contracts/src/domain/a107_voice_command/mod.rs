use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandOutcome {
    Executed,
    Failed,
    Unrecognized,
}

impl CommandOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            CommandOutcome::Executed => "Executed",
            CommandOutcome::Failed => "Failed",
            CommandOutcome::Unrecognized => "Unrecognized",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CommandOutcome::Executed => "badge badge--success",
            CommandOutcome::Failed => "badge badge--error",
            CommandOutcome::Unrecognized => "badge badge--warning",
        }
    }
}

/// One voice-assistant interaction. Intent parsing happens server-side;
/// the page shows the transcript and the parse result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCommand {
    pub id: u64,
    pub phrase: String,
    pub intent: Option<String>,
    pub response_text: Option<String>,
    pub outcome: CommandOutcome,
    pub executed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceCommandRequest {
    pub phrase: String,
}
