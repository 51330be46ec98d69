//! History ordering and success-rate stats for the voice assistant page.

use contracts::domain::a107_voice_command::{CommandOutcome, VoiceCommand};

use crate::shared::list_utils::ListRecord;

impl ListRecord for VoiceCommand {
    fn status_key(&self) -> Option<String> {
        Some(
            match self.outcome {
                CommandOutcome::Executed => "executed",
                CommandOutcome::Failed => "failed",
                CommandOutcome::Unrecognized => "unrecognized",
            }
            .to_string(),
        )
    }

    fn search_text(&self) -> String {
        let intent = self.intent.as_deref().unwrap_or("");
        format!("{} {}", self.phrase, intent)
    }
}

/// Newest interaction first.
pub fn sort_history(commands: &mut [VoiceCommand]) {
    commands.sort_by(|a, b| b.executed_at.cmp(&a.executed_at));
}

/// Prepend a freshly parsed command so it shows at the top of the feed.
pub fn push_result(commands: &mut Vec<VoiceCommand>, command: VoiceCommand) {
    commands.insert(0, command);
}

/// Fraction of commands that executed, in percent. Zero for an empty history.
pub fn success_rate(commands: &[VoiceCommand]) -> f64 {
    if commands.is_empty() {
        return 0.0;
    }
    let executed = commands
        .iter()
        .filter(|c| c.outcome == CommandOutcome::Executed)
        .count();
    executed as f64 * 100.0 / commands.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn command(id: u64, hour: u32, outcome: CommandOutcome) -> VoiceCommand {
        VoiceCommand {
            id,
            phrase: "how many covers tonight".into(),
            intent: Some("covers.count".into()),
            response_text: Some("42 covers booked".into()),
            outcome,
            executed_at: Utc.with_ymd_and_hms(2026, 8, 20, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_history_newest_first() {
        let mut history = vec![
            command(1, 9, CommandOutcome::Executed),
            command(2, 17, CommandOutcome::Executed),
            command(3, 12, CommandOutcome::Failed),
        ];
        sort_history(&mut history);
        assert_eq!(history[0].id, 2);
        assert_eq!(history[1].id, 3);
        assert_eq!(history[2].id, 1);
    }

    #[test]
    fn test_push_result_prepends() {
        let mut history = vec![command(1, 9, CommandOutcome::Executed)];
        push_result(&mut history, command(2, 10, CommandOutcome::Unrecognized));
        assert_eq!(history[0].id, 2);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_success_rate_guards_empty() {
        assert_eq!(success_rate(&[]), 0.0);
        let history = vec![
            command(1, 9, CommandOutcome::Executed),
            command(2, 10, CommandOutcome::Failed),
            command(3, 11, CommandOutcome::Executed),
            command(4, 12, CommandOutcome::Unrecognized),
        ];
        assert_eq!(success_rate(&history), 50.0);
    }
}
