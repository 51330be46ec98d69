//! Terminal list helpers: the optimistic enable toggle and the
//! tip-suggestion input parser.

use contracts::domain::a106_payment_terminal::PaymentTerminal;
use uuid::Uuid;

use crate::shared::list_utils::ListRecord;

impl ListRecord for PaymentTerminal {
    fn status_key(&self) -> Option<String> {
        Some(
            match self.status {
                contracts::domain::a106_payment_terminal::TerminalStatus::Online => "online",
                contracts::domain::a106_payment_terminal::TerminalStatus::Offline => "offline",
                contracts::domain::a106_payment_terminal::TerminalStatus::Maintenance => {
                    "maintenance"
                }
            }
            .to_string(),
        )
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.label, self.location)
    }
}

/// Flip `enabled` on the single matching terminal. Returns whether a
/// record was patched.
pub fn patch_enabled(terminals: &mut [PaymentTerminal], id: Uuid, enabled: bool) -> bool {
    match terminals.iter_mut().find(|t| t.id == id) {
        Some(terminal) => {
            terminal.enabled = enabled;
            true
        }
        None => false,
    }
}

/// Replace a terminal with the server's copy after a settings save.
pub fn replace_terminal(terminals: &mut [PaymentTerminal], updated: PaymentTerminal) {
    if let Some(slot) = terminals.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}

/// Parse a comma-separated tip list ("10, 15, 20") into percentages.
pub fn parse_tip_suggestions(input: &str) -> Result<Vec<u8>, String> {
    let mut tips = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let value: u8 = part
            .parse()
            .map_err(|_| format!("'{}' is not a whole number", part))?;
        if value > 100 {
            return Err("Tip suggestions are percentages (0-100)".into());
        }
        tips.push(value);
    }
    Ok(tips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a106_payment_terminal::TerminalStatus;

    fn terminal(id: Uuid, enabled: bool) -> PaymentTerminal {
        PaymentTerminal {
            id,
            label: "Front desk".into(),
            location: "Main hall".into(),
            enabled,
            status: TerminalStatus::Online,
            tip_suggestions: vec![10, 15, 20],
            surcharge_percent: 1.5,
            receipt_footer: None,
        }
    }

    #[test]
    fn test_patch_enabled_targets_single_record() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut terminals = vec![terminal(a, true), terminal(b, true)];
        assert!(patch_enabled(&mut terminals, b, false));
        assert!(terminals[0].enabled);
        assert!(!terminals[1].enabled);
    }

    #[test]
    fn test_patch_enabled_rollback() {
        let id = Uuid::new_v4();
        let mut terminals = vec![terminal(id, true)];
        patch_enabled(&mut terminals, id, false);
        patch_enabled(&mut terminals, id, true);
        assert!(terminals[0].enabled);
    }

    #[test]
    fn test_replace_terminal_keeps_position() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut terminals = vec![terminal(a, true), terminal(b, true)];
        let mut updated = terminal(b, false);
        updated.surcharge_percent = 3.0;
        replace_terminal(&mut terminals, updated);
        assert_eq!(terminals[1].id, b);
        assert_eq!(terminals[1].surcharge_percent, 3.0);
    }

    #[test]
    fn test_parse_tip_suggestions() {
        assert_eq!(parse_tip_suggestions("10, 15, 20"), Ok(vec![10, 15, 20]));
        assert_eq!(parse_tip_suggestions(""), Ok(vec![]));
        assert_eq!(parse_tip_suggestions("10,,20"), Ok(vec![10, 20]));
        assert!(parse_tip_suggestions("10, abc").is_err());
        assert!(parse_tip_suggestions("150").is_err());
    }
}
