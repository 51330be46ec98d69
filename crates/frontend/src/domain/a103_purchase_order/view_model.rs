//! Filter wiring and status-action helpers for the purchase-order page.

use contracts::domain::a103_purchase_order::{PoStatus, PurchaseOrder};

use crate::shared::list_utils::ListRecord;

impl ListRecord for PurchaseOrder {
    fn status_key(&self) -> Option<String> {
        Some(self.status.key().to_string())
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.number, self.supplier_name)
    }

    fn money_amount(&self) -> f64 {
        self.total()
    }
}

/// Actions the UI offers for an order in its current status. The server is
/// the authority on transition legality; this only mirrors the happy paths.
pub fn available_actions(status: PoStatus) -> Vec<(PoStatus, &'static str)> {
    match status {
        PoStatus::Draft => vec![
            (PoStatus::Submitted, "Submit"),
            (PoStatus::Cancelled, "Cancel"),
        ],
        PoStatus::Submitted => vec![
            (PoStatus::Approved, "Approve"),
            (PoStatus::Cancelled, "Cancel"),
        ],
        PoStatus::Approved => vec![
            (PoStatus::Delivered, "Mark delivered"),
            (PoStatus::Cancelled, "Cancel"),
        ],
        PoStatus::Delivered | PoStatus::Cancelled => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses_offer_no_actions() {
        assert!(available_actions(PoStatus::Delivered).is_empty());
        assert!(available_actions(PoStatus::Cancelled).is_empty());
    }

    #[test]
    fn test_draft_can_be_submitted_or_cancelled() {
        let actions = available_actions(PoStatus::Draft);
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].0, PoStatus::Submitted);
        assert_eq!(actions[1].0, PoStatus::Cancelled);
    }
}
