//! Filter wiring and the optimistic-acknowledge patch for price alerts.

use contracts::domain::a105_price_tracker::PriceAlert;

use crate::shared::list_utils::ListRecord;

impl ListRecord for PriceAlert {
    fn status_key(&self) -> Option<String> {
        Some(self.severity.key().to_string())
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.ingredient, self.supplier_name)
    }
}

/// Set `acknowledged` on the single matching alert, leaving every other
/// record untouched. Returns whether a record was patched.
pub fn patch_acknowledged(alerts: &mut [PriceAlert], id: u64, acknowledged: bool) -> bool {
    match alerts.iter_mut().find(|a| a.id == id) {
        Some(alert) => {
            alert.acknowledged = acknowledged;
            true
        }
        None => false,
    }
}

/// Unacknowledged alerts first, then by severity (most urgent first),
/// then newest first. Stable within equal keys.
pub fn sort_alerts(alerts: &mut [PriceAlert]) {
    alerts.sort_by(|a, b| {
        a.acknowledged
            .cmp(&b.acknowledged)
            .then(b.severity.cmp(&a.severity))
            .then(b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a105_price_tracker::AlertSeverity;
    use uuid::Uuid;

    fn alert(id: u64, severity: AlertSeverity, acknowledged: bool) -> PriceAlert {
        PriceAlert {
            id,
            ingredient_id: Uuid::from_u128(id as u128),
            ingredient: "Butter".into(),
            supplier_name: "Dairy Direct".into(),
            old_price: 4.0,
            new_price: 5.0,
            change_percent: 25.0,
            severity,
            acknowledged,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, id as u32 % 60).unwrap(),
        }
    }

    #[test]
    fn test_patch_touches_only_target_record() {
        let mut alerts = vec![
            alert(5, AlertSeverity::Info, false),
            alert(7, AlertSeverity::Critical, false),
            alert(9, AlertSeverity::Warning, false),
        ];
        assert!(patch_acknowledged(&mut alerts, 7, true));
        assert!(!alerts[0].acknowledged);
        assert!(alerts[1].acknowledged);
        assert!(!alerts[2].acknowledged);
    }

    #[test]
    fn test_patch_missing_id_is_noop() {
        let mut alerts = vec![alert(1, AlertSeverity::Info, false)];
        assert!(!patch_acknowledged(&mut alerts, 42, true));
        assert!(!alerts[0].acknowledged);
    }

    #[test]
    fn test_rollback_restores_previous_value() {
        let mut alerts = vec![alert(7, AlertSeverity::Critical, false)];
        patch_acknowledged(&mut alerts, 7, true);
        // The failure path undoes the optimistic patch
        patch_acknowledged(&mut alerts, 7, false);
        assert!(!alerts[0].acknowledged);
    }

    #[test]
    fn test_sort_puts_open_critical_first() {
        let mut alerts = vec![
            alert(1, AlertSeverity::Info, false),
            alert(2, AlertSeverity::Critical, true),
            alert(3, AlertSeverity::Critical, false),
            alert(4, AlertSeverity::Warning, false),
        ];
        sort_alerts(&mut alerts);
        assert_eq!(alerts[0].id, 3);
        assert_eq!(alerts[1].id, 4);
        assert_eq!(alerts[2].id, 1);
        assert_eq!(alerts[3].id, 2);
    }
}
