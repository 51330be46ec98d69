//! Pure view-model helpers for the catering page: filter wiring and the
//! numbers behind the stat cards and calendar cells.

use chrono::NaiveDate;
use contracts::domain::a101_catering_event::{CateringEvent, EventStatus};
use std::collections::HashMap;

use crate::shared::list_utils::ListRecord;

impl ListRecord for CateringEvent {
    fn status_key(&self) -> Option<String> {
        Some(self.status.key().to_string())
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.client_name, self.venue)
    }

    fn money_amount(&self) -> f64 {
        self.total
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventStats {
    pub total: usize,
    pub confirmed: usize,
    pub revenue: f64,
    pub avg_guest_count: f64,
}

/// Stat-card numbers over the visible events. Cancelled events are excluded
/// from revenue; the average is zero-guarded.
pub fn event_stats(events: &[CateringEvent]) -> EventStats {
    let confirmed = events
        .iter()
        .filter(|e| e.status == EventStatus::Confirmed)
        .count();
    let revenue = events
        .iter()
        .filter(|e| e.status != EventStatus::Cancelled)
        .map(|e| e.total)
        .sum();
    let guests: u64 = events.iter().map(|e| e.guest_count as u64).sum();

    EventStats {
        total: events.len(),
        confirmed,
        revenue,
        avg_guest_count: guests as f64 / (events.len().max(1) as f64),
    }
}

/// Bucket events by date for the calendar cells.
pub fn events_by_date(events: &[CateringEvent]) -> HashMap<NaiveDate, Vec<CateringEvent>> {
    let mut map: HashMap<NaiveDate, Vec<CateringEvent>> = HashMap::new();
    for event in events {
        map.entry(event.event_date).or_default().push(event.clone());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn event(status: EventStatus, total: f64, guests: u32, date: &str) -> CateringEvent {
        CateringEvent {
            id: Uuid::new_v4(),
            client_name: "Client".into(),
            client_phone: None,
            venue: "Hall".into(),
            event_date: date.parse().unwrap(),
            guest_count: guests,
            package_id: None,
            total,
            deposit: 0.0,
            balance: total,
            status,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_stats_on_empty_list_have_no_nan() {
        let stats = event_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.avg_guest_count, 0.0);
        assert!(stats.avg_guest_count.is_finite());
    }

    #[test]
    fn test_revenue_excludes_cancelled() {
        let events = vec![
            event(EventStatus::Confirmed, 1000.0, 20, "2026-09-01"),
            event(EventStatus::Cancelled, 500.0, 10, "2026-09-02"),
            event(EventStatus::Quoted, 300.0, 30, "2026-09-03"),
        ];
        let stats = event_stats(&events);
        assert_eq!(stats.confirmed, 1);
        assert!((stats.revenue - 1300.0).abs() < 1e-9);
        assert!((stats.avg_guest_count - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_events_by_date_groups_same_day() {
        let events = vec![
            event(EventStatus::Confirmed, 100.0, 5, "2026-09-01"),
            event(EventStatus::Inquiry, 200.0, 8, "2026-09-01"),
            event(EventStatus::Quoted, 300.0, 12, "2026-09-05"),
        ];
        let map = events_by_date(&events);
        assert_eq!(map[&"2026-09-01".parse().unwrap()].len(), 2);
        assert_eq!(map[&"2026-09-05".parse().unwrap()].len(), 1);
    }
}
