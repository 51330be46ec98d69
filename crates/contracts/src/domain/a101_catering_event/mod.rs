use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a catering event as reported by the backend.
/// Transition legality is enforced server-side; the frontend only displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Inquiry,
    Quoted,
    Confirmed,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Inquiry => "Inquiry",
            EventStatus::Quoted => "Quoted",
            EventStatus::Confirmed => "Confirmed",
            EventStatus::Completed => "Completed",
            EventStatus::Cancelled => "Cancelled",
        }
    }

    /// Stable key used for filtering and summary buckets.
    pub fn key(&self) -> &'static str {
        match self {
            EventStatus::Inquiry => "inquiry",
            EventStatus::Quoted => "quoted",
            EventStatus::Confirmed => "confirmed",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            EventStatus::Inquiry => "badge badge--neutral",
            EventStatus::Quoted => "badge badge--info",
            EventStatus::Confirmed => "badge badge--success",
            EventStatus::Completed => "badge badge--muted",
            EventStatus::Cancelled => "badge badge--error",
        }
    }

    pub const ALL: [EventStatus; 5] = [
        EventStatus::Inquiry,
        EventStatus::Quoted,
        EventStatus::Confirmed,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CateringEvent {
    pub id: Uuid,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub venue: String,
    pub event_date: NaiveDate,
    pub guest_count: u32,
    pub package_id: Option<Uuid>,
    pub total: f64,
    pub deposit: f64,
    /// Mirrors the server's `total - deposit`; not recomputed client-side.
    pub balance: f64,
    pub status: EventStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CateringPackage {
    pub id: Uuid,
    pub name: String,
    pub price_per_guest: f64,
    pub min_guests: u32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffAssignment {
    pub id: Uuid,
    pub event_id: Uuid,
    pub staff_name: String,
    pub role: String,
}

/// Payload for create/update of an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CateringEventDraft {
    pub client_name: String,
    pub client_phone: Option<String>,
    pub venue: String,
    pub event_date: String,
    pub guest_count: u32,
    pub package_id: Option<Uuid>,
    pub total: f64,
    pub deposit: f64,
    pub status: Option<EventStatus>,
    pub notes: Option<String>,
}

impl CateringEventDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.client_name.trim().is_empty() {
            return Err("Client name is required".into());
        }
        if self.venue.trim().is_empty() {
            return Err("Venue is required".into());
        }
        if NaiveDate::parse_from_str(&self.event_date, "%Y-%m-%d").is_err() {
            return Err("Event date must be YYYY-MM-DD".into());
        }
        if self.guest_count == 0 {
            return Err("Guest count must be at least 1".into());
        }
        if self.deposit > self.total {
            return Err("Deposit cannot exceed the total".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CateringEventDraft {
        CateringEventDraft {
            client_name: "Harbor & Vine".into(),
            venue: "Main hall".into(),
            event_date: "2026-09-12".into(),
            guest_count: 40,
            total: 5200.0,
            deposit: 1000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft().validate().is_ok());

        let mut d = draft();
        d.client_name = "  ".into();
        assert!(d.validate().is_err());

        let mut d = draft();
        d.event_date = "12.09.2026".into();
        assert!(d.validate().is_err());

        let mut d = draft();
        d.deposit = 9999.0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_status_serde_uses_snake_case() {
        let json = serde_json::to_string(&EventStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
        let back: EventStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, EventStatus::Cancelled);
    }
}
