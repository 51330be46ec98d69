use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity assigned server-side from the magnitude of the price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "Info",
            AlertSeverity::Warning => "Warning",
            AlertSeverity::Critical => "Critical",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "badge badge--info",
            AlertSeverity::Warning => "badge badge--warning",
            AlertSeverity::Critical => "badge badge--error",
        }
    }

    pub const ALL: [AlertSeverity; 3] = [
        AlertSeverity::Info,
        AlertSeverity::Warning,
        AlertSeverity::Critical,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    pub id: u64,
    pub ingredient_id: Uuid,
    pub ingredient: String,
    pub supplier_name: String,
    pub old_price: f64,
    pub new_price: f64,
    pub change_percent: f64,
    pub severity: AlertSeverity,
    pub acknowledged: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistory {
    pub ingredient_id: Uuid,
    pub ingredient: String,
    pub points: Vec<PricePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_orders_by_urgency() {
        assert!(AlertSeverity::Critical > AlertSeverity::Warning);
        assert!(AlertSeverity::Warning > AlertSeverity::Info);
    }

    #[test]
    fn test_severity_serde_round_trip() {
        let json = serde_json::to_string(&AlertSeverity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let back: AlertSeverity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(back, AlertSeverity::Warning);
    }
}
