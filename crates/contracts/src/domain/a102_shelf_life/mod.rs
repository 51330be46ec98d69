use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessStatus {
    Fresh,
    UseSoon,
    Expiring,
    Expired,
}

impl FreshnessStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FreshnessStatus::Fresh => "Fresh",
            FreshnessStatus::UseSoon => "Use soon",
            FreshnessStatus::Expiring => "Expiring",
            FreshnessStatus::Expired => "Expired",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FreshnessStatus::Fresh => "fresh",
            FreshnessStatus::UseSoon => "use_soon",
            FreshnessStatus::Expiring => "expiring",
            FreshnessStatus::Expired => "expired",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            FreshnessStatus::Fresh => "badge badge--success",
            FreshnessStatus::UseSoon => "badge badge--info",
            FreshnessStatus::Expiring => "badge badge--warning",
            FreshnessStatus::Expired => "badge badge--error",
        }
    }
}

/// ABC class computed server-side from cumulative consumption value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfLifeItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub received_at: NaiveDate,
    pub expires_at: NaiveDate,
    pub status: FreshnessStatus,
    pub abc_class: Option<AbcClass>,
    /// Server-computed economic order quantity, displayed as-is.
    pub eoq: Option<f64>,
    pub storage_location: Option<String>,
}

impl ShelfLifeItem {
    /// Whole days until expiry as of `today`. Negative when already expired.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.expires_at - today).num_days()
    }

    /// Fraction of the item's shelf life still remaining, clamped to 0..=1.
    /// Used for the percent bar in the list view.
    pub fn remaining_fraction(&self, today: NaiveDate) -> f64 {
        let span = (self.expires_at - self.received_at).num_days();
        if span <= 0 {
            return 0.0;
        }
        let left = self.days_left(today);
        (left as f64 / span as f64).clamp(0.0, 1.0)
    }
}

/// One point of the demand forecast; the confidence band is computed
/// server-side and only rendered here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub item_name: String,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(received: &str, expires: &str) -> ShelfLifeItem {
        ShelfLifeItem {
            id: Uuid::new_v4(),
            name: "Heavy cream".into(),
            category: "dairy".into(),
            quantity: 4.0,
            unit: "L".into(),
            received_at: received.parse().unwrap(),
            expires_at: expires.parse().unwrap(),
            status: FreshnessStatus::Fresh,
            abc_class: Some(AbcClass::A),
            eoq: None,
            storage_location: None,
        }
    }

    #[test]
    fn test_days_left() {
        let it = item("2026-08-01", "2026-08-11");
        let today: NaiveDate = "2026-08-04".parse().unwrap();
        assert_eq!(it.days_left(today), 7);

        let past: NaiveDate = "2026-08-20".parse().unwrap();
        assert_eq!(it.days_left(past), -9);
    }

    #[test]
    fn test_remaining_fraction_clamps() {
        let it = item("2026-08-01", "2026-08-11");
        let today: NaiveDate = "2026-08-06".parse().unwrap();
        assert!((it.remaining_fraction(today) - 0.5).abs() < 1e-9);

        let expired: NaiveDate = "2026-09-01".parse().unwrap();
        assert_eq!(it.remaining_fraction(expired), 0.0);

        // Zero-length shelf life must not divide by zero
        let degenerate = item("2026-08-11", "2026-08-11");
        assert_eq!(degenerate.remaining_fraction(today), 0.0);
    }
}
