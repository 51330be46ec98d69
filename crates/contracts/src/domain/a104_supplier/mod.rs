use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supplier scorecard as computed server-side: six 0-100 metrics plus a
/// derived letter grade. The frontend only renders it (radar + badge).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierScorecard {
    pub id: Uuid,
    pub name: String,
    pub quality: f64,
    pub delivery: f64,
    pub pricing: f64,
    pub communication: f64,
    pub accuracy: f64,
    pub responsiveness: f64,
    pub grade: String,
    pub active_orders: u32,
}

impl SupplierScorecard {
    /// Metric values in fixed axis order, matching `METRIC_LABELS`.
    pub fn metrics(&self) -> [f64; 6] {
        [
            self.quality,
            self.delivery,
            self.pricing,
            self.communication,
            self.accuracy,
            self.responsiveness,
        ]
    }

    /// Plain average of the six metrics, shown next to the server grade.
    pub fn overall(&self) -> f64 {
        self.metrics().iter().sum::<f64>() / 6.0
    }

    pub fn grade_css_class(&self) -> &'static str {
        match self.grade.as_str() {
            "A" => "badge badge--success",
            "B" => "badge badge--info",
            "C" => "badge badge--warning",
            _ => "badge badge--error",
        }
    }
}

pub const METRIC_LABELS: [&str; 6] = [
    "Quality",
    "Delivery",
    "Pricing",
    "Communication",
    "Accuracy",
    "Responsiveness",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_is_metric_average() {
        let card = SupplierScorecard {
            id: Uuid::new_v4(),
            name: "Bayside Produce".into(),
            quality: 90.0,
            delivery: 80.0,
            pricing: 70.0,
            communication: 60.0,
            accuracy: 50.0,
            responsiveness: 40.0,
            grade: "B".into(),
            active_orders: 2,
        };
        assert!((card.overall() - 65.0).abs() < 1e-9);
        assert_eq!(card.grade_css_class(), "badge badge--info");
    }
}
