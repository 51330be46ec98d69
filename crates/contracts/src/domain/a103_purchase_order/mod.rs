use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoStatus {
    Draft,
    Submitted,
    Approved,
    Delivered,
    Cancelled,
}

impl PoStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PoStatus::Draft => "Draft",
            PoStatus::Submitted => "Submitted",
            PoStatus::Approved => "Approved",
            PoStatus::Delivered => "Delivered",
            PoStatus::Cancelled => "Cancelled",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PoStatus::Draft => "draft",
            PoStatus::Submitted => "submitted",
            PoStatus::Approved => "approved",
            PoStatus::Delivered => "delivered",
            PoStatus::Cancelled => "cancelled",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PoStatus::Draft => "badge badge--neutral",
            PoStatus::Submitted => "badge badge--info",
            PoStatus::Approved => "badge badge--success",
            PoStatus::Delivered => "badge badge--muted",
            PoStatus::Cancelled => "badge badge--error",
        }
    }

    pub const ALL: [PoStatus; 5] = [
        PoStatus::Draft,
        PoStatus::Submitted,
        PoStatus::Approved,
        PoStatus::Delivered,
        PoStatus::Cancelled,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoLine {
    pub sku: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_cost: f64,
}

impl PoLine {
    pub fn subtotal(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: Uuid,
    pub number: String,
    pub supplier_id: Uuid,
    pub supplier_name: String,
    pub status: PoStatus,
    pub lines: Vec<PoLine>,
    pub expected_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl PurchaseOrder {
    pub fn total(&self) -> f64 {
        self.lines.iter().map(PoLine::subtotal).sum()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderDraft {
    pub supplier_id: Option<Uuid>,
    pub expected_at: Option<String>,
    pub lines: Vec<PoLine>,
}

impl PurchaseOrderDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.supplier_id.is_none() {
            return Err("Supplier is required".into());
        }
        if self.lines.is_empty() {
            return Err("Order needs at least one line".into());
        }
        for line in &self.lines {
            if line.sku.trim().is_empty() {
                return Err("Every line needs a SKU".into());
            }
            if line.quantity <= 0.0 {
                return Err(format!("Quantity for {} must be positive", line.sku));
            }
        }
        Ok(())
    }
}

/// Body of the status PATCH.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoStatusChange {
    pub status: PoStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total_sums_line_subtotals() {
        let po = PurchaseOrder {
            id: Uuid::new_v4(),
            number: "PO-1042".into(),
            supplier_id: Uuid::new_v4(),
            supplier_name: "Bayside Produce".into(),
            status: PoStatus::Draft,
            lines: vec![
                PoLine {
                    sku: "TOM-01".into(),
                    name: "Tomatoes".into(),
                    quantity: 10.0,
                    unit: "kg".into(),
                    unit_cost: 2.5,
                },
                PoLine {
                    sku: "OIL-02".into(),
                    name: "Olive oil".into(),
                    quantity: 3.0,
                    unit: "L".into(),
                    unit_cost: 12.0,
                },
            ],
            expected_at: None,
            created_at: Utc::now(),
        };
        assert!((po.total() - 61.0).abs() < 1e-9);
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = PurchaseOrderDraft {
            supplier_id: Some(Uuid::new_v4()),
            expected_at: None,
            lines: vec![PoLine {
                sku: "TOM-01".into(),
                name: "Tomatoes".into(),
                quantity: 5.0,
                unit: "kg".into(),
                unit_cost: 2.5,
            }],
        };
        assert!(draft.validate().is_ok());

        draft.lines[0].quantity = 0.0;
        assert!(draft.validate().is_err());

        draft.lines.clear();
        assert!(draft.validate().is_err());
    }
}
