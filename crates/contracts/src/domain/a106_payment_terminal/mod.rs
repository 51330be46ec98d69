use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalStatus {
    Online,
    Offline,
    Maintenance,
}

impl TerminalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TerminalStatus::Online => "Online",
            TerminalStatus::Offline => "Offline",
            TerminalStatus::Maintenance => "Maintenance",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TerminalStatus::Online => "badge badge--success",
            TerminalStatus::Offline => "badge badge--error",
            TerminalStatus::Maintenance => "badge badge--warning",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTerminal {
    pub id: Uuid,
    pub label: String,
    pub location: String,
    pub enabled: bool,
    pub status: TerminalStatus,
    pub tip_suggestions: Vec<u8>,
    pub surcharge_percent: f64,
    pub receipt_footer: Option<String>,
}

/// Partial settings update; only present fields are changed server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_suggestions: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surcharge_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_footer: Option<String>,
}

impl TerminalSettingsPatch {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(pct) = self.surcharge_percent {
            if !(0.0..=10.0).contains(&pct) {
                return Err("Surcharge must be between 0% and 10%".into());
            }
        }
        if let Some(tips) = &self.tip_suggestions {
            if tips.iter().any(|t| *t > 100) {
                return Err("Tip suggestions are percentages (0-100)".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_validation() {
        let ok = TerminalSettingsPatch {
            surcharge_percent: Some(2.5),
            tip_suggestions: Some(vec![10, 15, 20]),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let bad_pct = TerminalSettingsPatch {
            surcharge_percent: Some(25.0),
            ..Default::default()
        };
        assert!(bad_pct.validate().is_err());
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        let patch = TerminalSettingsPatch {
            enabled: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, "{\"enabled\":false}");
    }
}
