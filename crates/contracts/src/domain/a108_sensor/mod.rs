use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Temperature,
    Humidity,
    DoorContact,
}

impl SensorKind {
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "Temperature",
            SensorKind::Humidity => "Humidity",
            SensorKind::DoorContact => "Door contact",
        }
    }

    pub const ALL: [SensorKind; 3] = [
        SensorKind::Temperature,
        SensorKind::Humidity,
        SensorKind::DoorContact,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorStatus {
    Ok,
    Warning,
    Alert,
}

impl SensorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SensorStatus::Ok => "OK",
            SensorStatus::Warning => "Warning",
            SensorStatus::Alert => "Alert",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SensorStatus::Ok => "ok",
            SensorStatus::Warning => "warning",
            SensorStatus::Alert => "alert",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SensorStatus::Ok => "badge badge--success",
            SensorStatus::Warning => "badge badge--warning",
            SensorStatus::Alert => "badge badge--error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub sensor_id: String,
    pub name: String,
    pub kind: SensorKind,
    pub value: f64,
    pub unit: String,
    pub status: SensorStatus,
    pub battery_percent: Option<u8>,
    pub recorded_at: DateTime<Utc>,
}
