//! Grouping and alert ordering for the sensor dashboard.

use contracts::domain::a108_sensor::{SensorKind, SensorReading, SensorStatus};

use crate::shared::list_utils::ListRecord;

impl ListRecord for SensorReading {
    fn status_key(&self) -> Option<String> {
        Some(self.status.key().to_string())
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.sensor_id)
    }
}

fn severity_rank(status: SensorStatus) -> u8 {
    match status {
        SensorStatus::Alert => 0,
        SensorStatus::Warning => 1,
        SensorStatus::Ok => 2,
    }
}

/// Alerting sensors first, then warnings, then healthy; alphabetical
/// within each band so the grid stays stable between polls.
pub fn sort_readings(readings: &mut [SensorReading]) {
    readings.sort_by(|a, b| {
        severity_rank(a.status)
            .cmp(&severity_rank(b.status))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Count of sensors per kind that are not in the OK state.
pub fn unhealthy_count(readings: &[SensorReading], kind: SensorKind) -> usize {
    readings
        .iter()
        .filter(|r| r.kind == kind && r.status != SensorStatus::Ok)
        .count()
}

pub fn kind_count(readings: &[SensorReading], kind: SensorKind) -> usize {
    readings.iter().filter(|r| r.kind == kind).count()
}

/// Sensors reporting a battery below the given threshold.
pub fn low_battery(readings: &[SensorReading], threshold: u8) -> Vec<&SensorReading> {
    readings
        .iter()
        .filter(|r| matches!(r.battery_percent, Some(pct) if pct < threshold))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reading(name: &str, kind: SensorKind, status: SensorStatus) -> SensorReading {
        SensorReading {
            sensor_id: format!("sns-{}", name),
            name: name.to_string(),
            kind,
            value: 4.0,
            unit: "°C".into(),
            status,
            battery_percent: Some(80),
            recorded_at: Utc.with_ymd_and_hms(2026, 8, 20, 6, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_alerts_sort_first_then_alphabetical() {
        let mut readings = vec![
            reading("Walk-in fridge", SensorKind::Temperature, SensorStatus::Ok),
            reading("Freezer B", SensorKind::Temperature, SensorStatus::Alert),
            reading("Cellar", SensorKind::Humidity, SensorStatus::Warning),
            reading("Freezer A", SensorKind::Temperature, SensorStatus::Alert),
        ];
        sort_readings(&mut readings);
        assert_eq!(readings[0].name, "Freezer A");
        assert_eq!(readings[1].name, "Freezer B");
        assert_eq!(readings[2].name, "Cellar");
        assert_eq!(readings[3].name, "Walk-in fridge");
    }

    #[test]
    fn test_per_kind_counters() {
        let readings = vec![
            reading("Freezer A", SensorKind::Temperature, SensorStatus::Alert),
            reading("Freezer B", SensorKind::Temperature, SensorStatus::Ok),
            reading("Back door", SensorKind::DoorContact, SensorStatus::Warning),
        ];
        assert_eq!(kind_count(&readings, SensorKind::Temperature), 2);
        assert_eq!(unhealthy_count(&readings, SensorKind::Temperature), 1);
        assert_eq!(unhealthy_count(&readings, SensorKind::DoorContact), 1);
        assert_eq!(unhealthy_count(&readings, SensorKind::Humidity), 0);
    }

    #[test]
    fn test_low_battery_filter() {
        let mut a = reading("Freezer A", SensorKind::Temperature, SensorStatus::Ok);
        a.battery_percent = Some(12);
        let mut b = reading("Back door", SensorKind::DoorContact, SensorStatus::Ok);
        b.battery_percent = None;
        let readings = vec![a, b];
        let low = low_battery(&readings, 20);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Freezer A");
    }
}
