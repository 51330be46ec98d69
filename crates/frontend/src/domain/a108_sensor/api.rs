use contracts::domain::a108_sensor::SensorReading;

use crate::shared::http;

pub async fn fetch_readings() -> Result<Vec<SensorReading>, String> {
    http::get_json("/v5/sensors/readings").await
}
