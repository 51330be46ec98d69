use contracts::domain::a105_price_tracker::{PriceAlert, PriceHistory};
use serde_json::json;
use uuid::Uuid;

use crate::shared::http;

pub async fn fetch_alerts() -> Result<Vec<PriceAlert>, String> {
    http::get_json("/v5/price-tracker/alerts").await
}

pub async fn fetch_history(ingredient_id: Uuid) -> Result<PriceHistory, String> {
    http::get_json(&format!("/v5/price-tracker/history/{}", ingredient_id)).await
}

pub async fn acknowledge_alert(id: u64) -> Result<PriceAlert, String> {
    http::patch_json(
        &format!("/v5/price-tracker/alerts/{}", id),
        &json!({ "acknowledged": true }),
    )
    .await
}
