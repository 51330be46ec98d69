use contracts::domain::a102_shelf_life::{ForecastPoint, ShelfLifeItem};

use crate::shared::http;

pub async fn fetch_items() -> Result<Vec<ShelfLifeItem>, String> {
    http::get_json("/v5/inventory/shelf-life").await
}

pub async fn fetch_forecast() -> Result<Vec<ForecastPoint>, String> {
    http::get_json("/v5/inventory/forecast").await
}
