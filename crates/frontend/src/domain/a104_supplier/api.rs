use contracts::domain::a104_supplier::SupplierScorecard;

use crate::shared::http;

pub async fn fetch_scorecards() -> Result<Vec<SupplierScorecard>, String> {
    http::get_json("/v5/suppliers/scorecards").await
}
