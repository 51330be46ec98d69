use contracts::domain::a106_payment_terminal::{PaymentTerminal, TerminalSettingsPatch};
use uuid::Uuid;

use crate::shared::http;

pub async fn fetch_terminals() -> Result<Vec<PaymentTerminal>, String> {
    http::get_json("/v5/payments/terminals").await
}

pub async fn update_settings(
    id: Uuid,
    patch: &TerminalSettingsPatch,
) -> Result<PaymentTerminal, String> {
    http::patch_json(&format!("/v5/payments/terminals/{}", id), patch).await
}
