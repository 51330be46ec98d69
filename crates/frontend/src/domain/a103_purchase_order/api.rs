use contracts::domain::a103_purchase_order::{
    PoStatus, PoStatusChange, PurchaseOrder, PurchaseOrderDraft,
};
use uuid::Uuid;

use crate::shared::http;

pub async fn fetch_orders() -> Result<Vec<PurchaseOrder>, String> {
    http::get_json("/v5/purchase-orders").await
}

pub async fn create_order(draft: &PurchaseOrderDraft) -> Result<PurchaseOrder, String> {
    http::post_json("/v5/purchase-orders", draft).await
}

pub async fn change_status(id: Uuid, status: PoStatus) -> Result<PurchaseOrder, String> {
    http::patch_json(
        &format!("/v5/purchase-orders/{}/status", id),
        &PoStatusChange { status },
    )
    .await
}
