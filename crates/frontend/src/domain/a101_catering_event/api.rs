use contracts::domain::a101_catering_event::{
    CateringEvent, CateringEventDraft, CateringPackage, StaffAssignment,
};
use uuid::Uuid;

use crate::shared::http;

pub async fn fetch_events() -> Result<Vec<CateringEvent>, String> {
    http::get_json("/v5/catering/events").await
}

pub async fn fetch_packages() -> Result<Vec<CateringPackage>, String> {
    http::get_json("/v5/catering/packages").await
}

pub async fn fetch_staff() -> Result<Vec<StaffAssignment>, String> {
    http::get_json("/v5/catering/staff").await
}

pub async fn create_event(draft: &CateringEventDraft) -> Result<CateringEvent, String> {
    http::post_json("/v5/catering/events", draft).await
}

pub async fn update_event(id: Uuid, draft: &CateringEventDraft) -> Result<CateringEvent, String> {
    http::patch_json(&format!("/v5/catering/events/{}", id), draft).await
}

/// Only inquiries may be deleted; anything further along is cancelled
/// through a status change instead.
pub async fn delete_event(id: Uuid) -> Result<(), String> {
    http::delete(&format!("/v5/catering/events/{}", id)).await
}
