//! Authenticated JSON calls against the REST API.
//!
//! Every helper attaches the persisted bearer token, collapses transport
//! failures, non-2xx responses and a missing token into a single display
//! string, and handles 401 by clearing the session and sending the browser
//! back to the login route.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

const FALLBACK_MESSAGE: &str = "Request failed. Please try again.";

/// Structured error body the backend sends for 4xx/5xx.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

/// Pick the most specific message available: the structured `detail` field,
/// then `message`, then a hardcoded fallback.
pub fn display_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(detail) = parsed.detail.filter(|s| !s.trim().is_empty()) {
            return detail;
        }
        if let Some(message) = parsed.message.filter(|s| !s.trim().is_empty()) {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('<') {
        FALLBACK_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}

fn redirect_to_login() {
    if let Some(w) = web_sys::window() {
        let _ = w.location().set_href("/login");
    }
}

fn bearer() -> Result<String, String> {
    match storage::get_token() {
        Some(token) => Ok(format!("Bearer {}", token)),
        None => {
            redirect_to_login();
            Err("Not signed in".to_string())
        }
    }
}

async fn check(response: Response) -> Result<Response, String> {
    if response.status() == 401 {
        storage::clear_token();
        redirect_to_login();
        return Err("Session expired".to_string());
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(display_message(&body));
    }
    Ok(response)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &bearer()?)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::patch(&api_url(path))
        .header("Authorization", &bearer()?)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check(response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_prefers_detail() {
        let body = r#"{"detail":"Supplier not found","message":"404"}"#;
        assert_eq!(display_message(body), "Supplier not found");
    }

    #[test]
    fn test_display_message_falls_back_to_message() {
        let body = r#"{"message":"Validation failed"}"#;
        assert_eq!(display_message(body), "Validation failed");
    }

    #[test]
    fn test_display_message_uses_raw_text() {
        assert_eq!(display_message("upstream timeout"), "upstream timeout");
    }

    #[test]
    fn test_display_message_hides_html_and_empty_bodies() {
        assert_eq!(display_message(""), FALLBACK_MESSAGE);
        assert_eq!(display_message("<html><body>502</body></html>"), FALLBACK_MESSAGE);
    }
}
