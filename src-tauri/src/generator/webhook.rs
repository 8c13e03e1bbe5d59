use tracing::{info, warn};

use crate::error::StudioError;

use super::types::WebhookResponse;

/// Default n8n workflow endpoint used when no override is configured.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://n8n-latest-ug73.onrender.com/webhook/7aaaa7bd-25a4-4ad6-ba32-6f9ec0832852";

/// HTTP client for the image-generation webhook.
///
/// A single POST per generation: no retries, no explicit timeout, no
/// cancellation once the request is in flight.
pub struct WebhookClient {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("AIStudio/1.0")
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// POST the composed prompt as `{"chatInput": ...}` and decode the body.
    ///
    /// A non-success status is a transport error carrying the status text.
    /// A success status always yields a `WebhookResponse`: a non-JSON body
    /// decodes to the empty response and is resolved downstream.
    pub async fn request_image(&self, chat_input: &str) -> Result<WebhookResponse, StudioError> {
        info!("Posting generation request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "chatInput": chat_input }))
            .send()
            .await
            .map_err(|e| StudioError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Webhook returned {}", status);
            return Err(status_error(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| StudioError::Transport(e.to_string()))?;

        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            warn!("Webhook returned a non-JSON body: {}", e);
            WebhookResponse::default()
        }))
    }
}

fn status_error(status: reqwest::StatusCode) -> StudioError {
    StudioError::Transport(format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    ))
}

/// Pick the image URL out of a decoded webhook body.
///
/// When the body has no usable URL, the server's `message` (preferred) or
/// `error` field becomes the user-facing diagnostic.
pub fn resolve_image_url(response: &WebhookResponse) -> Result<String, StudioError> {
    match response.image_url.as_deref() {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => {
            let detail = response
                .message
                .clone()
                .or_else(|| response.error.clone())
                .unwrap_or_else(|| {
                    "No image URL received from the generation service".to_string()
                });
            Err(StudioError::EmptyResult(detail))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_returns_url() {
        let response: WebhookResponse =
            serde_json::from_str(r#"{"imageUrl": "http://x/y.png"}"#).unwrap();
        assert_eq!(resolve_image_url(&response).unwrap(), "http://x/y.png");
    }

    #[test]
    fn test_resolve_empty_body_uses_generic_message() {
        let response: WebhookResponse = serde_json::from_str("{}").unwrap();
        let err = resolve_image_url(&response).unwrap_err();
        assert!(
            err.to_string().contains("No image URL received"),
            "Unexpected message: {}",
            err
        );
    }

    #[test]
    fn test_resolve_surfaces_server_message() {
        let response: WebhookResponse =
            serde_json::from_str(r#"{"message": "workflow is paused"}"#).unwrap();
        let err = resolve_image_url(&response).unwrap_err();
        assert_eq!(err.to_string(), "workflow is paused");
    }

    #[test]
    fn test_resolve_prefers_message_over_error() {
        let response: WebhookResponse =
            serde_json::from_str(r#"{"message": "out of credits", "error": "E_QUOTA"}"#).unwrap();
        let err = resolve_image_url(&response).unwrap_err();
        assert_eq!(err.to_string(), "out of credits");
    }

    #[test]
    fn test_resolve_falls_back_to_error_field() {
        let response: WebhookResponse =
            serde_json::from_str(r#"{"error": "model unavailable"}"#).unwrap();
        let err = resolve_image_url(&response).unwrap_err();
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[test]
    fn test_resolve_rejects_empty_url_string() {
        let response: WebhookResponse = serde_json::from_str(r#"{"imageUrl": ""}"#).unwrap();
        assert!(resolve_image_url(&response).is_err());
    }

    #[test]
    fn test_status_error_includes_status_text() {
        let err = status_error(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        let message = err.to_string();
        assert!(message.contains("500"), "Missing code: {}", message);
        assert!(
            message.contains("Internal Server Error"),
            "Missing status text: {}",
            message
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let response: WebhookResponse = serde_json::from_str(
            r#"{"imageUrl": "http://x/y.png", "executionId": 42, "extra": {"a": 1}}"#,
        )
        .unwrap();
        assert_eq!(response.image_url.as_deref(), Some("http://x/y.png"));
    }
}
