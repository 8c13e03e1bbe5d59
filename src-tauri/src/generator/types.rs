use serde::{Deserialize, Serialize};

/// Style label recorded when the user generated without picking a style.
pub const DEFAULT_STYLE: &str = "Default";

/// One completed generation result.
///
/// Immutable once created; the frontend only ever prepends these to its
/// gallery. The `prompt` is the raw user text without the style suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub prompt: String,
    pub style: String,
    pub timestamp: i64,
}

/// Body returned by the generation webhook.
///
/// All fields are optional so that any well-formed JSON object parses;
/// `message`/`error` carry server-side diagnostics when no image was
/// produced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}
