//! Image generation request pipeline: prompt composition, the webhook
//! call, and interpretation of the response into a gallery-ready result.

pub mod types;
pub mod webhook;

use chrono::Utc;
use tracing::info;

use crate::error::StudioError;

pub use types::{GeneratedImage, DEFAULT_STYLE};
pub use webhook::WebhookClient;

/// Build the text sent to the webhook.
///
/// The prompt is trimmed; a selected style is appended as
/// `", <style> style"`. An empty style means no suffix.
pub fn compose_prompt(prompt: &str, style: &str) -> String {
    let trimmed = prompt.trim();
    if style.is_empty() {
        trimmed.to_string()
    } else {
        format!("{}, {} style", trimmed, style)
    }
}

/// Run one generation: validate, compose, call the webhook, and wrap the
/// returned URL into a `GeneratedImage`.
///
/// The result carries the ORIGINAL trimmed prompt (no style suffix) and
/// the style label, or `"Default"` when no style was selected. A
/// whitespace-only prompt is rejected before any network traffic.
pub async fn generate(
    client: &WebhookClient,
    prompt: &str,
    style: &str,
) -> Result<GeneratedImage, StudioError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(StudioError::EmptyPrompt);
    }

    let final_prompt = compose_prompt(trimmed, style);
    let response = client.request_image(&final_prompt).await?;
    let url = webhook::resolve_image_url(&response)?;

    let now = Utc::now().timestamp_millis();
    info!("Generation succeeded: {}", url);

    Ok(GeneratedImage {
        id: now.to_string(),
        url,
        prompt: trimmed.to_string(),
        style: if style.is_empty() {
            DEFAULT_STYLE.to_string()
        } else {
            style.to_string()
        },
        timestamp: now,
    })
}
