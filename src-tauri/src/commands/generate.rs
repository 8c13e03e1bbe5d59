use tracing::info;

use crate::generator::{self, GeneratedImage, WebhookClient};

/// Run one image generation against the configured webhook.
///
/// `style` may be empty ("no style"); the returned result carries the
/// original prompt and the style label (or the "Default" sentinel).
#[tauri::command]
pub async fn generate_image(
    app: tauri::AppHandle,
    prompt: String,
    style: String,
) -> Result<GeneratedImage, String> {
    info!(
        "generate_image called ({} chars, style: '{}')",
        prompt.len(),
        style
    );

    let endpoint = super::config::webhook_url(&app)?;
    let client = WebhookClient::new(endpoint);

    generator::generate(&client, &prompt, &style)
        .await
        .map_err(String::from)
}
