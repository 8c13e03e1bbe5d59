use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};
use url::Url;

use crate::generator::webhook::DEFAULT_WEBHOOK_URL;

const PREFERENCES_FILE: &str = "preferences.json";

/// Preference key holding the webhook endpoint override.
pub const WEBHOOK_URL_KEY: &str = "webhook_url";

#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    info!("Getting preference: {}", key);
    let store = app.store(PREFERENCES_FILE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    let value = store.get(key).and_then(|v| v.as_str().map(|s| s.to_string()));
    Ok(value)
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    info!("Setting preference: {} = {}", key, value);

    if key == WEBHOOK_URL_KEY && !value.is_empty() {
        validate_endpoint(value)?;
    }

    let store = app.store(PREFERENCES_FILE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    store.set(key, serde_json::json!(value));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        e.to_string()
    })
}

/// Resolve the generation endpoint: the `webhook_url` preference when set
/// and non-empty, otherwise the built-in default.
pub fn webhook_url(app: &AppHandle) -> Result<String, String> {
    let store = app.store(PREFERENCES_FILE).map_err(|e| {
        warn!("Failed to open preferences store: {}", e);
        e.to_string()
    })?;
    let endpoint = store
        .get(WEBHOOK_URL_KEY)
        .and_then(|v| v.as_str().map(|s| s.to_string()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());
    Ok(endpoint)
}

fn validate_endpoint(value: &str) -> Result<(), String> {
    let parsed = Url::parse(value).map_err(|e| format!("Invalid webhook URL: {}", e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!(
            "Invalid webhook URL: expected http(s), got '{}'",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_https() {
        assert!(validate_endpoint("https://example.com/webhook/abc").is_ok());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        assert!(validate_endpoint("not a url").is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let err = validate_endpoint("ftp://example.com/hook").unwrap_err();
        assert!(err.contains("ftp"), "Unexpected message: {}", err);
    }
}
