use tauri::Manager;
use tracing::info;

use crate::session::{SessionSnapshot, SessionStore};

/// Open the session store in the app data directory, creating it if needed.
fn session_store(app: &tauri::AppHandle) -> Result<SessionStore, String> {
    let data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| format!("Failed to resolve app data directory: {}", e))?;
    SessionStore::new(data_dir.join("session.json")).map_err(String::from)
}

/// Overwrite the persisted session with the given snapshot.
#[tauri::command]
pub fn save_session(app: tauri::AppHandle, snapshot: SessionSnapshot) -> Result<(), String> {
    info!(
        "save_session called ({} images)",
        snapshot.generated_images.len()
    );
    session_store(&app)?.save(&snapshot).map_err(String::from)
}

/// Load the persisted session, if any.
///
/// Returns `None` both when nothing was ever saved and when the stored
/// record is unreadable; the caller starts from an empty session either way.
#[tauri::command]
pub fn load_session(app: tauri::AppHandle) -> Result<Option<SessionSnapshot>, String> {
    info!("load_session called");
    Ok(session_store(&app)?.load())
}
