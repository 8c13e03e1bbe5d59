use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::StudioError;

use super::types::SessionSnapshot;

/// Single-record session store backed by one JSON file.
///
/// `save` fully overwrites the prior record; `load` never fails — an
/// absent or unreadable record simply means "no prior session".
/// Typically opened with: app.path().app_data_dir()?.join("session.json")
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StudioError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StudioError::Persistence(format!("Failed to create data dir: {}", e)))?;
        }
        Ok(Self { path })
    }

    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StudioError> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| StudioError::Persistence(format!("Failed to serialize session: {}", e)))?;

        std::fs::write(&self.path, json)
            .map_err(|e| StudioError::Persistence(format!("Failed to write session: {}", e)))?;

        info!("Saved session snapshot to {:?}", self.path);
        Ok(())
    }

    pub fn load(&self) -> Option<SessionSnapshot> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read session snapshot: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Discarding malformed session snapshot: {}", e);
                None
            }
        }
    }
}
