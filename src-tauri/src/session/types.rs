use serde::{Deserialize, Serialize};

use crate::generator::types::GeneratedImage;

/// Version tag written with every snapshot.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// The persisted session record: prompt, style selection, and gallery.
///
/// Every field defaults independently so records written by older builds
/// (or hand-edited ones with fields missing) still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub selected_style: String,
    #[serde(default)]
    pub generated_images: Vec<GeneratedImage>,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    SNAPSHOT_VERSION.to_string()
}
