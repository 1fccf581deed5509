use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Shared per-request state: the three configured folders, set once at
/// startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub audio_folder: PathBuf,
    pub lyrics_folder: PathBuf,
    pub alignment_folder: PathBuf,
}

/// Request body for saving alignment text. Both fields are required strings.
#[derive(Debug, Deserialize)]
pub struct SaveAlignmentRequest {
    /// Audio filename including extension, e.g. `song1.mp3`.
    pub filename: String,
    /// Alignment text to persist.
    pub lyrics: String,
}

/// Response for a successful alignment save.
#[derive(Debug, Serialize)]
pub struct SaveAlignmentResponse {
    pub status: &'static str,
}
