//! Audio listing and streaming endpoints.

use actix_files::NamedFile;
use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::fs;
use crate::models::AppState;

/// List audio files in natural order.
///
/// GET /audio_files
///
/// Returns a JSON array of `.mp3` filenames, sorted so embedded numbers
/// compare numerically.
#[get("/audio_files")]
pub async fn list_audio_files(data: web::Data<AppState>) -> AppResult<HttpResponse> {
    let files = fs::list_audio_files(&data.audio_folder)?;
    tracing::debug!(count = files.len(), "Listed audio files");
    Ok(HttpResponse::Ok().json(files))
}

/// Stream an audio file.
///
/// GET /audio/{filename}
///
/// Supports range requests for seeking.
#[get("/audio/{filename}")]
pub async fn serve_audio(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let filename = path.into_inner();
    let full_path = fs::resolve_within(&data.audio_folder, &filename)?;

    if !full_path.exists() {
        return Err(AppError::audio_not_found(&filename));
    }

    let file = NamedFile::open(&full_path)?;
    Ok(file.into_response(&req))
}

/// Configure audio routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_audio_files).service(serve_audio);
}
