//! Lyrics retrieval and alignment persistence endpoints.

use actix_web::http::header::ContentType;
use actix_web::{get, post, web, HttpResponse};

use crate::error::AppResult;
use crate::fs;
use crate::models::{AppState, SaveAlignmentRequest, SaveAlignmentResponse};

/// Get the lyrics for a song as raw text.
///
/// GET /lyrics/{filename}
#[get("/lyrics/{filename}")]
pub async fn serve_lyrics(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let filename = path.into_inner();
    let lyrics = fs::read_lyrics(&data.lyrics_folder, &filename)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(lyrics))
}

/// Persist user-edited alignment text for an audio file.
///
/// POST /save_alignment
///
/// Writes the text to `<stem>_alignment.txt` in the alignment folder,
/// overwriting any previous save for that file.
#[post("/save_alignment")]
pub async fn save_alignment(
    data: web::Data<AppState>,
    body: web::Json<SaveAlignmentRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();
    let target = fs::write_alignment(&data.alignment_folder, &request.filename, &request.lyrics)?;

    tracing::info!(
        filename = %request.filename,
        target = %target.display(),
        "Saved alignment"
    );

    Ok(HttpResponse::Ok().json(SaveAlignmentResponse { status: "success" }))
}

/// Configure lyrics routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(serve_lyrics).service(save_alignment);
}
