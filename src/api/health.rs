//! Health check endpoints.

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::models::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Service name.
    pub service: &'static str,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Service status.
    pub status: &'static str,
    /// Audio folder accessible.
    pub audio_folder: bool,
    /// Lyrics folder accessible.
    pub lyrics_folder: bool,
    /// Alignment folder accessible.
    pub alignment_folder: bool,
}

/// Health check endpoint.
///
/// GET /health
///
/// Returns 200 if the service is running.
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: env!("CARGO_PKG_NAME"),
    })
}

/// Readiness check endpoint.
///
/// GET /ready
///
/// Returns 200 if all three configured folders are accessible,
/// 503 otherwise.
#[get("/ready")]
pub async fn ready(data: web::Data<AppState>) -> HttpResponse {
    let audio_ok = data.audio_folder.is_dir();
    let lyrics_ok = data.lyrics_folder.is_dir();
    let alignment_ok = data.alignment_folder.is_dir();

    let all_ok = audio_ok && lyrics_ok && alignment_ok;

    let response = ReadyResponse {
        status: if all_ok { "ready" } else { "not_ready" },
        audio_folder: audio_ok,
        lyrics_folder: lyrics_ok,
        alignment_folder: alignment_ok,
    };

    if all_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(ready);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use tempfile::TempDir;

    #[actix_web::test]
    async fn test_ready_reports_missing_folder() {
        let dir = TempDir::new().unwrap();
        let state = AppState {
            audio_folder: dir.path().join("gone"),
            lyrics_folder: dir.path().to_path_buf(),
            alignment_folder: dir.path().to_path_buf(),
        };

        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "not_ready");
        assert_eq!(body["audio_folder"], false);
        assert_eq!(body["lyrics_folder"], true);
    }
}
