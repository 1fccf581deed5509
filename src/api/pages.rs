//! Static page endpoints.

use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse};

/// The alignment client, compiled into the binary.
const ALIGNMENT_TOOL_HTML: &str = include_str!("../../assets/alignment_tool.html");

/// Serve the alignment tool page.
///
/// GET /
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(ALIGNMENT_TOOL_HTML)
}

/// Configure page routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
