//! Static asset handlers for the promobar admin UI
//!
//! Embeds and serves CSS/JS files at compile time

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

// Embed static files at compile time
const ADMIN_HTML: &str = include_str!("../../../static/admin.html");
const ADMIN_CSS: &str = include_str!("../../../static/admin.css");
const ADMIN_JS: &str = include_str!("../../../static/admin.js");

// Re-export admin HTML for use by the admin page handler
pub const ADMIN_HTML_CONTENT: &str = ADMIN_HTML;

/// GET /static/admin.css
///
/// Serves the admin page styles
pub async fn serve_admin_css() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        ADMIN_CSS,
    )
        .into_response()
}

/// GET /static/admin.js
///
/// Serves the admin page script
pub async fn serve_admin_js() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        ADMIN_JS,
    )
        .into_response()
}
