//! Admin settings page handler - merchant configuration interface

use super::static_assets::ADMIN_HTML_CONTENT;
use axum::response::{Html, IntoResponse};

/// GET /app
///
/// Merchant-facing banner settings page
pub async fn admin_page() -> impl IntoResponse {
    Html(ADMIN_HTML_CONTENT)
}
