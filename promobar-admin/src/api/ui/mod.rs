//! UI Routes - HTML pages for the promobar admin web interface
//!
//! # Structure
//! - **Landing** (`landing`): public marketing page with shop sign-in
//! - **Admin** (`admin`): merchant-facing banner settings page
//! - **Static Assets** (`static_assets`): CSS/JS file serving

use crate::AppState;
use axum::{routing::get, Router};

// Module declarations
mod admin;
mod landing;
mod static_assets;

// Re-export handler functions for router assembly
use admin::admin_page;
use landing::landing_page;
use static_assets::{serve_admin_css, serve_admin_js};

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        // Page routes
        .route("/", get(landing_page))
        .route("/app", get(admin_page))
        // Static assets
        .route("/static/admin.css", get(serve_admin_css))
        .route("/static/admin.js", get(serve_admin_js))
}
