//! Landing page handler - public marketing page
//!
//! Requests arriving with a `shop` query parameter came from the
//! platform and go straight into the admin surface; everyone else gets
//! the marketing page with a sign-in form.

use axum::extract::Query;
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::collections::HashMap;

/// GET /
///
/// Marketing landing page with shop sign-in
pub async fn landing_page(Query(params): Query<HashMap<String, String>>) -> Response {
    if let Some(shop) = params.get("shop") {
        return Redirect::to(&format!("/app?shop={}", shop)).into_response();
    }

    let version = env!("CARGO_PKG_VERSION");
    let git_hash = env!("GIT_HASH");
    let build_profile = env!("BUILD_PROFILE");
    let build_timestamp = env!("BUILD_TIMESTAMP");

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Promobar - Promotional Banners for Your Storefront</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            min-height: 100vh;
            background: linear-gradient(135deg, #000000 0%, #1a1a1a 50%, #333333 100%);
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 2rem 1rem;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        }}
        .card {{
            background: rgba(255, 255, 255, 0.98);
            border-radius: 20px;
            padding: 3rem;
            max-width: 600px;
            width: 100%;
            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
        }}
        h1 {{
            font-size: 2.5rem;
            font-weight: 700;
            color: #000000;
            margin-bottom: 1rem;
            text-align: center;
        }}
        .tagline {{
            font-size: 1.125rem;
            color: #2d2d2d;
            text-align: center;
            margin-bottom: 2.5rem;
            line-height: 1.6;
        }}
        form {{
            background: #f8f9fa;
            border-radius: 12px;
            padding: 2rem;
            margin-bottom: 2.5rem;
            border: 2px solid #e9ecef;
        }}
        label {{
            display: block;
            font-weight: 600;
            color: #000000;
            margin-bottom: 0.5rem;
            font-size: 0.95rem;
        }}
        input {{
            width: 100%;
            padding: 0.875rem 1rem;
            border: 2px solid #dee2e6;
            border-radius: 8px;
            font-size: 1rem;
            margin-bottom: 0.5rem;
        }}
        .helper {{
            font-size: 0.875rem;
            color: #666666;
            font-style: italic;
            margin-bottom: 1.5rem;
            display: block;
        }}
        button {{
            width: 100%;
            background: linear-gradient(135deg, #000000, #333333);
            color: white;
            border: none;
            padding: 1rem 1.5rem;
            border-radius: 8px;
            font-size: 1rem;
            font-weight: 600;
            cursor: pointer;
            text-transform: uppercase;
            letter-spacing: 0.5px;
        }}
        ul {{
            list-style: none;
        }}
        li {{
            background: white;
            border: 2px solid #e9ecef;
            border-radius: 10px;
            padding: 1.5rem;
            margin-bottom: 1rem;
        }}
        li strong {{
            display: block;
            margin-bottom: 0.25rem;
        }}
        .build-info {{
            text-align: center;
            color: #999999;
            font-size: 0.75rem;
            font-family: 'Courier New', monospace;
            margin-top: 1.5rem;
        }}
    </style>
</head>
<body>
    <div class="card">
        <h1>Promobar</h1>
        <p class="tagline">Announce free shipping, flash sales, and launches with a
        promotional banner your customers actually notice.</p>

        <form method="get" action="/app">
            <label for="shop">Shop domain</label>
            <input type="text" id="shop" name="shop" placeholder="my-store.myshopify.com" required>
            <span class="helper">Enter your shop domain to manage your banner</span>
            <button type="submit">Log in</button>
        </form>

        <ul>
            <li><strong>One-click enable</strong>Switch the banner on and off without touching your theme.</li>
            <li><strong>Live preview</strong>See exactly what customers will see before you save.</li>
            <li><strong>Your colors</strong>Match the banner background to your brand.</li>
        </ul>

        <p class="build-info">promobar-admin v{version} &middot; {git_hash} ({build_profile}) &middot; {build_timestamp}</p>
    </div>
</body>
</html>"#
    );

    Html(html).into_response()
}
