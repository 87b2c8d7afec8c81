//! Settings API endpoints
//!
//! GET /api/settings runs the loader (one store read per page view) and
//! returns the record plus the server-rendered preview block. POST
//! /api/settings accepts the four fields as form-encoded text and runs
//! the submitter.

use axum::{extract::State, routing::get, Form, Json, Router};
use promobar_common::preview::render_banner;
use promobar_common::settings::{FieldUpdate, SettingsRecord};
use serde::{Deserialize, Serialize};

use crate::services::settings_submitter::{self, SaveOutcome};
use crate::services::settings_loader;
use crate::{ApiResult, AppState};

/// Response payload for settings load
#[derive(Debug, Serialize)]
pub struct LoadSettingsResponse {
    /// Current settings record (camelCase JSON)
    pub settings: SettingsRecord,
    /// Server-rendered preview block for the initial page state
    pub preview: String,
}

/// Form payload for settings save
///
/// All four fields travel as text; boolean fields carry "true"/"false".
#[derive(Debug, Deserialize)]
pub struct SaveSettingsForm {
    pub enabled: String,
    #[serde(rename = "bannerText")]
    pub banner_text: String,
    #[serde(rename = "showCloseButton")]
    pub show_close_button: String,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
}

impl SaveSettingsForm {
    /// Fold the submitted fields over the compiled defaults
    fn into_record(self) -> SettingsRecord {
        let mut record = SettingsRecord::default();
        let fields = [
            ("enabled", self.enabled),
            ("bannerText", self.banner_text),
            ("showCloseButton", self.show_close_button),
            ("backgroundColor", self.background_color),
        ];
        for (name, raw) in fields {
            if let Some(update) = FieldUpdate::from_form_field(name, &raw) {
                record.apply(update);
            }
        }
        record
    }
}

/// GET /api/settings handler
///
/// A store failure is a page-level load failure: 500, no partial
/// settings.
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<LoadSettingsResponse>> {
    let settings = settings_loader::load_settings(state.store.as_ref()).await?;
    let preview = render_banner(&settings);

    Ok(Json(LoadSettingsResponse { settings, preview }))
}

/// POST /api/settings handler
///
/// Both outcomes respond 200; failure is reported in the payload with a
/// generic message. The error detail lands in the diagnostic slot and
/// the log only.
pub async fn save_settings(
    State(state): State<AppState>,
    Form(form): Form<SaveSettingsForm>,
) -> Json<SaveOutcome> {
    let record = form.into_record();
    let outcome = settings_submitter::save_settings(state.store.as_ref(), &record).await;

    if let Some(detail) = &outcome.error_detail {
        *state.last_error.write().await = Some(detail.clone());
    }

    Json(outcome)
}

/// Build settings routes
pub fn settings_routes() -> Router<AppState> {
    Router::new().route("/api/settings", get(get_settings).post(save_settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fold_decodes_all_fields() {
        let form = SaveSettingsForm {
            enabled: "true".to_string(),
            banner_text: "Sale!".to_string(),
            show_close_button: "false".to_string(),
            background_color: "#ff0000".to_string(),
        };

        let record = form.into_record();

        assert!(record.enabled);
        assert_eq!(record.banner_text, "Sale!");
        assert!(!record.show_close_button);
        assert_eq!(record.background_color, "#ff0000");
    }

    #[test]
    fn test_form_fold_treats_non_true_as_false() {
        let form = SaveSettingsForm {
            enabled: "yes".to_string(),
            banner_text: String::new(),
            show_close_button: "TRUE".to_string(),
            background_color: "#667eea".to_string(),
        };

        let record = form.into_record();

        assert!(!record.enabled);
        assert!(!record.show_close_button);
        // Empty banner text is accepted as-is; there is no validation
        assert_eq!(record.banner_text, "");
    }
}
