//! Promotional banner settings record
//!
//! Banner settings live in the platform's metadata store as one string
//! value per key under a fixed namespace. Booleans travel as the literal
//! strings "true"/"false"; everything else passes through unmodified.
//! A record is reconstructed from the store on every admin page view and
//! edited as an in-memory draft until the merchant saves.

use serde::{Deserialize, Serialize};

/// Metafield namespace owning all banner settings
pub const BANNER_NAMESPACE: &str = "promotional_banner";

/// Scalar type tag attached to every metafield write
pub const VALUE_TYPE: &str = "single_line_text_field";

/// Store key for the banner on/off switch
pub const KEY_ENABLED: &str = "enabled";
/// Store key for the banner message
pub const KEY_BANNER_TEXT: &str = "banner_text";
/// Store key for the close-button toggle
pub const KEY_SHOW_CLOSE_BUTTON: &str = "show_close_button";
/// Store key for the banner background color
pub const KEY_BACKGROUND_COLOR: &str = "background_color";

/// One entry returned by the store read query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    pub namespace: String,
    pub key: String,
    pub value: String,
}

/// One pending store mutation
///
/// Each write names its full ownership target: the owning entity id is
/// resolved by a preliminary identity lookup and repeated on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryWrite {
    pub namespace: String,
    pub key: String,
    pub value: String,
    pub value_type: String,
    pub owner_id: String,
}

/// Banner settings as edited on the admin page
///
/// JSON form uses the camelCase names the admin page script consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub enabled: bool,
    pub banner_text: String,
    pub show_close_button: bool,
    pub background_color: String,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            enabled: false,
            banner_text: "🎉 Free Shipping on All Orders! 🎉".to_string(),
            show_close_button: true,
            background_color: "#667eea".to_string(),
        }
    }
}

/// Single-field update applied to a draft record
///
/// Replaces exactly one field. No validation is performed on the value;
/// empty text and malformed colors are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Enabled(bool),
    BannerText(String),
    ShowCloseButton(bool),
    BackgroundColor(String),
}

impl FieldUpdate {
    /// Decode a submitted form field (camelCase name, raw text value)
    ///
    /// Boolean fields compare the raw value to the literal "true".
    /// Returns None for unrecognized field names.
    pub fn from_form_field(name: &str, raw: &str) -> Option<Self> {
        match name {
            "enabled" => Some(Self::Enabled(raw == "true")),
            "bannerText" => Some(Self::BannerText(raw.to_string())),
            "showCloseButton" => Some(Self::ShowCloseButton(raw == "true")),
            "backgroundColor" => Some(Self::BackgroundColor(raw.to_string())),
            _ => None,
        }
    }
}

impl SettingsRecord {
    /// Replace one field of the draft, leaving all others untouched
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Enabled(v) => self.enabled = v,
            FieldUpdate::BannerText(v) => self.banner_text = v,
            FieldUpdate::ShowCloseButton(v) => self.show_close_button = v,
            FieldUpdate::BackgroundColor(v) => self.background_color = v,
        }
    }

    /// Fold store entries over the compiled defaults
    ///
    /// Entries under a foreign namespace and unrecognized keys are
    /// ignored. Keys absent from the store keep their default.
    pub fn from_entries(entries: &[StoreEntry]) -> Self {
        let mut settings = Self::default();
        for entry in entries {
            if entry.namespace != BANNER_NAMESPACE {
                continue;
            }
            match entry.key.as_str() {
                KEY_ENABLED => settings.enabled = entry.value == "true",
                KEY_BANNER_TEXT => settings.banner_text = entry.value.clone(),
                KEY_SHOW_CLOSE_BUTTON => settings.show_close_button = entry.value == "true",
                KEY_BACKGROUND_COLOR => settings.background_color = entry.value.clone(),
                _ => {}
            }
        }
        settings
    }

    /// Serialize to the four store mutations, in submission order
    pub fn to_writes(&self, owner_id: &str) -> Vec<EntryWrite> {
        let pairs = [
            (KEY_ENABLED, self.enabled.to_string()),
            (KEY_BANNER_TEXT, self.banner_text.clone()),
            (KEY_SHOW_CLOSE_BUTTON, self.show_close_button.to_string()),
            (KEY_BACKGROUND_COLOR, self.background_color.clone()),
        ];
        pairs
            .into_iter()
            .map(|(key, value)| EntryWrite {
                namespace: BANNER_NAMESPACE.to_string(),
                key: key.to_string(),
                value,
                value_type: VALUE_TYPE.to_string(),
                owner_id: owner_id.to_string(),
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
