//! Settings submitter
//!
//! Serializes a draft record into four individual writes and issues
//! them sequentially against the remote store. The writes are not
//! batched: a failure partway through leaves earlier keys at their new
//! values and later keys at their old ones, with no rollback. The
//! caller gets one coarse success/failure outcome; the first error's
//! detail is logged, never surfaced in the message.

use promobar_common::settings::SettingsRecord;
use promobar_common::Result;
use serde::Serialize;
use tracing::{error, info};

use crate::types::SettingsStore;

/// Fixed confirmation message returned on success
pub const SAVE_SUCCESS_MESSAGE: &str = "Settings saved successfully!";

/// Generic message returned on any failure
pub const SAVE_FAILURE_MESSAGE: &str = "Failed to save settings";

/// Outcome of one save operation
///
/// The wire shape is `{ success, message }`; the error detail rides
/// along for diagnostics only and is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip)]
    pub error_detail: Option<String>,
}

/// Persist a draft record to the remote store
pub async fn save_settings(store: &dyn SettingsStore, record: &SettingsRecord) -> SaveOutcome {
    match write_record(store, record).await {
        Ok(()) => {
            info!("banner settings saved");
            SaveOutcome {
                success: true,
                message: SAVE_SUCCESS_MESSAGE.to_string(),
                error_detail: None,
            }
        }
        Err(e) => {
            error!("banner settings save failed: {}", e);
            SaveOutcome {
                success: false,
                message: SAVE_FAILURE_MESSAGE.to_string(),
                error_detail: Some(e.to_string()),
            }
        }
    }
}

/// Resolve the owner once, then issue the four writes in order
async fn write_record(store: &dyn SettingsStore, record: &SettingsRecord) -> Result<()> {
    let owner_id = store.owner_id().await?;
    for write in record.to_writes(&owner_id) {
        store.write_entry(&write).await?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::mock::MockStore;
    use promobar_common::settings::{
        FieldUpdate, KEY_BANNER_TEXT, KEY_BACKGROUND_COLOR, KEY_ENABLED, KEY_SHOW_CLOSE_BUTTON,
    };

    #[tokio::test]
    async fn test_success_issues_all_four_writes_in_order() {
        let store = MockStore::empty();
        let mut record = SettingsRecord::default();
        record.apply(FieldUpdate::Enabled(true));

        let outcome = save_settings(&store, &record).await;

        assert!(outcome.success);
        assert_eq!(outcome.message, SAVE_SUCCESS_MESSAGE);
        assert!(outcome.error_detail.is_none());

        let writes = store.writes.lock().unwrap();
        let keys: Vec<&str> = writes.iter().map(|w| w.key.as_str()).collect();
        assert_eq!(
            keys,
            [
                KEY_ENABLED,
                KEY_BANNER_TEXT,
                KEY_SHOW_CLOSE_BUTTON,
                KEY_BACKGROUND_COLOR
            ]
        );
        assert!(writes.iter().all(|w| w.owner_id == "gid://shop/1"));
    }

    #[tokio::test]
    async fn test_third_write_failure_reports_failure_and_keeps_partial_writes() {
        // The store accepts the first two writes and rejects the third.
        // Overall outcome is a failure, but the first two fields are
        // already persisted remotely: there is no rollback.
        let store = MockStore {
            fail_write_at: Some(2),
            ..MockStore::empty()
        };

        let outcome = save_settings(&store, &SettingsRecord::default()).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, SAVE_FAILURE_MESSAGE);
        assert!(outcome.error_detail.is_some());

        let writes = store.writes.lock().unwrap();
        let keys: Vec<&str> = writes.iter().map(|w| w.key.as_str()).collect();
        assert_eq!(keys, [KEY_ENABLED, KEY_BANNER_TEXT]);
    }

    #[tokio::test]
    async fn test_failure_message_hides_error_detail() {
        let store = MockStore {
            fail_write_at: Some(0),
            ..MockStore::empty()
        };

        let outcome = save_settings(&store, &SettingsRecord::default()).await;

        assert_eq!(outcome.message, SAVE_FAILURE_MESSAGE);
        assert!(!outcome.message.contains("mock write failure"));
        assert!(outcome
            .error_detail
            .as_deref()
            .unwrap()
            .contains("mock write failure"));
    }

    #[tokio::test]
    async fn test_owner_lookup_failure_issues_no_writes() {
        let store = MockStore {
            fail_owner_lookup: true,
            ..MockStore::empty()
        };

        let outcome = save_settings(&store, &SettingsRecord::default()).await;

        assert!(!outcome.success);
        assert!(store.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_outcome_wire_shape() {
        let store = MockStore::empty();
        let outcome = save_settings(&store, &SettingsRecord::default()).await;

        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], SAVE_SUCCESS_MESSAGE);
        assert!(json.get("error_detail").is_none());
    }
}
