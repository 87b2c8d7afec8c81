//! Settings loader
//!
//! One store read per admin page view: list every entry under the
//! banner namespace and fold the recognized keys over the compiled
//! defaults. A store failure is not recovered here; it propagates to
//! the page-render failure path.

use promobar_common::settings::{SettingsRecord, BANNER_NAMESPACE};
use promobar_common::Result;
use tracing::debug;

use crate::types::SettingsStore;

/// Load the banner settings record from the remote store
pub async fn load_settings(store: &dyn SettingsStore) -> Result<SettingsRecord> {
    let entries = store.list_entries(BANNER_NAMESPACE).await?;
    debug!(count = entries.len(), "loaded banner settings entries");
    Ok(SettingsRecord::from_entries(&entries))
}

// ============================================================================
// Tests
// ============================================================================
