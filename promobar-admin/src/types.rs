//! Core trait definitions for promobar-admin
//!
//! The remote settings store seam. The production implementation speaks
//! the platform Admin GraphQL API; tests substitute an in-memory mock.

use async_trait::async_trait;
use promobar_common::settings::{EntryWrite, StoreEntry};
use promobar_common::Result;

/// Remote namespaced key-value settings store
///
/// All three operations are sequential request/response calls that
/// suspend the caller until the remote store answers.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Resolve the owning entity id that writes must target
    async fn owner_id(&self) -> Result<String>;

    /// Read all entries under a namespace, up to the store's page limit
    async fn list_entries(&self, namespace: &str) -> Result<Vec<StoreEntry>>;

    /// Write one entry; the store upserts on (owner, namespace, key)
    async fn write_entry(&self, write: &EntryWrite) -> Result<()>;
}

// ============================================================================
// Mock Store for Testing
// ============================================================================
