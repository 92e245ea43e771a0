//! Completion persistence port interfaces
//!
//! Two key-value collaborators back the completion set: a local persistent
//! store and a cloud-synced one. Both speak the same opaque contract (a list
//! of identifier strings under a named key plus an integer version tag);
//! neither interprets the ids. External-change notifications from the cloud
//! store reach the engine through
//! [`CompletionStore::handle_external_change`](super::CompletionStore::handle_external_change).

use async_trait::async_trait;
use daybook_domain::Result;

/// Trait for completion-set backing stores
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Read the identifier list stored under `key`; `None` when never written
    async fn load_ids(&self, key: &str) -> Result<Option<Vec<String>>>;

    /// Replace the identifier list stored under `key`
    async fn save_ids(&self, key: &str, ids: &[String]) -> Result<()>;

    /// Read the schema version tag under `key`; `None` when never written
    async fn load_version(&self, key: &str) -> Result<Option<u32>>;

    /// Replace the schema version tag under `key`
    async fn save_version(&self, key: &str, version: u32) -> Result<()>;
}
