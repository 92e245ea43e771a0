//! Completion status store
//!
//! Tracks which agenda occurrences the user has completed. The in-memory set
//! is authoritative for reads; every mutation writes the full set through to
//! both the local and the cloud-synced backend. On load (and whenever the
//! cloud store changes externally) the effective set is the union of both
//! backends - a completion recorded on another device is never silently
//! lost, at the cost of remote un-completion not reliably winning
//! (documented limitation).

use std::collections::HashSet;
use std::sync::Arc;

use daybook_domain::constants::{COMPLETED_IDS_KEY, SCHEMA_VERSION_KEY};
use daybook_domain::DaybookConfig;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::ports::CompletionBackend;

/// Completion status store backed by a local and a cloud-synced key-value
/// collaborator
pub struct CompletionStore {
    local: Arc<dyn CompletionBackend>,
    cloud: Arc<dyn CompletionBackend>,
    schema_version: u32,
    completed: RwLock<HashSet<String>>,
    changed: watch::Sender<u64>,
}

impl CompletionStore {
    /// Create a store over the two backends; call [`load`](Self::load) before
    /// first use
    pub fn new(
        local: Arc<dyn CompletionBackend>,
        cloud: Arc<dyn CompletionBackend>,
        config: &DaybookConfig,
    ) -> Self {
        let (changed, _) = watch::channel(0);
        Self {
            local,
            cloud,
            schema_version: config.completion_schema_version,
            completed: RwLock::new(HashSet::new()),
            changed,
        }
    }

    /// Load the effective completion set: migrate stale schemas, then union
    /// whatever each backend holds.
    #[instrument(skip(self))]
    pub async fn load(&self) -> daybook_domain::Result<()> {
        self.migrate_if_needed().await?;
        let merged = self.merged_backends().await;
        {
            let mut completed = self.completed.write().await;
            *completed = merged;
        }
        self.notify();
        Ok(())
    }

    /// Whether the entry with this id is completed
    pub async fn is_completed(&self, id: Uuid) -> bool {
        self.completed.read().await.contains(&canonical(id))
    }

    /// Flip completion state; returns the new state
    pub async fn toggle(&self, id: Uuid) -> bool {
        let key = canonical(id);
        let now_completed = {
            let mut completed = self.completed.write().await;
            if completed.remove(&key) {
                false
            } else {
                completed.insert(key);
                true
            }
        };
        self.persist().await;
        self.notify();
        now_completed
    }

    /// Mark an entry completed (idempotent)
    pub async fn mark_completed(&self, id: Uuid) {
        let inserted = self.completed.write().await.insert(canonical(id));
        if inserted {
            self.persist().await;
            self.notify();
        }
    }

    /// Mark an entry not completed (idempotent)
    pub async fn mark_incomplete(&self, id: Uuid) {
        let removed = self.completed.write().await.remove(&canonical(id));
        if removed {
            self.persist().await;
            self.notify();
        }
    }

    /// Re-run the load-time union merge after the cloud store changed
    /// externally (e.g. a sync from another device), then signal observers.
    #[instrument(skip(self))]
    pub async fn handle_external_change(&self) {
        let merged = self.merged_backends().await;
        {
            let mut completed = self.completed.write().await;
            *completed = merged;
        }
        debug!("completion set re-merged after external change");
        self.notify();
    }

    /// Subscribe to status-changed notifications (counter bumps, no payload)
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed.subscribe()
    }

    /// Discard all stored completion state when the identity-derivation
    /// scheme is newer than the persisted version tag.
    ///
    /// Ids minted under an old scheme are meaningless under a new one;
    /// merging them would silently "complete" unrelated items.
    ///
    /// Unlike ordinary persistence, wipe and version-write failures propagate:
    /// a half-completed wipe could leave stale ids alive, so load must not
    /// proceed past a failed migration.
    pub async fn migrate_if_needed(&self) -> daybook_domain::Result<()> {
        let stored = match self.local.load_version(SCHEMA_VERSION_KEY).await {
            Ok(version) => version.unwrap_or(0),
            Err(err) => {
                warn!(error = %err, "failed to read completion schema version; assuming 0");
                0
            }
        };

        if stored >= self.schema_version {
            return Ok(());
        }

        info!(stored, current = self.schema_version, "completion schema changed; wiping stored set");
        self.completed.write().await.clear();
        self.local.save_ids(COMPLETED_IDS_KEY, &[]).await?;
        self.cloud.save_ids(COMPLETED_IDS_KEY, &[]).await?;
        self.local.save_version(SCHEMA_VERSION_KEY, self.schema_version).await?;
        Ok(())
    }

    /// Union of both backends; a backend read failure degrades to its half
    /// being empty rather than failing the load.
    async fn merged_backends(&self) -> HashSet<String> {
        let mut merged = HashSet::new();
        for (name, backend) in [("local", &self.local), ("cloud", &self.cloud)] {
            match backend.load_ids(COMPLETED_IDS_KEY).await {
                Ok(Some(ids)) => merged.extend(ids),
                Ok(None) => {}
                Err(err) => {
                    warn!(store = name, error = %err, "failed to read completion ids; treating as empty");
                }
            }
        }
        merged
    }

    /// Write the full in-memory set through to both backends.
    ///
    /// Persistence failures are logged, never propagated: the in-memory set
    /// stays authoritative and the next successful write carries the full
    /// set forward.
    async fn persist(&self) {
        let snapshot: Vec<String> = {
            let completed = self.completed.read().await;
            let mut ids: Vec<String> = completed.iter().cloned().collect();
            ids.sort_unstable();
            ids
        };

        for (name, backend) in [("local", &self.local), ("cloud", &self.cloud)] {
            if let Err(err) = backend.save_ids(COMPLETED_IDS_KEY, &snapshot).await {
                warn!(store = name, error = %err, "failed to persist completion ids");
            }
        }
    }

    fn notify(&self) {
        self.changed.send_modify(|v| *v += 1);
    }
}

/// Canonical persisted form of an entry id (hyphenated lowercase UUID)
fn canonical(id: Uuid) -> String {
    id.hyphenated().to_string()
}
