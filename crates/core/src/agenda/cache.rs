//! Day-keyed agenda cache with TTL expiration and guarded preloading
//!
//! Each slot holds one local day's merged agenda plus an expiry instant.
//! Expiry is a logical state (`now >= expires_at`), not stored separately,
//! and a whole slot is always replaced atomically. A `watch` channel carries
//! a version counter so observers can detect "cache changed" without diffing
//! content.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use daybook_common::time::{day_key, day_window};
use daybook_common::{Clock, SystemClock};
use daybook_domain::{AgendaEntry, Result};
use futures::future::join_all;
use tokio::sync::{watch, RwLock};
use tracing::{debug, warn};

struct CacheSlot {
    entries: Vec<AgendaEntry>,
    expires_at: Instant,
}

/// Clears the preload in-flight flag when the preload future completes or is
/// dropped mid-flight (caller abandonment must not disable future preloads).
struct PreloadGuard<'a>(&'a AtomicBool);

impl Drop for PreloadGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Per-day agenda cache
///
/// Mutation is confined behind the internal lock; callers only go through the
/// documented operations. The clock is injected so TTL behaviour is testable
/// without sleeping.
pub struct AgendaCache<C: Clock = SystemClock> {
    slots: RwLock<HashMap<String, CacheSlot>>,
    ttl: Duration,
    clock: C,
    version: watch::Sender<u64>,
    preload_in_flight: AtomicBool,
}

impl AgendaCache<SystemClock> {
    /// Create a cache using the system clock
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<C: Clock> AgendaCache<C> {
    /// Create a cache with a custom clock (useful for testing)
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        let (version, _) = watch::channel(0);
        Self {
            slots: RwLock::new(HashMap::new()),
            ttl,
            clock,
            version,
            preload_in_flight: AtomicBool::new(false),
        }
    }

    /// Return the cached agenda for `date` if present and unexpired
    pub async fn get(&self, date: NaiveDate) -> Option<Vec<AgendaEntry>> {
        let slots = self.slots.read().await;
        let slot = slots.get(&day_key(date))?;
        if self.clock.now() >= slot.expires_at {
            return None;
        }
        Some(slot.entries.clone())
    }

    /// Store `entries` for `date` with a fresh TTL, replacing any prior slot
    pub async fn put(&self, date: NaiveDate, entries: Vec<AgendaEntry>) {
        let expires_at = self.clock.now() + self.ttl;
        {
            let mut slots = self.slots.write().await;
            slots.insert(day_key(date), CacheSlot { entries, expires_at });
        }
        self.bump_version();
    }

    /// Remove exactly one day's slot
    pub async fn invalidate(&self, date: NaiveDate) {
        let removed = {
            let mut slots = self.slots.write().await;
            slots.remove(&day_key(date)).is_some()
        };
        if removed {
            self.bump_version();
        }
    }

    /// Clear every slot.
    ///
    /// Used when an upstream change of unknown scope arrives (e.g. an
    /// external sync event); partial invalidation could leave stale cross-day
    /// artifacts such as a moved reminder.
    pub async fn invalidate_all(&self) {
        {
            let mut slots = self.slots.write().await;
            slots.clear();
        }
        self.bump_version();
    }

    /// Populate `days` consecutive days starting at `start`.
    ///
    /// Days already cached and unexpired are skipped. The remaining days are
    /// fetched concurrently; a failed day is logged and left absent (the next
    /// synchronous `get` miss will rebuild it) without aborting its siblings.
    /// All successful results are committed as one batch and observers are
    /// notified exactly once.
    ///
    /// Only one preload runs at a time: a call that finds another in flight
    /// returns immediately as a no-op.
    pub async fn preload<F, Fut>(&self, start: NaiveDate, days: u32, fetch_fn: F)
    where
        F: Fn(NaiveDate) -> Fut,
        Fut: Future<Output = Result<Vec<AgendaEntry>>>,
    {
        if self
            .preload_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("preload already in flight; coalescing to a no-op");
            return;
        }
        let _guard = PreloadGuard(&self.preload_in_flight);

        let missing: Vec<NaiveDate> = {
            let slots = self.slots.read().await;
            let now = self.clock.now();
            day_window(start, days)
                .into_iter()
                .filter(|day| match slots.get(&day_key(*day)) {
                    Some(slot) => now >= slot.expires_at,
                    None => true,
                })
                .collect()
        };

        let results = join_all(missing.iter().map(|day| fetch_fn(*day))).await;

        let mut fetched = Vec::new();
        for (day, result) in missing.into_iter().zip(results) {
            match result {
                Ok(entries) => fetched.push((day, entries)),
                Err(err) => {
                    warn!(day = %day_key(day), error = %err, "preload fetch failed; day left uncached");
                }
            }
        }

        if !fetched.is_empty() {
            let committed = fetched.len();
            let expires_at = self.clock.now() + self.ttl;
            {
                let mut slots = self.slots.write().await;
                for (day, entries) in fetched {
                    slots.insert(day_key(day), CacheSlot { entries, expires_at });
                }
            }
            self.bump_version();
            debug!(days = committed, "preload batch committed");
        }
    }

    /// Subscribe to cache-changed notifications (version counter bumps)
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    /// Current cache version; increments on every committed change
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    fn bump_version(&self) {
        self.version.send_modify(|v| *v += 1);
    }
}
