//! Agenda service - cache-fronted agenda access
//!
//! Ties the record source, the merger, and the day cache together: point
//! lookups rebuild on a cache miss, and the preload window warms several days
//! concurrently.

use std::sync::Arc;

use chrono::NaiveDate;
use daybook_common::time::day_bounds;
use daybook_common::{Clock, SystemClock};
use daybook_domain::{AgendaEntry, DaybookConfig, Result};
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::cache::AgendaCache;
use super::merge::build_agenda;
use super::ports::RecordSource;

/// Agenda aggregation service
pub struct AgendaService<C: Clock = SystemClock> {
    source: Arc<dyn RecordSource>,
    cache: AgendaCache<C>,
    config: DaybookConfig,
}

impl AgendaService<SystemClock> {
    /// Create a new agenda service using the system clock
    pub fn new(source: Arc<dyn RecordSource>, config: DaybookConfig) -> Self {
        Self::with_clock(source, config, SystemClock)
    }
}

impl<C: Clock> AgendaService<C> {
    /// Create an agenda service with a custom clock (useful for testing)
    pub fn with_clock(source: Arc<dyn RecordSource>, config: DaybookConfig, clock: C) -> Self {
        let cache = AgendaCache::with_clock(config.cache_ttl, clock);
        Self { source, cache, config }
    }

    /// Get the agenda for one local calendar day.
    ///
    /// Returns the cached list when unexpired; otherwise fetches raw records,
    /// rebuilds, caches with a fresh TTL, and returns. Each call is
    /// independently atomic.
    #[instrument(skip(self))]
    pub async fn agenda_for(&self, date: NaiveDate) -> Result<Vec<AgendaEntry>> {
        if let Some(entries) = self.cache.get(date).await {
            debug!(%date, "agenda cache hit");
            return Ok(entries);
        }

        let entries = self.rebuild_day(date).await?;
        self.cache.put(date, entries.clone()).await;
        Ok(entries)
    }

    /// Warm the cache for the configured preload window starting at `start`.
    ///
    /// Runs the per-day rebuilds concurrently; overlapping calls coalesce to
    /// a no-op (see [`AgendaCache::preload`]).
    #[instrument(skip(self))]
    pub async fn preload_window(&self, start: NaiveDate) {
        let days = self.config.preload_days;
        self.cache.preload(start, days, |day| self.rebuild_day(day)).await;
    }

    /// Drop one day's cached agenda
    pub async fn invalidate_day(&self, date: NaiveDate) {
        self.cache.invalidate(date).await;
    }

    /// Drop every cached day; the hook for upstream changes of unknown scope
    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all().await;
    }

    /// Subscribe to cache-changed notifications
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.cache.subscribe()
    }

    /// The underlying day cache
    pub fn cache(&self) -> &AgendaCache<C> {
        &self.cache
    }

    async fn rebuild_day(&self, date: NaiveDate) -> Result<Vec<AgendaEntry>> {
        let (start, end) = day_bounds(date, self.config.timezone);
        let events = self.source.fetch_events(start, end).await?;
        let reminders = self.source.fetch_reminders(start, end).await?;
        Ok(build_agenda(date, &events, &reminders, &self.config))
    }
}
