//! Engine configuration
//!
//! Runtime knobs for the agenda engine. Values are serializable so a host
//! application can load them from its own settings storage.

use std::time::Duration;

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    COMPLETION_SCHEMA_VERSION, DEFAULT_CACHE_TTL_SECS, DEFAULT_DUE_HOUR, DEFAULT_DUE_MINUTE,
    DEFAULT_PRELOAD_DAYS,
};

/// Configuration for the agenda aggregation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaybookConfig {
    /// Timezone used for local-day boundaries and day keys
    pub timezone: Tz,
    /// How long a cached day's agenda stays fresh
    pub cache_ttl: Duration,
    /// Number of days the background preload covers
    pub preload_days: u32,
    /// Due time assumed for reminders that carry a date but no time
    pub default_due_time: NaiveTime,
    /// Version of the identity-derivation scheme; gates completion storage
    pub completion_schema_version: u32,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            preload_days: DEFAULT_PRELOAD_DAYS,
            default_due_time: NaiveTime::from_hms_opt(DEFAULT_DUE_HOUR, DEFAULT_DUE_MINUTE, 0)
                .unwrap_or_default(),
            completion_schema_version: COMPLETION_SCHEMA_VERSION,
        }
    }
}

impl DaybookConfig {
    /// Create a config for the given timezone, keeping all other defaults
    pub fn with_timezone(timezone: Tz) -> Self {
        Self { timezone, ..Self::default() }
    }
}
