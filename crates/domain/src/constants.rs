//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Cache configuration
pub const DEFAULT_CACHE_TTL_SECS: u64 = 30 * 60;
pub const DEFAULT_PRELOAD_DAYS: u32 = 7;

// Reminders without a time component get this due time so ordering against
// timed events stays stable.
pub const DEFAULT_DUE_HOUR: u32 = 8;
pub const DEFAULT_DUE_MINUTE: u32 = 0;

// Display fallbacks
pub const UNTITLED_PLACEHOLDER: &str = "Untitled";

// Completion persistence
pub const COMPLETED_IDS_KEY: &str = "completed_entry_ids";
pub const SCHEMA_VERSION_KEY: &str = "completion_schema_version";

// Bumped whenever the identity-derivation scheme changes; stored completion
// sets tagged with an older version are wiped, never merged.
pub const COMPLETION_SCHEMA_VERSION: u32 = 2;
