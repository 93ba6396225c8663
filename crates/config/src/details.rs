//! Well-known secret paths and lease expiry bookkeeping

use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_CRED_PATH: &str = "secret/data/chewedfeed/creds";
pub const DEFAULT_DETAILS_PATH: &str = "secret/data/chewedfeed/details";

/// Where an application keeps its credentials and details, plus when the
/// last lease on them runs out.
///
/// Expiry is informational; nothing in the helper refreshes on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Details {
    pub cred_path: String,
    pub details_path: String,
    pub expire_time: Option<DateTime<Utc>>,
}

impl Default for Details {
    fn default() -> Self {
        Self::new(DEFAULT_CRED_PATH, DEFAULT_DETAILS_PATH)
    }
}

impl Details {
    pub fn new(cred_path: impl Into<String>, details_path: impl Into<String>) -> Self {
        Self {
            cred_path: cred_path.into(),
            details_path: details_path.into(),
            expire_time: None,
        }
    }

    /// Record the expiry of a lease of `lease_secs` starting now.
    /// A zero lease carries no expiry information and clears nothing.
    pub fn with_lease(self, lease_secs: u64) -> Self {
        self.with_lease_from(Utc::now(), lease_secs)
    }

    pub fn with_lease_from(mut self, start: DateTime<Utc>, lease_secs: u64) -> Self {
        if lease_secs != 0 {
            let secs = i64::try_from(lease_secs).unwrap_or(i64::MAX);
            self.expire_time = Duration::try_seconds(secs).and_then(|d| start.checked_add_signed(d));
        }
        self
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_time.is_some_and(|t| t <= now)
    }
}
