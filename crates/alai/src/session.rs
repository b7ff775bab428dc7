//! Auth session state for the presentation service.

use std::time::{Duration, SystemTime};

/// Refresh the access token when it expires within this margin.
const EXPIRY_MARGIN: Duration = Duration::from_secs(300);

/// Token pair issued by the auth endpoint, plus its expiry.
///
/// Lives only for the duration of one run; nothing is persisted.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token for API calls.
    pub access_token: String,

    /// Token usable to obtain a fresh access token.
    pub refresh_token: Option<String>,

    /// When the access token expires.
    pub expires_at: SystemTime,
}

impl Session {
    /// Build a session from an auth response, anchored at `now`.
    pub fn new(
        access_token: String,
        refresh_token: Option<String>,
        expires_in_secs: u64,
        now: SystemTime,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_at: now + Duration::from_secs(expires_in_secs),
        }
    }

    /// True when the access token is expired or within the refresh margin.
    pub fn is_expiring(&self, now: SystemTime) -> bool {
        match self.expires_at.duration_since(now) {
            Ok(remaining) => remaining <= EXPIRY_MARGIN,
            Err(_) => true,
        }
    }
}
