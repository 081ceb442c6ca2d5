use serde::{Deserialize, Serialize};

use crate::model::user::User;

/// How long a session lives after the last recorded activity.
pub const SESSION_TTL_MS: u64 = 30 * 60 * 1000;

/// Sessions with less than this left are refreshed in the background.
pub const REFRESH_WINDOW_MS: u64 = 5 * 60 * 1000;

/// Client-held session: bearer tokens plus an expiry timestamp, persisted in
/// browser session storage only. All time checks take the current time as a
/// parameter (milliseconds since the Unix epoch) so they stay independent of
/// the browser clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at_ms: u64,
    pub user: User,
}

impl Session {
    pub fn is_valid_at(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at_ms.saturating_sub(now_ms)
    }

    pub fn needs_refresh_at(&self, now_ms: u64) -> bool {
        self.is_valid_at(now_ms) && self.remaining_ms(now_ms) < REFRESH_WINDOW_MS
    }

    /// Push the expiry out to `now + ttl`. Called on detected user activity;
    /// never shortens an expiry that is already further out.
    pub fn extend(&mut self, now_ms: u64, ttl_ms: u64) {
        self.expires_at_ms = self.expires_at_ms.max(now_ms + ttl_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::{User, UserRole};

    const NOW: u64 = 1_700_000_000_000;

    fn session(expires_at_ms: u64) -> Session {
        Session {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
            expires_at_ms,
            user: User {
                id: "u-1".into(),
                username: "tere".into(),
                role: UserRole::Admin,
            },
        }
    }

    #[test]
    fn expiry_in_the_past_is_invalid() {
        assert!(!session(NOW - 1).is_valid_at(NOW));
        assert!(!session(NOW).is_valid_at(NOW));
    }

    #[test]
    fn expiry_ten_minutes_out_is_valid() {
        let s = session(NOW + 10 * 60 * 1000);
        assert!(s.is_valid_at(NOW));
        assert_eq!(s.remaining_ms(NOW), 10 * 60 * 1000);
    }

    #[test]
    fn refresh_window_applies_only_while_valid() {
        assert!(session(NOW + 60 * 1000).needs_refresh_at(NOW));
        assert!(!session(NOW + 10 * 60 * 1000).needs_refresh_at(NOW));
        assert!(!session(NOW - 1).needs_refresh_at(NOW));
    }

    #[test]
    fn activity_extends_but_never_shortens() {
        let mut s = session(NOW + 1000);
        s.extend(NOW, SESSION_TTL_MS);
        assert_eq!(s.expires_at_ms, NOW + SESSION_TTL_MS);

        let far = NOW + 2 * SESSION_TTL_MS;
        let mut s = session(far);
        s.extend(NOW, SESSION_TTL_MS);
        assert_eq!(s.expires_at_ms, far);
    }
}
