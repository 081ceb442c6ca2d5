//! Persistence for the current session.
//!
//! The session object lives under a single `sessionStorage` key; every read
//! and write goes through this module so no other code touches raw storage
//! keys. `localStorage` is only ever written to by old builds; the stray keys
//! they left behind are deleted whenever a session is cleared.

use common::session::{Session, SESSION_TTL_MS};
use gloo_storage::{LocalStorage, SessionStorage, Storage};

const SESSION_KEY: &str = "rpd.session";

const LEGACY_LOCAL_KEYS: [&str; 3] = ["authToken", "refreshToken", "loginTimestamp"];

/// Milliseconds since the Unix epoch, from the browser clock.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn load() -> Option<Session> {
    SessionStorage::get(SESSION_KEY).ok()
}

pub fn save(session: &Session) {
    if let Err(err) = SessionStorage::set(SESSION_KEY, session) {
        gloo_console::error!(format!("failed to persist session: {err}"));
    }
}

pub fn clear() {
    SessionStorage::delete(SESSION_KEY);
    for key in LEGACY_LOCAL_KEYS {
        LocalStorage::delete(key);
    }
}

/// Bearer token for the request interceptor, if a session is stored.
pub fn access_token() -> Option<String> {
    load().map(|session| session.access_token)
}

/// Rewrites the stored expiry after detected user activity.
pub fn extend_current() {
    if let Some(mut session) = load() {
        session.extend(now_ms(), SESSION_TTL_MS);
        save(&session);
    }
}
