//! In-memory demo sessions keyed by an opaque cookie token.

pub mod auth;
pub mod cookies;
pub mod middleware;

pub use auth::{sign_in, sign_out};

use shared_types::SessionUser;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Sessions live as long as their cookie.
pub const SESSION_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Debug, Clone)]
struct SessionEntry {
    user: SessionUser,
    issued_at: Instant,
}

/// Process-wide session table. Cloning shares the same table.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
    ttl: Option<Duration>,
}

/// The session resolved for the current request by the middleware.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSession {
    pub token: String,
    pub user: SessionUser,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(SESSION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            ttl: Some(ttl),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_live(&self, entry: &SessionEntry) -> bool {
        self.ttl.map_or(true, |ttl| entry.issued_at.elapsed() < ttl)
    }

    /// Start a session for `user` and return its token.
    pub fn create(&self, user: SessionUser) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.lock().insert(
            token.clone(),
            SessionEntry {
                user,
                issued_at: Instant::now(),
            },
        );
        token
    }

    /// Resolve a token. Expired sessions are dropped on access.
    pub fn get(&self, token: &str) -> Option<SessionUser> {
        let mut sessions = self.lock();
        let entry = sessions.get(token)?;
        if self.is_live(entry) {
            return Some(entry.user.clone());
        }
        sessions.remove(token);
        None
    }

    pub fn remove(&self, token: &str) -> Option<SessionUser> {
        self.lock().remove(token).map(|entry| entry.user)
    }

    /// Drop every expired session and return how many were removed.
    pub fn prune_expired(&self) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        let ttl = self.ttl;
        sessions.retain(|_, entry| ttl.map_or(true, |ttl| entry.issued_at.elapsed() < ttl));
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::DEMO_ACCOUNTS;

    #[test]
    fn tokens_are_unique_per_login() {
        let store = SessionStore::new();
        let user = DEMO_ACCOUNTS[0].to_session_user();
        let a = store.create(user.clone());
        let b = store.create(user);
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clones_share_the_table() {
        let store = SessionStore::new();
        let token = store.clone().create(DEMO_ACCOUNTS[2].to_session_user());
        assert_eq!(store.get(&token).unwrap().email, "customer@insurance.com");
    }

    #[test]
    fn expired_sessions_are_forgotten() {
        let store = SessionStore::with_ttl(Duration::ZERO);
        let token = store.create(DEMO_ACCOUNTS[1].to_session_user());
        assert!(store.get(&token).is_none());
        assert!(store.is_empty());

        store.create(DEMO_ACCOUNTS[1].to_session_user());
        assert_eq!(store.prune_expired(), 1);
    }
}
