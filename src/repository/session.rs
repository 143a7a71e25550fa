//! Session tokens handed to the repository explicitly.

use super::error::RepositoryError;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Opaque bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the caller knows about who is asking. Passed to every repository call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    token: Option<AuthToken>,
}

impl SessionContext {
    pub fn new(token: AuthToken) -> Self {
        Self { token: Some(token) }
    }

    /// A session that never logged in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }
}

/// Issues tokens and maps them back to usernames.
///
/// Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<AuthToken, String>>>,
    next_token: Arc<AtomicU64>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, username: impl Into<String>) -> SessionContext {
        let username = username.into();
        let token = AuthToken(format!(
            "token_{}",
            self.next_token.fetch_add(1, Ordering::Relaxed) + 1
        ));
        info!(%username, "Session opened");
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), username);
        SessionContext::new(token)
    }

    /// The username behind `session`.
    pub fn resolve(&self, session: &SessionContext) -> Result<String, RepositoryError> {
        let token = session
            .token()
            .ok_or_else(|| RepositoryError::Auth("missing session token".to_string()))?;
        let sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        match sessions.get(token) {
            Some(username) => Ok(username.clone()),
            None => {
                debug!(%token, "Unknown token");
                Err(RepositoryError::Auth("invalid session token".to_string()))
            }
        }
    }

    /// Returns whether the token was live.
    pub fn revoke(&self, session: &SessionContext) -> bool {
        let Some(token) = session.token() else {
            return false;
        };
        let removed = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
        if let Some(username) = &removed {
            info!(%username, "Session revoked");
        }
        removed.is_some()
    }
}
