//! # Session persistence
//!
//! [`SessionStore`] keeps the authenticated [`Session`] in two durable keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] | the raw bearer token |
//! | [`USER_KEY`] | the [`UserInfo`] record as JSON |
//!
//! The two keys are treated as a unit. `restore` only returns a session when
//! both keys are present and the user record decodes; anything else wipes both
//! keys. `persist` writes both keys or neither.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::models::{Session, UserInfo};

pub const TOKEN_KEY: &str = "attendance.token";
pub const USER_KEY: &str = "attendance.user";

#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted session, clearing both keys when it is incomplete
    /// or corrupt.
    pub fn restore(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY);
        let user_raw = self.store.get(USER_KEY);

        match (token, user_raw) {
            (None, None) => None,
            (Some(token), Some(raw)) if !token.is_empty() => {
                match serde_json::from_str::<UserInfo>(&raw) {
                    Ok(user) => Some(Session::new(user, token)),
                    Err(e) => {
                        tracing::warn!("Discarding persisted session: {e}");
                        self.clear();
                        None
                    }
                }
            }
            _ => {
                tracing::warn!("Discarding incomplete persisted session");
                self.clear();
                None
            }
        }
    }

    /// Write the session, or clear it when `None`.
    pub fn persist(&self, session: Option<&Session>) -> Result<(), StoreError> {
        let Some(session) = session else {
            self.clear();
            return Ok(());
        };

        let user_json = serde_json::to_string(&session.user)?;
        self.store.set(TOKEN_KEY, &session.token)?;
        if let Err(e) = self.store.set(USER_KEY, &user_json) {
            self.store.remove(TOKEN_KEY);
            return Err(e);
        }
        Ok(())
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Role;

    fn sample_session() -> Session {
        Session::new(
            UserInfo {
                id: 7,
                name: "Deniz".to_string(),
                email: "teacher@example.com".to_string(),
                role: Role::Teacher,
            },
            "tok-123".to_string(),
        )
    }

    #[test]
    fn test_persist_and_restore() {
        let kv = MemoryStore::new();
        let sessions = SessionStore::new(kv.clone());

        assert!(sessions.restore().is_none());

        let session = sample_session();
        sessions.persist(Some(&session)).unwrap();
        assert!(kv.contains(TOKEN_KEY));
        assert!(kv.contains(USER_KEY));

        let restored = sessions.restore().unwrap();
        assert_eq!(restored, session);
        assert_eq!(restored.role(), Role::Teacher);
    }

    #[test]
    fn test_persist_none_clears_both_keys() {
        let kv = MemoryStore::new();
        let sessions = SessionStore::new(kv.clone());
        sessions.persist(Some(&sample_session())).unwrap();

        sessions.persist(None).unwrap();
        assert!(!kv.contains(TOKEN_KEY));
        assert!(!kv.contains(USER_KEY));
        assert!(sessions.restore().is_none());
    }

    #[test]
    fn test_corrupt_user_clears_both_keys() {
        let kv = MemoryStore::new();
        kv.set(TOKEN_KEY, "tok").unwrap();
        kv.set(USER_KEY, "{not json").unwrap();

        let sessions = SessionStore::new(kv.clone());
        assert!(sessions.restore().is_none());
        assert!(!kv.contains(TOKEN_KEY));
        assert!(!kv.contains(USER_KEY));
    }

    #[test]
    fn test_unknown_role_is_corrupt() {
        let kv = MemoryStore::new();
        kv.set(TOKEN_KEY, "tok").unwrap();
        kv.set(USER_KEY, r#"{"id":1,"name":"x","role":"janitor"}"#).unwrap();

        let sessions = SessionStore::new(kv.clone());
        assert!(sessions.restore().is_none());
        assert!(!kv.contains(TOKEN_KEY));
    }

    #[test]
    fn test_lone_token_clears_it() {
        let kv = MemoryStore::new();
        kv.set(TOKEN_KEY, "tok").unwrap();

        let sessions = SessionStore::new(kv.clone());
        assert!(sessions.restore().is_none());
        assert!(!kv.contains(TOKEN_KEY));
    }

    #[test]
    fn test_lone_user_clears_it() {
        let kv = MemoryStore::new();
        let user = serde_json::to_string(&sample_session().user).unwrap();
        kv.set(USER_KEY, &user).unwrap();

        let sessions = SessionStore::new(kv.clone());
        assert!(sessions.restore().is_none());
        assert!(!kv.contains(USER_KEY));
    }

    #[test]
    fn test_failed_user_write_rolls_back_token() {
        let kv = MemoryStore::new();
        kv.fail_writes_to(USER_KEY);

        let sessions = SessionStore::new(kv.clone());
        assert!(sessions.persist(Some(&sample_session())).is_err());
        assert!(!kv.contains(TOKEN_KEY));
        assert!(!kv.contains(USER_KEY));
    }
}
