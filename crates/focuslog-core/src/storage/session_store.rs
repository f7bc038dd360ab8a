//! Append-only log of completed focus sessions.
//!
//! The whole log lives under a single named record as a JSON array.
//! Insertion order is completion order; entries are never rewritten.

use super::kv::KvStore;
use crate::error::StorageError;
use crate::session::FocusSession;

pub const SESSIONS_KEY: &str = "FOCUS_SESSIONS";

pub struct SessionStore<K: KvStore> {
    kv: K,
}

impl<K: KvStore> SessionStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Load every stored session, oldest first.
    ///
    /// An absent record is an empty log. Undecodable data is an error, so
    /// callers can tell "empty" from "unreadable".
    pub fn load(&self) -> Result<Vec<FocusSession>, StorageError> {
        match self.kv.get(SESSIONS_KEY)? {
            None => Ok(Vec::new()),
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
                key: SESSIONS_KEY.to_string(),
                source,
            }),
        }
    }

    /// Append one session and write the full log back.
    pub fn append(&self, session: FocusSession) -> Result<(), StorageError> {
        let mut sessions = self.load()?;
        let id = session.id.clone();
        sessions.push(session);
        let bytes = serde_json::to_vec(&sessions).map_err(|source| StorageError::Encode {
            key: SESSIONS_KEY.to_string(),
            source,
        })?;
        self.kv.set(SESSIONS_KEY, &bytes)?;
        tracing::info!(id = %id, total = sessions.len(), "session appended");
        Ok(())
    }
}
