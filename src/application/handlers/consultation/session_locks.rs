//! SessionLocks - Per-session serialization of read-modify-write cycles.
//!
//! The repository port only guarantees atomic single-key reads and writes.
//! Two submissions for the same session that interleave their load and save
//! would lose one batch of answers, so submissions take the session's lock
//! for the whole cycle. Different sessions never contend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::SessionId;

/// Registry of one async mutex per session id.
#[derive(Debug, Default)]
pub struct SessionLocks {
    locks: Mutex<HashMap<SessionId, Arc<AsyncMutex<()>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `session_id`.
    ///
    /// The lock is released when the returned guard is dropped.
    pub async fn acquire(&self, session_id: &SessionId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries only referenced by the map have no holder or waiter.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks
                .entry(session_id.clone())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Number of sessions with a live lock entry.
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
