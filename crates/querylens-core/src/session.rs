//! Write-only session state capability.
//!
//! The resolver never reads session state. A caller that wants the resolved
//! intent recorded passes a sink in; locking and overwrite policy belong to
//! the sink.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;
use tracing::warn;

/// Key under which the resolved primary intent kind is written.
pub const RESOLVED_INTENT_KEY: &str = "resolved_intent";
/// Key under which the overall confidence is written.
pub const INTENT_CONFIDENCE_KEY: &str = "intent_confidence";

/// Narrow write-only view of a caller's session state.
pub trait SessionState: Send + Sync {
    /// Store a value under a key. Failures are the sink's concern.
    fn put(&self, key: &str, value: Value);
}

/// In-memory session state, last write wins.
#[derive(Debug, Default)]
pub struct MemorySessionState {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemorySessionState {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a stored value.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Copy of every stored entry.
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionState for MemorySessionState {
    fn put(&self, key: &str, value: Value) {
        let mut entries = self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("Session state lock was poisoned, recovering");
            poisoned.into_inner()
        });
        entries.insert(key.to_owned(), value);
    }
}
