//! In-memory message storage.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A stored message record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Server-generated unique identifier.
    pub id: String,
    /// Client-supplied message text.
    pub content: String,
    /// ISO-8601 UTC timestamp, set once at creation.
    pub created_at: String,
}

/// Process-wide in-memory message collection.
///
/// Backed by a `Vec` behind an async `RwLock`: insertion order is preserved
/// for listing, and the lock guarantees that concurrent creates never lose
/// an append and that readers never observe a partially-inserted record.
/// Cloning is cheap and shares the same underlying collection.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MessageStore {
    /// Create a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the collection.
    pub async fn insert(&self, message: Message) {
        self.messages.write().await.push(message);
    }

    /// Return all records in insertion order.
    pub async fn find_all(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    /// Return the number of stored records.
    pub async fn count(&self) -> usize {
        self.messages.read().await.len()
    }

    /// Find a record by exact (case-sensitive) id match.
    pub async fn find_by_id(&self, id: &str) -> Option<Message> {
        self.messages
            .read()
            .await
            .iter()
            .find(|msg| msg.id == id)
            .cloned()
    }

    /// Remove the record with the given id, returning it if it existed.
    ///
    /// Removes at most one record and preserves the relative order of the
    /// remaining records.
    pub async fn remove_by_id(&self, id: &str) -> Option<Message> {
        let mut messages = self.messages.write().await;
        let index = messages.iter().position(|msg| msg.id == id)?;
        Some(messages.remove(index))
    }

    /// Remove all records. Used to reset state between tests.
    pub async fn clear(&self) {
        self.messages.write().await.clear();
    }
}
