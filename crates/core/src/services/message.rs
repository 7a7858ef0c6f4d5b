//! Message service.

use pinboard_common::{IdGenerator, utc_now_iso};

use crate::store::{Message, MessageStore};

/// Service for managing messages.
#[derive(Debug, Clone)]
pub struct MessageService {
    store: MessageStore,
    id_gen: IdGenerator,
}

impl MessageService {
    /// Create a new message service.
    #[must_use]
    pub const fn new(store: MessageStore) -> Self {
        Self {
            store,
            id_gen: IdGenerator::new(),
        }
    }

    /// Create a new message and append it to the collection.
    ///
    /// The id and `created_at` timestamp are generated here; both are
    /// immutable for the lifetime of the record.
    pub async fn create(&self, content: String) -> Message {
        let message = Message {
            id: self.id_gen.generate(),
            content,
            created_at: utc_now_iso(),
        };
        self.store.insert(message.clone()).await;
        message
    }

    /// List all messages in insertion order.
    pub async fn list(&self) -> Vec<Message> {
        self.store.find_all().await
    }

    /// Count all messages.
    pub async fn count(&self) -> usize {
        self.store.count().await
    }

    /// Get a message by id.
    pub async fn get_by_id(&self, id: &str) -> Option<Message> {
        self.store.find_by_id(id).await
    }

    /// Delete a message by id, returning the deleted record if it existed.
    pub async fn delete_by_id(&self, id: &str) -> Option<Message> {
        self.store.remove_by_id(id).await
    }

    /// Reset the collection to empty. Used for test isolation.
    pub async fn reset(&self) {
        self.store.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> MessageService {
        MessageService::new(MessageStore::new())
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let service = service();

        let created = service.create("hello".to_string()).await;
        let fetched = service.get_by_id(&created.id).await;

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let service = service();

        let first = service.create("a".to_string()).await;
        let second = service.create("a".to_string()).await;

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_list_matches_creation_order() {
        let service = service();
        for content in ["a", "b", "c"] {
            service.create(content.to_string()).await;
        }

        let listed = service.list().await;
        assert_eq!(service.count().await, 3);
        let contents: Vec<&str> = listed.iter().map(|msg| msg.content.as_str()).collect();
        assert_eq!(contents, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let service = service();
        let keep = service.create("keep".to_string()).await;
        let doomed = service.create("drop".to_string()).await;

        let deleted = service.delete_by_id(&doomed.id).await;

        assert_eq!(deleted.map(|msg| msg.id), Some(doomed.id.clone()));
        assert!(service.get_by_id(&doomed.id).await.is_none());
        assert!(service.get_by_id(&keep.id).await.is_some());
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_id_returns_none() {
        let service = service();
        service.create("a".to_string()).await;

        assert!(service.delete_by_id("does-not-exist").await.is_none());
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn test_reset_clears_collection() {
        let service = service();
        service.create("a".to_string()).await;
        service.reset().await;

        assert_eq!(service.count().await, 0);
    }
}
