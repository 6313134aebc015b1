//! In-memory implementation of the SessionStore trait.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use deepseek_client::ChatMessage;
use tokio::sync::RwLock;
use tracing::debug;

use super::SessionStore;

type HistoryMap = HashMap<i64, Vec<ChatMessage>>;

/// Process-wide conversation history; cheap to clone, shared via `Arc<RwLock<..>>`.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    histories: Arc<RwLock<HistoryMap>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            histories: Arc::new(RwLock::new(HistoryMap::new())),
        }
    }

    /// Number of chats with at least one recorded turn.
    pub async fn chat_count(&self) -> usize {
        let histories = self.histories.read().await;
        histories.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.chat_count().await == 0
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn history(&self, chat_id: i64) -> Result<Vec<ChatMessage>, anyhow::Error> {
        let histories = self.histories.read().await;
        let turns = histories.get(&chat_id).cloned().unwrap_or_default();
        debug!(chat_id, turns = turns.len(), "session history read");
        Ok(turns)
    }

    async fn append(&self, chat_id: i64, turn: ChatMessage) -> Result<(), anyhow::Error> {
        let mut histories = self.histories.write().await;
        let turns = histories.entry(chat_id).or_default();
        turns.push(turn);
        debug!(chat_id, turns = turns.len(), "session turn appended");
        Ok(())
    }

    async fn clear(&self, chat_id: i64) -> Result<(), anyhow::Error> {
        let mut histories = self.histories.write().await;
        let removed = histories.remove(&chat_id).is_some();
        debug!(chat_id, removed, "session history cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use deepseek_client::MessageRole;

    use super::*;

    #[tokio::test]
    async fn unseen_chat_has_empty_history() {
        let store = InMemorySessionStore::new();
        assert!(store.history(42).await.unwrap().is_empty());
        // Reading must not create an entry.
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn turns_accumulate_in_call_order() {
        let store = InMemorySessionStore::new();
        store.append(1, ChatMessage::user("first")).await.unwrap();
        store.append(1, ChatMessage::assistant("second")).await.unwrap();
        store.append(1, ChatMessage::user("third")).await.unwrap();

        let turns = store.history(1).await.unwrap();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].content, "first");
        assert_eq!(turns[0].role, MessageRole::User);
        assert_eq!(turns[1].content, "second");
        assert_eq!(turns[1].role, MessageRole::Assistant);
        assert_eq!(turns[2].content, "third");
    }

    #[tokio::test]
    async fn chats_are_isolated() {
        let store = InMemorySessionStore::new();
        store.append(1, ChatMessage::user("for one")).await.unwrap();
        store.append(2, ChatMessage::user("for two")).await.unwrap();

        assert_eq!(store.history(1).await.unwrap().len(), 1);
        assert_eq!(store.history(2).await.unwrap().len(), 1);
        assert_eq!(store.history(1).await.unwrap()[0].content, "for one");
    }

    #[tokio::test]
    async fn clear_drops_only_the_given_chat() {
        let store = InMemorySessionStore::new();
        store.append(1, ChatMessage::user("a")).await.unwrap();
        store.append(2, ChatMessage::user("b")).await.unwrap();

        store.clear(1).await.unwrap();

        assert!(store.history(1).await.unwrap().is_empty());
        assert_eq!(store.history(2).await.unwrap().len(), 1);
        assert_eq!(store.chat_count().await, 1);
    }

    #[tokio::test]
    async fn clear_of_unseen_chat_is_a_no_op() {
        let store = InMemorySessionStore::new();
        store.clear(99).await.unwrap();
        assert!(store.is_empty().await);
    }
}
