//! Process-local answer cache.
//!
//! Entries live in a `RwLock<HashMap>` for the lifetime of the process.
//! With a TTL configured, entries older than the TTL read as absent and are
//! dropped on the next write.

use qna_application::AnswerCache;
use qna_domain::ConversationId;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};
use tracing::trace;

struct Entry {
    answer: String,
    stored_at: Instant,
}

#[derive(Default)]
pub struct InMemoryAnswerCache {
    entries: RwLock<HashMap<ConversationId, Entry>>,
    ttl: Option<Duration>,
}

impl InMemoryAnswerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache whose entries expire `ttl` after they were stored.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::default(),
            ttl: Some(ttl),
        }
    }

    /// Number of stored entries, expired ones included until evicted.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_live(&self, entry: &Entry) -> bool {
        self.ttl
            .is_none_or(|ttl| entry.stored_at.elapsed() < ttl)
    }
}

impl AnswerCache for InMemoryAnswerCache {
    fn put(&self, id: &ConversationId, answer: String) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if self.ttl.is_some() {
            entries.retain(|_, entry| self.is_live(entry));
        }

        let replaced = entries
            .insert(
                id.clone(),
                Entry {
                    answer,
                    stored_at: Instant::now(),
                },
            )
            .is_some();
        trace!(conversation_id = %id, replaced, "Answer cached");
    }

    fn get(&self, id: &ConversationId) -> Option<String> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        entries
            .get(id)
            .filter(|entry| self.is_live(entry))
            .map(|entry| entry.answer.clone())
    }

    fn delete(&self, id: &ConversationId) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
    }

    fn delete_if(&self, id: &ConversationId, expected: &str) -> bool {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let matches = entries
            .get(id)
            .is_some_and(|entry| entry.answer == expected);
        if matches {
            entries.remove(id);
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn id(value: &str) -> ConversationId {
        ConversationId::new(value).unwrap()
    }

    #[test]
    fn test_put_get_delete() {
        let cache = InMemoryAnswerCache::new();
        assert!(cache.is_empty());

        cache.put(&id("c-1"), "first".to_string());
        assert_eq!(cache.get(&id("c-1")).as_deref(), Some("first"));
        assert_eq!(cache.get(&id("c-2")), None);

        cache.delete(&id("c-1"));
        assert_eq!(cache.get(&id("c-1")), None);
        cache.delete(&id("c-1"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_replaces_existing_entry() {
        let cache = InMemoryAnswerCache::new();
        cache.put(&id("c-1"), "old".to_string());
        cache.put(&id("c-1"), "new".to_string());

        assert_eq!(cache.get(&id("c-1")).as_deref(), Some("new"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_delete_if_leaves_newer_answer() {
        let cache = InMemoryAnswerCache::new();
        cache.put(&id("c-1"), "published".to_string());
        cache.put(&id("c-1"), "newer".to_string());

        assert!(!cache.delete_if(&id("c-1"), "published"));
        assert_eq!(cache.get(&id("c-1")).as_deref(), Some("newer"));

        assert!(cache.delete_if(&id("c-1"), "newer"));
        assert!(cache.is_empty());
        assert!(!cache.delete_if(&id("c-1"), "newer"));
    }

    #[test]
    fn test_expired_entries_read_as_absent() {
        let cache = InMemoryAnswerCache::with_ttl(Duration::from_millis(20));
        cache.put(&id("c-1"), "answer".to_string());
        assert!(cache.get(&id("c-1")).is_some());

        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.get(&id("c-1")), None);

        cache.put(&id("c-2"), "other".to_string());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_concurrent_writers_on_distinct_keys() {
        let cache = Arc::new(InMemoryAnswerCache::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for round in 0..50 {
                        cache.put(&id(&format!("c-{n}")), format!("{n}:{round}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 8);
        assert_eq!(cache.get(&id("c-3")).as_deref(), Some("3:49"));
    }
}
