//! Conversation answer cache port
//!
//! Maps a conversation id to the answer most recently generated for it, so
//! the `post` phase can publish what the `ask` phase produced.

use qna_domain::ConversationId;

/// Process-wide store of generated answers, keyed by conversation id.
///
/// Implementations must be safe to call from overlapping requests. Writes to
/// the same key follow last-write-wins; there is no cross-key locking.
pub trait AnswerCache: Send + Sync {
    /// Store `answer`, replacing any existing entry.
    fn put(&self, id: &ConversationId, answer: String);

    /// Look up the live entry for `id`.
    fn get(&self, id: &ConversationId) -> Option<String>;

    /// Remove the entry for `id`. No-op when absent.
    fn delete(&self, id: &ConversationId);

    /// Remove the entry for `id` only while it still holds `expected`.
    ///
    /// Returns whether an entry was removed. A newer answer stored under the
    /// same id in the meantime is left in place.
    fn delete_if(&self, id: &ConversationId, expected: &str) -> bool;
}
