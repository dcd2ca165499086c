//! Ordered, role-tagged conversation transcript

use aetheria_core::Message;
use serde::Serialize;
use tracing::trace;

/// The ordered messages exchanged in a session
///
/// Index 0 always holds the system instruction. Nothing after it can be a
/// system message, and eviction never touches it; the only way to change it
/// is [`Transcript::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create a transcript holding only the given system instruction
    pub fn new(system_instruction: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_instruction)],
        }
    }

    /// Append a user message
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Append an assistant message
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// The pinned system message
    pub fn system(&self) -> &Message {
        &self.messages[0]
    }

    /// All messages, system message first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The conversation without the system message
    pub fn history(&self) -> &[Message] {
        &self.messages[1..]
    }

    /// The most recent message
    pub fn last(&self) -> &Message {
        // Never empty: index 0 is pinned.
        &self.messages[self.messages.len() - 1]
    }

    /// Number of messages, system message included
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript holds nothing but the system message
    pub fn is_empty(&self) -> bool {
        self.messages.len() == 1
    }

    /// Remove the oldest non-system message
    ///
    /// Returns `None` when only the system message is left.
    pub fn evict_oldest(&mut self) -> Option<Message> {
        if self.messages.len() <= 1 {
            return None;
        }
        let evicted = self.messages.remove(1);
        trace!(role = %evicted.role, "evicted oldest transcript message");
        Some(evicted)
    }

    /// Drop the whole history and pin a new system instruction
    pub fn reset(&mut self, system_instruction: impl Into<String>) {
        self.messages.clear();
        self.messages.push(Message::system(system_instruction));
    }
}
