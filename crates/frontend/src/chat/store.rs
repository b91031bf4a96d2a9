//! In-memory conversation store.
//!
//! Owns the conversation list as plain data so every rule about it (append
//! order, title derivation, citation lookup) can be tested without a
//! reactive runtime. The reactive layer wraps the whole store in one signal.

use contracts::chat::{derive_title, ChatMessage, ChatRole, Conversation, ConversationId};

#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All conversations, newest first.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, id: &ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| &c.id == id)
    }

    /// Insert a conversation at the front of the list.
    pub fn insert_front(&mut self, conversation: Conversation) {
        self.conversations.insert(0, conversation);
    }

    pub fn message_count(&self, id: &ConversationId) -> usize {
        self.get(id).map(|c| c.messages.len()).unwrap_or(0)
    }

    pub fn messages_of(&self, id: &ConversationId) -> Vec<ChatMessage> {
        self.get(id).map(|c| c.messages.clone()).unwrap_or_default()
    }

    /// Append a user message. Unknown ids are ignored; history only grows.
    pub fn append_user_message(&mut self, id: &ConversationId, text: impl Into<String>) {
        if let Some(conv) = self.conversations.iter_mut().find(|c| &c.id == id) {
            conv.messages.push(ChatMessage::user(text));
        }
    }

    /// Append an assistant message with its citations.
    pub fn append_assistant_message(
        &mut self,
        id: &ConversationId,
        text: impl Into<String>,
        citations: Vec<String>,
    ) {
        if let Some(conv) = self.conversations.iter_mut().find(|c| &c.id == id) {
            conv.messages.push(ChatMessage::assistant(text, citations));
        }
    }

    /// Derive the title from the first user message, but only while the
    /// conversation still carries the default placeholder. A title derived
    /// once is never overwritten.
    pub fn maybe_update_title(&mut self, id: &ConversationId) {
        if let Some(conv) = self.conversations.iter_mut().find(|c| &c.id == id) {
            if conv.has_default_title() {
                conv.title = derive_title(&conv.messages);
            }
        }
    }

    /// Citations of the newest assistant message in the conversation.
    pub fn last_assistant_citations(&self, id: &ConversationId) -> Vec<String> {
        self.get(id)
            .and_then(|c| {
                c.messages
                    .iter()
                    .rev()
                    .find(|m| m.role == ChatRole::Assistant)
            })
            .map(|m| m.citations.clone())
            .unwrap_or_default()
    }
}
