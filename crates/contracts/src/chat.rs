//! Conversation aggregate: identifiers, roles, messages and title rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Placeholder title a conversation carries until one is derived from its
/// first user message.
pub const DEFAULT_TITLE: &str = "New Conversation";

/// Maximum number of characters a derived title keeps before truncation.
pub const TITLE_MAX_CHARS: usize = 50;

/// ID type for the Conversation aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub Uuid);

impl ConversationId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ConversationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A single chat message. Immutable once appended to a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Source references, assistant messages only.
    #[serde(default)]
    pub citations: Vec<String>,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            citations: Vec::new(),
        }
    }

    /// Create an assistant message with its citations
    pub fn assistant(text: impl Into<String>, citations: Vec<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            citations,
        }
    }
}

/// Conversation aggregate: an ordered, append-only message history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create an empty conversation with a fresh id and the default title.
    pub fn new() -> Self {
        Self {
            id: ConversationId::new_v4(),
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// True while the title has never been derived or set.
    pub fn has_default_title(&self) -> bool {
        self.title == DEFAULT_TITLE
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive a conversation title from its first user message.
///
/// Truncates to [`TITLE_MAX_CHARS`] characters with a trailing `"..."`
/// marker; falls back to [`DEFAULT_TITLE`] while no user message exists.
/// Truncation counts `char`s, never bytes, so multi-byte text stays intact.
pub fn derive_title(messages: &[ChatMessage]) -> String {
    let Some(first_user) = messages.iter().find(|m| m.role == ChatRole::User) else {
        return DEFAULT_TITLE.to_string();
    };
    let total = first_user.text.chars().count();
    if total <= TITLE_MAX_CHARS {
        return first_user.text.clone();
    }
    let truncated: String = first_user.text.chars().take(TITLE_MAX_CHARS).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_role_round_trip() {
        assert_eq!(ChatRole::from_str("user"), Ok(ChatRole::User));
        assert_eq!(ChatRole::from_str("assistant"), Ok(ChatRole::Assistant));
        assert_eq!(ChatRole::User.as_str(), "user");
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
        assert!(ChatRole::from_str("system").is_err());
    }

    #[test]
    fn test_message_serde_defaults_citations() {
        let msg: ChatMessage = serde_json::from_str(r#"{"role":"user","text":"hi"}"#).unwrap();
        assert_eq!(msg.role, ChatRole::User);
        assert!(msg.citations.is_empty());
    }

    #[test]
    fn test_new_conversation_is_empty_with_default_title() {
        let conv = Conversation::new();
        assert!(conv.messages.is_empty());
        assert!(conv.has_default_title());
    }

    #[test]
    fn test_derive_title_without_user_message() {
        assert_eq!(derive_title(&[]), DEFAULT_TITLE);
        let only_assistant = vec![ChatMessage::assistant("hello", vec![])];
        assert_eq!(derive_title(&only_assistant), DEFAULT_TITLE);
    }

    #[test]
    fn test_derive_title_short_text_untouched() {
        let messages = vec![ChatMessage::user("What is BFS?")];
        assert_eq!(derive_title(&messages), "What is BFS?");
    }

    #[test]
    fn test_derive_title_truncates_with_ellipsis() {
        let long = "a".repeat(80);
        let messages = vec![ChatMessage::user(long)];
        let title = derive_title(&messages);
        assert!(title.ends_with("..."));
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 3);
    }

    #[test]
    fn test_derive_title_exactly_fifty_chars_not_truncated() {
        let text = "b".repeat(TITLE_MAX_CHARS);
        let messages = vec![ChatMessage::user(text.clone())];
        assert_eq!(derive_title(&messages), text);
    }

    #[test]
    fn test_derive_title_counts_chars_not_bytes() {
        let hebrew = "ש".repeat(60);
        let messages = vec![ChatMessage::user(hebrew)];
        let title = derive_title(&messages);
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 3);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn test_derive_title_is_idempotent() {
        let messages = vec![ChatMessage::user("x".repeat(70))];
        assert_eq!(derive_title(&messages), derive_title(&messages));
    }

    #[test]
    fn test_derive_title_skips_leading_assistant_messages() {
        let messages = vec![
            ChatMessage::assistant("welcome", vec![]),
            ChatMessage::user("explain DFS"),
        ];
        assert_eq!(derive_title(&messages), "explain DFS");
    }

    #[test]
    fn test_conversation_id_string_round_trip() {
        let id = ConversationId::new_v4();
        let parsed = ConversationId::from_string(&id.as_string()).unwrap();
        assert_eq!(id, parsed);
        assert!(ConversationId::from_string("not-a-uuid").is_err());
    }
}
