//! Session state and command handlers.
//!
//! One `ChatContext` is provided at the app root; components read signals
//! from it and trigger state transitions through its methods. All derived
//! data (active messages, citations) is recomputed from the store on read.

use contracts::api::BackendStatus;
use contracts::chat::{ChatMessage, Conversation, ConversationId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use super::error::UploadError;
use super::store::ConversationStore;

/// User-facing error when `/ask` fails, regardless of the exact cause.
const ASK_ERROR_MESSAGE: &str = "שגיאה בתקשורת עם השרת. בדוק שה-backend רץ ונסה שוב.";

/// Fallback when an upload fails without a server response.
const UPLOAD_ERROR_FALLBACK: &str = "שגיאה בהעלאת הקבצים";

/// Gate for question submission: non-blank input while no ask is in flight.
pub(crate) fn can_submit(input: &str, is_loading: bool) -> bool {
    !input.trim().is_empty() && !is_loading
}

#[derive(Clone, Copy)]
pub struct ChatContext {
    pub store: RwSignal<ConversationStore>,
    pub active_id: RwSignal<Option<ConversationId>>,
    pub input: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub backend_status: RwSignal<BackendStatus>,
    pub is_uploading: RwSignal<bool>,
    pub upload_error: RwSignal<Option<String>>,
    pub upload_success: RwSignal<Option<String>>,
}

impl ChatContext {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(ConversationStore::new()),
            active_id: RwSignal::new(None),
            input: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            backend_status: RwSignal::new(BackendStatus::Unknown),
            is_uploading: RwSignal::new(false),
            upload_error: RwSignal::new(None),
            upload_success: RwSignal::new(None),
        }
    }

    /// Create a fresh conversation, activate it and reset the input line.
    /// Returns the new id so the caller can target it immediately.
    pub fn new_conversation(&self) -> ConversationId {
        let conversation = Conversation::new();
        let id = conversation.id;
        self.store.update(|s| s.insert_front(conversation));
        self.active_id.set(Some(id));
        self.input.set(String::new());
        self.error.set(None);
        id
    }

    /// Switch the active conversation. Never touches message history.
    pub fn select_conversation(&self, id: ConversationId) {
        self.active_id.set(Some(id));
        self.input.set(String::new());
        self.error.set(None);
    }

    /// Submit the pending input as a question.
    ///
    /// Rejected outright while blank or while an ask is already in flight.
    /// The response is written back to the conversation id captured here,
    /// even if the user switches conversations before it arrives.
    pub fn submit(&self) {
        let text = self.input.get_untracked();
        if !can_submit(&text, self.is_loading.get_untracked()) {
            return;
        }
        let user_text = text.trim().to_string();

        let conversation_id = match self.active_id.get_untracked() {
            Some(id) => id,
            None => self.new_conversation(),
        };

        self.store
            .update(|s| s.append_user_message(&conversation_id, user_text.clone()));
        let first_round = self
            .store
            .with_untracked(|s| s.message_count(&conversation_id))
            == 1;

        self.input.set(String::new());
        self.error.set(None);
        self.is_loading.set(true);

        let ctx = *self;
        spawn_local(async move {
            match api::ask(&user_text).await {
                Ok(response) => {
                    let answer = response.answer_text();
                    let citations = response.citations;
                    ctx.store.update(|s| {
                        s.append_assistant_message(&conversation_id, answer, citations);
                        if first_round {
                            s.maybe_update_title(&conversation_id);
                        }
                    });
                }
                Err(e) => {
                    log::error!("ask failed: {e}");
                    ctx.error.set(Some(ASK_ERROR_MESSAGE.to_string()));
                }
            }
            // Cleared on every exit path.
            ctx.is_loading.set(false);
        });
    }

    /// Upload the selected course documents. An empty selection is a no-op.
    pub fn upload_documents(&self, files: Vec<web_sys::File>) {
        if files.is_empty() {
            return;
        }

        self.is_uploading.set(true);
        self.upload_error.set(None);
        self.upload_success.set(None);

        let ctx = *self;
        spawn_local(async move {
            match api::upload_documents(files).await {
                Ok(response) => {
                    ctx.upload_success
                        .set(Some(format!("הקבצים עלו בהצלחה ({})", response.files.len())));
                }
                Err(e) => {
                    log::error!("upload failed: {e}");
                    let message = match &e {
                        UploadError::Http { .. } => e.to_string(),
                        UploadError::Network(_) => UPLOAD_ERROR_FALLBACK.to_string(),
                    };
                    ctx.upload_error.set(Some(message));
                }
            }
            ctx.is_uploading.set(false);
        });
    }

    /// One-shot health probe; only ever moves the status indicator.
    pub fn check_backend(&self) {
        let ctx = *self;
        spawn_local(async move {
            ctx.backend_status.set(api::check_health().await);
        });
    }

    /// The conversation currently shown, if any.
    pub fn active_conversation(&self) -> Option<Conversation> {
        let id = self.active_id.get()?;
        self.store.with(|s| s.get(&id).cloned())
    }

    /// Messages of the active conversation, empty when none is active.
    pub fn active_messages(&self) -> Vec<ChatMessage> {
        match self.active_id.get() {
            Some(id) => self.store.with(|s| s.messages_of(&id)),
            None => Vec::new(),
        }
    }

    /// Citations of the newest assistant message in the active conversation.
    pub fn active_citations(&self) -> Vec<String> {
        match self.active_id.get() {
            Some(id) => self.store.with(|s| s.last_assistant_citations(&id)),
            None => Vec::new(),
        }
    }
}

impl Default for ChatContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_submit_rejects_blank_input() {
        assert!(!can_submit("", false));
        assert!(!can_submit("   ", false));
        assert!(!can_submit("\n\t", false));
    }

    #[test]
    fn test_can_submit_rejects_while_loading() {
        assert!(!can_submit("What is BFS?", true));
    }

    #[test]
    fn test_can_submit_accepts_non_blank_while_idle() {
        assert!(can_submit("What is BFS?", false));
        assert!(can_submit("  padded  ", false));
    }
}
