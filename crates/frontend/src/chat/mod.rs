pub mod api;
pub mod context;
pub mod error;
pub mod store;

pub use context::ChatContext;
pub use store::ConversationStore;
