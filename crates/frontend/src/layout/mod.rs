pub mod context_panel;
pub mod header;
pub mod input;
pub mod messages;
pub mod sidebar;

pub use context_panel::ContextPanel;
pub use header::Header;
pub use input::InputBar;
pub use messages::MessageThread;
pub use sidebar::ChatSidebar;
