//! Conversation list with the "new chat" action.

use crate::chat::ChatContext;
use leptos::prelude::*;

#[component]
pub fn ChatSidebar() -> impl IntoView {
    let ctx = use_context::<ChatContext>().expect("ChatContext context not found");

    view! {
        <aside class="chat-sidebar">
            <div class="sidebar-header">
                <button class="new-chat-btn" on:click=move |_| {
                    ctx.new_conversation();
                }>
                    "+ New Chat"
                </button>
            </div>

            <div class="conversations-list">
                {move || {
                    ctx.store
                        .with(|s| s.conversations().is_empty())
                        .then(|| {
                            view! {
                                <div class="empty-conversations">"No conversations yet"</div>
                            }
                        })
                }}
                <For
                    each=move || ctx.store.with(|s| s.conversations().to_vec())
                    key=|conversation| conversation.id.as_string()
                    let:conversation
                >
                    {{
                        let id = conversation.id;
                        // Title and count are read back through the store so
                        // the row updates while its key stays stable.
                        let title = move || {
                            ctx.store
                                .with(|s| s.get(&id).map(|c| c.title.clone()).unwrap_or_default())
                        };
                        let count = move || ctx.store.with(|s| s.message_count(&id));
                        view! {
                            <div
                                class=move || {
                                    if ctx.active_id.get() == Some(id) {
                                        "conversation-item active"
                                    } else {
                                        "conversation-item"
                                    }
                                }
                                on:click=move |_| ctx.select_conversation(id)
                            >
                                <div class="conversation-title">{title}</div>
                                <div class="conversation-meta">
                                    {move || format!("{} messages", count())}
                                </div>
                            </div>
                        }
                    }}
                </For>
            </div>
        </aside>
    }
}
