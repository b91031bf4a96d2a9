//! Message thread: welcome state, role-tagged bubbles and typing indicator.

use crate::chat::ChatContext;
use contracts::chat::{ChatMessage, ChatRole};
use leptos::prelude::*;

#[component]
pub fn MessageThread() -> impl IntoView {
    let ctx = use_context::<ChatContext>().expect("ChatContext context not found");

    view! {
        <div class="messages">
            {move || {
                ctx.active_messages()
                    .is_empty()
                    .then(|| {
                        view! {
                            <div class="empty-state">
                                <h2>"ברוך הבא ל-Academic Copilot 🎓"</h2>
                                <p>"תכתוב שאלה על קורס, תרגיל או מושג שלא ברור לך."</p>
                                <ul>
                                    <li>"💡 \"תסביר לי את BFS ו-DFS\""</li>
                                    <li>"📚 \"סכם לי את שקופיות 10–20 במחברת של אלגוריתמים\""</li>
                                    <li>"✉️ \"תנסח מייל למתרגל לגבי שאלה במטלה\""</li>
                                </ul>
                            </div>
                        }
                    })
            }}

            {move || {
                ctx.active_messages()
                    .into_iter()
                    .map(|msg| view! { <MessageBubble msg=msg /> })
                    .collect_view()
            }}

            {move || {
                ctx.is_loading
                    .get()
                    .then(|| {
                        view! {
                            <div class="message-row message-assistant">
                                <div class="avatar">"🤖"</div>
                                <div class="bubble typing">"Academic Copilot חושב…"</div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn MessageBubble(msg: ChatMessage) -> impl IntoView {
    let is_user = msg.role == ChatRole::User;
    let row_class = if is_user {
        "message-row message-user"
    } else {
        "message-row message-assistant"
    };
    let avatar = if is_user { "👤" } else { "🤖" };

    let paragraphs = msg
        .text
        .split('\n')
        .map(|line| view! { <p>{line.to_string()}</p> })
        .collect_view();

    let citations = (!msg.citations.is_empty()).then(|| {
        view! {
            <div class="citations">
                "מקורות:"
                {msg.citations
                    .iter()
                    .map(|c| view! { <span class="citation-pill">{c.clone()}</span> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class=row_class>
            <div class="avatar">{avatar}</div>
            <div class="bubble">
                <div class="bubble-text">{paragraphs}</div>
                {citations}
            </div>
        </div>
    }
}
