//! Citations side panel for the active conversation.

use crate::chat::ChatContext;
use leptos::prelude::*;

#[component]
pub fn ContextPanel() -> impl IntoView {
    let ctx = use_context::<ChatContext>().expect("ChatContext context not found");

    view! {
        <aside class="context-panel">
            <h3>"מקורות מהחומר שלך"</h3>

            {move || {
                let citations = ctx.active_citations();
                if citations.is_empty() {
                    view! {
                        <p class="context-empty">
                            "אחרי שתשאל שאלה על חומר הקורס נראה כאן מאילו מצגות ושקפים נשלפה התשובה."
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <ul class="context-list">
                            {citations
                                .into_iter()
                                .map(|c| view! { <li class="context-item">{c}</li> })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </aside>
    }
}
