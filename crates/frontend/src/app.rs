use crate::chat::ChatContext;
use crate::layout::{ChatSidebar, ContextPanel, Header, InputBar, MessageThread};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the session context to the whole app.
    let ctx = ChatContext::new();
    provide_context(ctx);

    // One-shot backend probe at startup; only moves the status indicator.
    Effect::new(move |_| {
        ctx.check_backend();
    });

    view! {
        <div class="app-root">
            <Header />

            {move || {
                ctx.upload_error
                    .get()
                    .map(|e| view! { <div class="upload-banner upload-banner-error">{e}</div> })
            }}
            {move || {
                ctx.upload_success
                    .get()
                    .map(|m| view! { <div class="upload-banner upload-banner-success">{m}</div> })
            }}

            <div class="app-body">
                <ChatSidebar />

                <main class="chat-container">
                    <section class="chat-main">
                        <MessageThread />
                        <InputBar />
                        {move || {
                            ctx.error.get().map(|e| view! { <div class="error">{e}</div> })
                        }}
                    </section>

                    <ContextPanel />
                </main>
            </div>
        </div>
    }
}
