//! Question input bar.

use crate::chat::ChatContext;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn InputBar() -> impl IntoView {
    let ctx = use_context::<ChatContext>().expect("ChatContext context not found");

    let send_disabled =
        Signal::derive(move || ctx.is_loading.get() || ctx.input.get().trim().is_empty());

    view! {
        <div class="input-bar">
            <div style="flex: 1;">
                <Textarea
                    value=ctx.input
                    placeholder="שאל אותי שאלה…"
                    disabled=ctx.is_loading
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && ev.ctrl_key() {
                            ev.prevent_default();
                            ctx.submit();
                        }
                    }
                />
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=send_disabled
                on_click=move |_| ctx.submit()
            >
                {move || if ctx.is_loading.get() { "שולח..." } else { "Send" }}
            </Button>
        </div>
    }
}
