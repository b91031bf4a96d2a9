//! App header: product title, document upload trigger and backend status.

use crate::chat::ChatContext;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

const FILE_INPUT_ID: &str = "docs-file-input";

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<ChatContext>().expect("ChatContext context not found");

    view! {
        <header class="app-header">
            <div>
                <h1>"Academic Copilot"</h1>
                <p class="subtitle">
                    "Get A-grades with the AI that masters your courses, assignments, and exams."
                </p>
            </div>

            <div class="header-right">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=ctx.is_uploading
                    on_click=move |_| {
                        if let Some(window) = web_sys::window() {
                            if let Some(document) = window.document() {
                                if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                                    if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                                        input.click();
                                    }
                                }
                            }
                        }
                    }
                >
                    {move || {
                        if ctx.is_uploading.get() { "מעלה קבצים..." } else { "העלה PDF" }
                    }}
                </Button>

                <input
                    type="file"
                    id=FILE_INPUT_ID
                    style="display: none;"
                    multiple=true
                    accept=".pdf,.txt"
                    on:change=move |ev| {
                        let input: web_sys::HtmlInputElement =
                            ev.target().unwrap().dyn_into().unwrap();
                        let mut files = Vec::new();
                        if let Some(list) = input.files() {
                            for i in 0..list.length() {
                                if let Some(file) = list.get(i) {
                                    files.push(file);
                                }
                            }
                        }
                        ctx.upload_documents(files);
                        // Allow re-selecting the same file later.
                        input.set_value("");
                    }
                />

                <span class=move || ctx.backend_status.get().css_class() />
                <span class="status-text">
                    {move || ctx.backend_status.get().display_text()}
                </span>
            </div>
        </header>
    }
}
