//! エラー画面

use leptos::prelude::*;
use smartsend_common::{Controller, GENERIC_ERROR_MESSAGE};

#[component]
pub fn ErrorView(controller: RwSignal<Controller>, on_retry: Callback<()>) -> impl IntoView {
    let message = move || {
        controller.with(|c| c.error_message().unwrap_or(GENERIC_ERROR_MESSAGE).to_string())
    };

    view! {
        <section class="error-view">
            <div class="error-icon">"⚠️"</div>
            <h2>"Analysis Failed"</h2>
            <p>{message}</p>
            <button class="btn btn-primary" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </section>
    }
}
