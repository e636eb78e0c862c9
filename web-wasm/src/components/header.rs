//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"SmartSend"</h1>
            <span class="header-tag">"AI Logistics"</span>
        </header>
    }
}
