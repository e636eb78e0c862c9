//! 解析中画面

use leptos::prelude::*;
use smartsend_common::Controller;

#[component]
pub fn AnalyzingView(controller: RwSignal<Controller>) -> impl IntoView {
    let image_src = controller.with_untracked(|c| {
        c.captured_image()
            .map(|image| image.as_data_url().to_string())
            .unwrap_or_default()
    });

    view! {
        <section class="analyzing">
            <img class="analyzing-backdrop" src=image_src alt="" />
            <div class="spinner"></div>
            <p class="analyzing-text">"Analyzing package..."</p>
            <p class="text-muted">"Estimating dimensions, weight and rates"</p>
        </section>
    }
}
