//! 待機画面

use leptos::prelude::*;
use smartsend_common::CapturedImage;

use crate::components::upload_button::UploadButton;

#[component]
pub fn Landing(on_scan: Callback<()>, on_upload: Callback<CapturedImage>) -> impl IntoView {
    view! {
        <section class="landing">
            <h2>"Measure any package with a photo"</h2>
            <p class="text-muted">
                "Point your camera at a box to get dimensions, weight and shipping rates."
            </p>
            <div class="landing-actions">
                <button class="btn btn-primary" on:click=move |_| on_scan.run(())>
                    "Scan Package"
                </button>
                <UploadButton label="Upload Photo" on_image=on_upload />
            </div>
            <ul class="features">
                <li>"Dimensions in cm"</li>
                <li>"Estimated weight in kg"</li>
                <li>"Three carrier quotes"</li>
            </ul>
        </section>
    }
}
