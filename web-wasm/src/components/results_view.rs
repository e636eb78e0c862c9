//! 結果画面

use leptos::prelude::*;
use leptos::task::spawn_local;
use smartsend_common::metrics::format_fixed2;
use smartsend_common::{share_text, Controller, Event};

use crate::app::dispatch;
use crate::device;

#[component]
pub fn ResultsView(controller: RwSignal<Controller>, on_reset: Callback<()>) -> impl IntoView {
    let Some(estimate) = controller.with_untracked(|c| c.estimate().cloned()) else {
        return view! { <p class="text-muted">"No result available"</p> }.into_any();
    };
    let image_src = controller.with_untracked(|c| {
        c.captured_image()
            .map(|image| image.as_data_url().to_string())
            .unwrap_or_default()
    });
    let (share_status, set_share_status) = signal(None::<&'static str>);

    // 共有は編集後の説明文を使う
    let on_share = move |_| {
        let Some(current) = controller.with_untracked(|c| c.estimate().cloned()) else {
            return;
        };
        spawn_local(async move {
            let outcome = device::share(&share_text(&current)).await;
            set_share_status.set(outcome.message());
        });
    };

    let on_description = move |ev| {
        dispatch(controller, Event::EditDescription(event_target_value(&ev)));
    };

    let options = estimate
        .shipping_options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let best = estimate.is_best(i);
            view! {
                <li class=if best { "shipping-option best" } else { "shipping-option" }>
                    <span class="carrier">{option.carrier.clone()}</span>
                    <span class="service">{option.name.clone()}</span>
                    <span class="price">{format!("${}", option.price)}</span>
                    <span class="days">{format!("{} days", option.days)}</span>
                    {best.then(|| view! { <span class="badge">"Best Value"</span> })}
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="results">
            <img class="results-image" src=image_src alt="Captured package" />

            <label class="description">
                <span>"Description"</span>
                <textarea prop:value=estimate.description.clone() on:input=on_description></textarea>
            </label>

            {estimate.confidence.map(|c| view! {
                <p class="confidence">{format!("Confidence: {:.0}%", c)}</p>
            })}

            <dl class="metrics">
                <dt>"Dimensions"</dt>
                <dd>{format!("{} x {} x {} cm", estimate.length, estimate.width, estimate.height)}</dd>
                <dt>"Weight"</dt>
                <dd>{format!("{} kg", estimate.weight)}</dd>
                <dt>"Volume"</dt>
                <dd>{format!("{} L", format_fixed2(estimate.volume_liters()))}</dd>
                <dt>"Vol. Weight"</dt>
                <dd>{format!("{} kg", format_fixed2(estimate.volumetric_weight_kg()))}</dd>
            </dl>

            <h3>"Shipping Options"</h3>
            <ul class="shipping-options">{options}</ul>

            <div class="results-actions">
                <button class="btn btn-secondary" on:click=on_share>"Share Report"</button>
                <button class="btn btn-primary" on:click=move |_| on_reset.run(())>
                    "Scan Another"
                </button>
            </div>
            {move || share_status.get().map(|message| view! {
                <p class="share-status">{message}</p>
            })}
        </section>
    }
    .into_any()
}
