//! 撮影画面
//!
//! カメラ映像と演出用のARオーバーレイを表示する。オーバーレイの数値は
//! タイマーで生成するだけで、推定結果には使わない。
//! カメラが使えなくても画面状態は変えず、その場でアップロードへ誘導する。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use smartsend_common::capture::{CameraStatus, FacingMode, CAMERA_UNAVAILABLE_MESSAGE};
use smartsend_common::overlay::{OverlayReading, TICK_INTERVAL_MS};
use smartsend_common::CapturedImage;

use crate::components::upload_button::UploadButton;
use crate::device;

#[component]
pub fn CameraView(on_capture: Callback<CapturedImage>, on_close: Callback<()>) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let (facing, set_facing) = signal(FacingMode::default());
    let (camera, set_camera) = signal(CameraStatus::default());
    let (reading, set_reading) = signal(OverlayReading::default());
    let mounted = Arc::new(AtomicBool::new(true));

    // 向きが変わるたびに取り直す（古いストリームの停止は device 側）
    let mounted_for_start = mounted.clone();
    Effect::new(move |_| {
        let facing = facing.get();
        let Some(video) = video_ref.get() else {
            return;
        };
        set_camera.set(CameraStatus::Starting);
        let mounted = mounted_for_start.clone();
        spawn_local(async move {
            let result = device::start_camera(&video, facing).await;
            if !mounted.load(Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(true) => set_camera.set(CameraStatus::Live),
                // 後続の取得に追い越された
                Ok(false) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("Camera access error: {}", e).into());
                    set_camera.set(CameraStatus::Unavailable(CAMERA_UNAVAILABLE_MESSAGE.to_string()));
                }
            }
        });
    });

    let interval = set_interval_with_handle(
        move || set_reading.set(OverlayReading::sample(js_sys::Math::random, js_sys::Date::now())),
        Duration::from_millis(u64::from(TICK_INTERVAL_MS)),
    )
    .ok();

    on_cleanup(move || {
        mounted.store(false, Ordering::Relaxed);
        if let Some(handle) = interval {
            handle.clear();
        }
        device::stop_camera();
    });

    let on_shutter = move |_| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        match device::grab_frame(&video) {
            Some(image) => on_capture.run(image),
            None => web_sys::console::warn_1(&"Camera frame not ready".into()),
        }
    };

    let camera_error = move || camera.with(|c| c.error_message().map(str::to_string));

    view! {
        <section class="camera-view">
            <video node_ref=video_ref class="camera-feed"></video>

            {move || camera_error().map(|message| view! {
                <div class="camera-error">
                    <p>{message}</p>
                    <UploadButton label="Upload Photo" on_image=on_capture />
                </div>
            })}

            <div class="ar-overlay">
                <div class="ar-frame"></div>
                <div class="ar-readout">
                    <span>{move || format!("W {:.1} cm", reading.get().width)}</span>
                    <span>{move || format!("H {:.1} cm", reading.get().height)}</span>
                    <span>{move || format!("L {:.1} cm", reading.get().length)}</span>
                    <span>{move || format!("~{:.1} kg", reading.get().weight)}</span>
                </div>
                <div class=move || format!("range-meter {}", reading.get().range_status().as_class())>
                    <div
                        class="range-fill"
                        style=move || format!("height: {:.0}%", reading.get().range)
                    ></div>
                    <span class="range-label">{move || reading.get().range_status().label()}</span>
                </div>
            </div>

            <div class="camera-controls">
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
                <button
                    class="btn shutter"
                    disabled=move || camera.get() != CameraStatus::Live
                    on:click=on_shutter
                >
                    "Capture"
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=move || camera.get() == CameraStatus::Starting
                    on:click=move |_| set_facing.update(|f| *f = f.toggle())
                >
                    "Flip"
                </button>
                <UploadButton label="Upload" on_image=on_capture />
            </div>
        </section>
    }
}
