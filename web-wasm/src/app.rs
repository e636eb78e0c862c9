//! メインアプリケーションコンポーネント
//!
//! 画面状態は `Controller` 1つに集約し、シグナルで保持する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use smartsend_common::{run_analysis, AppState, CapturedImage, Command, Controller, Event};

use crate::api::gemini::{BrowserGateway, API_KEY};
use crate::components::{
    analyzing_view::AnalyzingView,
    camera_view::CameraView,
    error_view::ErrorView,
    header::Header,
    landing::Landing,
    results_view::ResultsView,
};

/// イベントを適用し、解析コマンドが出たらゲートウェイを呼ぶ
///
/// 古い attempt の結果はコントローラ側で弾かれる。
pub fn dispatch(controller: RwSignal<Controller>, event: Event) {
    let mut command = None;
    controller.update(|c| match c.apply(event) {
        Ok(next) => command = next,
        Err(e) => web_sys::console::warn_1(&e.to_string().into()),
    });

    if let Some(Command::Analyze { attempt, image }) = command {
        spawn_local(async move {
            let gateway = BrowserGateway::new(API_KEY);
            let outcome = run_analysis(&gateway, attempt, &image).await;
            if let Event::AnalysisFailed { reason, .. } = &outcome {
                web_sys::console::error_1(&format!("Analysis error: {}", reason).into());
            }
            dispatch(controller, outcome);
        });
    }
}

#[component]
pub fn App() -> impl IntoView {
    let controller = RwSignal::new(Controller::new());
    // 説明文の編集では画面を作り直さない
    let state = Memo::new(move |_| controller.with(|c| c.state()));

    let on_scan = Callback::new(move |_: ()| dispatch(controller, Event::StartScan));
    let on_upload =
        Callback::new(move |image: CapturedImage| dispatch(controller, Event::Upload(image)));
    let on_capture =
        Callback::new(move |image: CapturedImage| dispatch(controller, Event::Acquire(image)));
    let on_close = Callback::new(move |_: ()| dispatch(controller, Event::Close));
    let on_reset = Callback::new(move |_: ()| dispatch(controller, Event::Reset));
    let on_retry = Callback::new(move |_: ()| dispatch(controller, Event::Retry));

    view! {
        <div class="container">
            <Header />
            <main>
                {move || match state.get() {
                    AppState::Idle => view! {
                        <Landing on_scan=on_scan on_upload=on_upload />
                    }.into_any(),
                    AppState::Capturing => view! {
                        <CameraView on_capture=on_capture on_close=on_close />
                    }.into_any(),
                    AppState::Analyzing => view! {
                        <AnalyzingView controller=controller />
                    }.into_any(),
                    AppState::Results => view! {
                        <ResultsView controller=controller on_reset=on_reset />
                    }.into_any(),
                    AppState::Error => view! {
                        <ErrorView controller=controller on_retry=on_retry />
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
