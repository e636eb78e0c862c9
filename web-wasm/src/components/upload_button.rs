//! ファイル選択ボタン

use leptos::prelude::*;
use smartsend_common::CapturedImage;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

#[component]
pub fn UploadButton(
    #[prop(into)] label: String,
    on_image: Callback<CapturedImage>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            read_file(file, on_image);
        }
        // 同じファイルを続けて選べるようにする
        input.set_value("");
    };

    view! {
        <label class="btn btn-secondary upload-button">
            <span>{label}</span>
            <input type="file" accept="image/*" class="hidden" on:change=on_change />
        </label>
    }
}

fn read_file(file: File, on_image: Callback<CapturedImage>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            web_sys::console::error_2(&"FileReader unavailable".into(), &e);
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        let data_url = reader_clone.result().ok().and_then(|result| result.as_string());
        match data_url.map(CapturedImage::from_data_url) {
            Some(Ok(image)) => on_image.run(image),
            _ => web_sys::console::error_1(&"Failed to read image file".into()),
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        web_sys::console::error_2(&"Failed to read image file".into(), &e);
    }
}
