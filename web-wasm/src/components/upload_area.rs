//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとクリック選択の両方を受け付け、
//! 選ばれたFileをそのまま呼び出し側へ渡す。検証は呼び出し側の責務。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use water_wise_common::ACCEPT_MEDIA_TYPES;
use web_sys::{DragEvent, File, FileList};

#[component]
pub fn UploadArea<F>(is_analyzing: Signal<bool>, on_file_selected: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_files = {
        let on_file_selected = on_file_selected.clone();
        move |files: FileList| {
            if let Some(file) = files.get(0) {
                on_file_selected(file);
            }
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if is_analyzing.get_untracked() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    handle_files(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_analyzing.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_files = handle_files.clone();
        move |_| {
            if is_analyzing.get_untracked() {
                return;
            }

            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept(ACCEPT_MEDIA_TYPES);

            let handle_files = handle_files.clone();
            let input_clone = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = input_clone.files() {
                    handle_files(files);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if is_analyzing.get() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>
                {move || {
                    if is_analyzing.get() {
                        "Analyzing..."
                    } else {
                        "Drag & drop or click to choose an image"
                    }
                }}
            </p>
            <p class="text-muted">"Supported formats: JPEG, PNG"</p>
        </div>
    }
}
