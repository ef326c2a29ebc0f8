//! ダッシュボード画面コンポーネント
//!
//! アップロードごとのシーケンス:
//! 型検証 → データセット確保（初回のみfetch） → プレビュー生成 →
//! 擬似解析（固定時間） → 検出 → 結果表示。
//! 失敗はすべてトーストで通知し、セッションは壊さない。

use crate::api::dataset::fetch_dataset;
use crate::components::result_card::ResultCard;
use crate::components::toast::{Toast, ToastStack, ToastVariant};
use crate::components::upload_area::UploadArea;
use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use water_wise_common::{
    config::{ANALYSIS_LATENCY_MS, TOAST_DURATION_MS},
    detect_item, validate_media_type, DashboardSession,
};
use web_sys::{File, FileReader};

#[component]
pub fn Dashboard() -> impl IntoView {
    let (session, set_session) = signal(DashboardSession::new());
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    let (next_toast_id, set_next_toast_id) = signal(0u32);

    let is_analyzing = Signal::derive(move || session.with(|s| s.is_analyzing));

    // トースト追加（自動消去タイマー付き）
    let push_toast = move |variant: ToastVariant, title: &str, message: String| {
        let id = next_toast_id.get_untracked();
        set_next_toast_id.set(id + 1);
        set_toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                variant,
                title: title.to_string(),
                message,
            });
        });
        Timeout::new(TOAST_DURATION_MS, move || {
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    };

    // アップロードハンドラ
    let on_file_selected = move |file: File| {
        // 宣言されたメディアタイプだけを検証する（中身は見ない）
        if let Err(err) = validate_media_type(&file.type_()) {
            push_toast(ToastVariant::Destructive, "Invalid file", err.to_string());
            return;
        }

        spawn_local(async move {
            // データセットは初回アップロード時にロードし、以後キャッシュする
            if session.with_untracked(|s| s.dataset.is_none()) {
                match fetch_dataset().await {
                    Ok(dataset) => set_session.update(|s| s.set_dataset(dataset)),
                    Err(err) => {
                        console::error!(format!("Failed to load dataset: {}", err));
                        push_toast(
                            ToastVariant::Destructive,
                            "Error",
                            "Failed to load water footprint data".to_string(),
                        );
                        // セッションは続行する。データセットなしでは検出は結果なしになる
                    }
                }
            }

            let file_name = file.name();

            // プレビュー生成（FileReaderは非同期に完了する）
            read_as_data_url(file, move |data_url| {
                set_session.update(|s| s.set_preview(data_url));
            });

            // 擬似解析
            set_session.update(|s| s.begin_analysis());

            Timeout::new(ANALYSIS_LATENCY_MS, move || {
                let detected = session.with_untracked(|s| {
                    s.dataset
                        .as_ref()
                        .and_then(|dataset| detect_item(&file_name, dataset, random_index).cloned())
                });

                if let Some(record) = &detected {
                    push_toast(
                        ToastVariant::Default,
                        "Detection Complete!",
                        format!("Found: {}", record.name),
                    );
                }

                set_session.update(|s| s.complete_analysis(detected));
            })
            .forget();
        });
    };

    // リセットハンドラ（プレビュー・結果・解析中フラグを無条件でクリア）
    let on_reset = move |_| {
        set_session.update(|s| s.reset());
    };

    view! {
        <div class="container dashboard">
            <header class="dashboard-header">
                <h1>"💧 Water Footprint Detector"</h1>
                <p class="text-muted">
                    "Upload an image to discover the hidden water consumption of everyday items"
                </p>
            </header>

            <div class="card upload-card">
                <div class="card-header">
                    <h2>"Upload Image"</h2>
                    <p class="text-muted">
                        "Upload a JPEG or PNG image of an item to analyze its water footprint"
                    </p>
                </div>

                <UploadArea is_analyzing=is_analyzing on_file_selected=on_file_selected />

                <Show when=move || session.with(|s| s.selected_image.is_some())>
                    <div class="preview">
                        <img
                            src=move || session.with(|s| s.selected_image.clone()).unwrap_or_default()
                            alt="Uploaded item"
                        />
                        <button
                            class="btn btn-secondary"
                            disabled=move || session.with(|s| s.is_analyzing)
                            on:click=on_reset
                        >
                            "Upload New Image"
                        </button>
                    </div>
                </Show>
            </div>

            <Show when=move || session.with(|s| s.is_analyzing)>
                <div class="alert alert-info">
                    <span class="droplet-spinner">"💧"</span>
                    "Analyzing image and calculating water footprint..."
                </div>
            </Show>

            <Show when=move || session.with(|s| s.detected.is_some() && !s.is_analyzing)>
                {move || {
                    session
                        .with(|s| s.detected.clone())
                        .map(|record| view! { <ResultCard record=record /> })
                }}
            </Show>

            <div class="card info-card">
                <h3>"Understanding Water Footprints"</h3>
                <p class="text-muted">
                    "A water footprint measures the total amount of water used to produce goods and services. "
                    "This includes water for growing, processing, packaging, and transporting items."
                </p>
            </div>

            <ToastStack toasts=toasts />
        </div>
    }
}

/// 乱数インデックス（フォールバック検出用）
fn random_index(len: usize) -> usize {
    (js_sys::Math::random() * len as f64).floor() as usize
}

/// FileをデータURLとして読み込む
fn read_as_data_url<F>(file: File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
