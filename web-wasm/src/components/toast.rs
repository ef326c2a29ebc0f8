//! トーストコンポーネント
//!
//! 一時通知の表示のみを担当する。追加と自動消去のタイマーは
//! 呼び出し側（ダッシュボード）が持つ。

use leptos::prelude::*;

/// トースト1件
#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub variant: ToastVariant,
    pub title: String,
    pub message: String,
}

/// トーストの種類
#[derive(Clone, Copy, PartialEq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Default => "default",
            ToastVariant::Destructive => "destructive",
        }
    }
}

#[component]
pub fn ToastStack(toasts: ReadSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=format!("toast {}", toast.variant.as_str())>
                            <h4>{toast.title.clone()}</h4>
                            <p>{toast.message.clone()}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
