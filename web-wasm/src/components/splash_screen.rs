//! スプラッシュ画面コンポーネント
//!
//! 固定時間の表示後にフェードアウトし、完了コールバックで
//! ログイン画面への遷移を起動する。ユーザー入力は不要。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use water_wise_common::config::{SPLASH_DURATION_MS, SPLASH_FADE_MS};

#[component]
pub fn SplashScreen<F>(on_complete: F) -> impl IntoView
where
    F: Fn(()) + 'static,
{
    let (is_visible, set_is_visible) = signal(true);

    // 表示時間の経過でフェードアウト開始、フェード完了後に遷移を通知する
    Timeout::new(SPLASH_DURATION_MS, move || {
        set_is_visible.set(false);
        Timeout::new(SPLASH_FADE_MS, move || on_complete(())).forget();
    })
    .forget();

    view! {
        <div class="splash-screen" class:fade-out=move || !is_visible.get()>
            <div class="splash-content">
                <div class="splash-logo">"💧"</div>
                <h1>"Water Wise Detect"</h1>
                <p>"Discover the hidden water footprint of everyday items"</p>
            </div>
        </div>
    }
}
