//! メインアプリケーションコンポーネント
//!
//! 画面遷移ステートマシン（common::screen）を1つのシグナルで持ち、
//! 常に1画面だけをマウントする。

use crate::components::{dashboard::Dashboard, login_form::LoginForm, splash_screen::SplashScreen};
use leptos::prelude::*;
use water_wise_common::{Screen, ScreenEvent};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (screen, set_screen) = signal(Screen::default());

    // スプラッシュ完了ハンドラ
    let on_splash_complete = move |_| {
        set_screen.update(|s| *s = s.transition(ScreenEvent::SplashFinished));
    };

    // ログイン成功ハンドラ
    let on_login = move |_| {
        set_screen.update(|s| *s = s.transition(ScreenEvent::LoggedIn));
    };

    view! {
        <Show when=move || screen.get() == Screen::Splash>
            <SplashScreen on_complete=on_splash_complete />
        </Show>

        <Show when=move || screen.get() == Screen::Login>
            <LoginForm on_login=on_login />
        </Show>

        <Show when=move || screen.get() == Screen::Dashboard>
            <Dashboard />
        </Show>
    }
}
