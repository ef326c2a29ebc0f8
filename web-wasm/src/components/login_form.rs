//! ログインフォームコンポーネント
//!
//! デモ認証情報との完全一致のみ。判定自体はcommon::auth、
//! ここでは擬似レイテンシとフォーム状態だけを扱う。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use water_wise_common::{authenticate, config::LOGIN_LATENCY_MS};
use web_sys::SubmitEvent;

#[component]
pub fn LoginForm<F>(on_login: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_is_loading.set(true);
        set_error.set(String::new());

        // 擬似レイテンシの後に判定する。結果には影響しない
        let on_login = on_login.clone();
        Timeout::new(LOGIN_LATENCY_MS, move || {
            let result = authenticate(&email.get_untracked(), &password.get_untracked());
            // 成功時はこのフォームごとアンマウントされるため、先にフラグを戻す
            set_is_loading.set(false);
            match result {
                Ok(()) => on_login(()),
                Err(err) => set_error.set(err.to_string()),
            }
        })
        .forget();
    };

    view! {
        <div class="login-screen">
            <div class="card login-card">
                <div class="card-header">
                    <div class="login-icon">"💧"</div>
                    <h2>"Welcome Back"</h2>
                    <p class="text-muted">"Sign in to discover water footprints of everyday items"</p>
                </div>
                <form on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="alert alert-destructive">{move || error.get()}</div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="demo@example.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="••••"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>

                    <p class="text-muted login-hint">
                        "Demo credentials: demo@example.com / 1234"
                    </p>
                </form>
            </div>
        </div>
    }
}
