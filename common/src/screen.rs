//! 画面遷移ステートマシン
//!
//! splash → login → dashboard の一方向遷移。
//! dashboardは終端でログアウトはない。常に1画面だけがマウントされる。

/// アプリケーションの画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Splash,
    Login,
    Dashboard,
}

/// 画面遷移イベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// スプラッシュの表示時間（＋フェードアウト）が経過した
    SplashFinished,
    /// 認証に成功した
    LoggedIn,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::Login => "login",
            Screen::Dashboard => "dashboard",
        }
    }

    /// イベントを適用して次の画面を返す
    ///
    /// 定義外の(画面, イベント)の組は現在の画面を維持する。
    pub fn transition(self, event: ScreenEvent) -> Screen {
        match (self, event) {
            (Screen::Splash, ScreenEvent::SplashFinished) => Screen::Login,
            (Screen::Login, ScreenEvent::LoggedIn) => Screen::Dashboard,
            (current, _) => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen_is_splash() {
        assert_eq!(Screen::default(), Screen::Splash);
    }

    #[test]
    fn test_splash_to_login() {
        // スプラッシュの時間経過イベントでログイン画面へ
        let screen = Screen::Splash.transition(ScreenEvent::SplashFinished);
        assert_eq!(screen, Screen::Login);
    }

    #[test]
    fn test_login_to_dashboard() {
        let screen = Screen::Login.transition(ScreenEvent::LoggedIn);
        assert_eq!(screen, Screen::Dashboard);
    }

    #[test]
    fn test_no_other_transitions() {
        // 定義外の組はすべて現在画面を維持する
        assert_eq!(
            Screen::Splash.transition(ScreenEvent::LoggedIn),
            Screen::Splash
        );
        assert_eq!(
            Screen::Login.transition(ScreenEvent::SplashFinished),
            Screen::Login
        );
        assert_eq!(
            Screen::Dashboard.transition(ScreenEvent::SplashFinished),
            Screen::Dashboard
        );
        assert_eq!(
            Screen::Dashboard.transition(ScreenEvent::LoggedIn),
            Screen::Dashboard
        );
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Screen::Splash.as_str(), "splash");
        assert_eq!(Screen::Login.as_str(), "login");
        assert_eq!(Screen::Dashboard.as_str(), "dashboard");
    }
}
