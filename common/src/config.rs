//! アプリケーション定数
//!
//! タイミング・デモ認証情報・データセットパスの単一の定義場所

/// スプラッシュ画面の表示時間（ミリ秒）
pub const SPLASH_DURATION_MS: u32 = 4000;

/// スプラッシュ画面のフェードアウト時間（ミリ秒）
pub const SPLASH_FADE_MS: u32 = 500;

/// ログイン時の擬似レイテンシ（ミリ秒）
pub const LOGIN_LATENCY_MS: u32 = 1000;

/// 画像解析の擬似レイテンシ（ミリ秒）
pub const ANALYSIS_LATENCY_MS: u32 = 2000;

/// トーストの自動消去時間（ミリ秒）
pub const TOAST_DURATION_MS: u32 = 4000;

/// データセットの取得先（静的JSON）
pub const DATASET_PATH: &str = "/water_footprint.json";

/// デモ用メールアドレス
pub const DEMO_EMAIL: &str = "demo@example.com";

/// デモ用パスワード
pub const DEMO_PASSWORD: &str = "1234";
