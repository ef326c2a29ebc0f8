//! Water Wise Detect Common Library
//!
//! UI(WASM)から切り離してテストできる型とロジック:
//! 検出・認証・画面遷移・セッション状態・アップロード検証

pub mod auth;
pub mod config;
pub mod detector;
pub mod error;
pub mod screen;
pub mod session;
pub mod types;
pub mod upload;

pub use auth::authenticate;
pub use detector::{detect_item, match_keywords};
pub use error::{Error, Result};
pub use screen::{Screen, ScreenEvent};
pub use session::DashboardSession;
pub use types::{format_quantity, Dataset, WaterFootprintRecord};
pub use upload::{validate_media_type, ACCEPT_MEDIA_TYPES};
