//! UIコンポーネント

pub mod dashboard;
pub mod login_form;
pub mod result_card;
pub mod splash_screen;
pub mod toast;
pub mod upload_area;
