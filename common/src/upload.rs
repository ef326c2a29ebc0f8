//! アップロードファイルの検証
//!
//! 宣言されたメディアタイプのみを見る。中身の検証はしない
//! （リネームされた非画像ファイルでもメディアタイプが合えば通る）。

use crate::error::{Error, Result};

/// ファイル入力のaccept属性に渡す値
pub const ACCEPT_MEDIA_TYPES: &str = "image/jpeg,image/png";

/// メディアタイプの検証
///
/// `image/`で始まるタイプを受け付ける。それ以外は
/// `InvalidFileType`（状態は変更しない）。
pub fn validate_media_type(media_type: &str) -> Result<()> {
    if media_type.starts_with("image/") {
        Ok(())
    } else {
        Err(Error::InvalidFileType(media_type.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_jpeg() {
        assert!(validate_media_type("image/jpeg").is_ok());
    }

    #[test]
    fn test_validate_png() {
        assert!(validate_media_type("image/png").is_ok());
    }

    #[test]
    fn test_validate_text_plain_rejected() {
        let result = validate_media_type("text/plain");
        assert!(matches!(result, Err(Error::InvalidFileType(_))));
    }

    #[test]
    fn test_validate_empty_rejected() {
        assert!(validate_media_type("").is_err());
    }

    #[test]
    fn test_validate_error_keeps_media_type() {
        let Err(Error::InvalidFileType(media_type)) = validate_media_type("application/pdf") else {
            panic!("InvalidFileType expected");
        };
        assert_eq!(media_type, "application/pdf");
    }
}
