//! デモ認証
//!
//! 固定の認証情報との完全一致のみ。正規化なし、レート制限なし。
//! ログイン時の擬似レイテンシはUI側（gloo timer）で付与し、
//! 結果には影響しない。

use crate::config::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::error::{Error, Result};

/// 認証チェック
///
/// 大文字小文字を区別して完全一致で比較する。
/// 不一致時はメール誤りかパスワード誤りかを区別しない。
pub fn authenticate(email: &str, password: &str) -> Result<()> {
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(())
    } else {
        Err(Error::InvalidCredentials)
    }
}
