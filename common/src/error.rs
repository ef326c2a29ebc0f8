//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// すべて発生箇所でハンドリングされ、トーストやインラインメッセージとして
/// ユーザーに表示される。致命的エラーは存在しない。
#[derive(Error, Debug)]
pub enum Error {
    /// データセットの取得・パース失敗
    #[error("Failed to load water footprint data: {0}")]
    DatasetUnavailable(String),

    /// 画像以外のファイルがアップロードされた
    #[error("Please upload a JPEG or PNG image")]
    InvalidFileType(String),

    /// デモ認証情報と不一致
    #[error("Invalid credentials. Use demo@example.com / 1234")]
    InvalidCredentials,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
