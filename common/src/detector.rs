//! アイテム検出ロジック
//!
//! 画像解析は行わない。ファイル名とキーワードの部分一致のみで
//! データセットから1レコードを選ぶ。一致なしの場合はランダムフォールバック。

use crate::types::{Dataset, WaterFootprintRecord};

/// ファイル名とキーワードの部分一致でレコードを探す
///
/// ファイル名を小文字化し、データセット順に各レコードの
/// キーワードを順に調べる。最初に一致したレコードを返す（先勝ち）。
/// 正規化は小文字化のみ。拡張子や記号の除去はしない。
pub fn match_keywords<'a>(
    file_name: &str,
    dataset: &'a Dataset,
) -> Option<&'a WaterFootprintRecord> {
    let file_name = file_name.to_lowercase();

    for item in &dataset.items {
        for keyword in &item.keywords {
            if file_name.contains(&keyword.to_lowercase()) {
                return Some(item);
            }
        }
    }

    None
}

/// アイテム検出（フォールバック付き）
///
/// キーワード一致がなければ`fallback_index`でレコードを1つ選ぶ。
/// 本番ではランダムなインデックス、テストでは固定値を注入する。
///
/// # Arguments
/// * `file_name` - アップロードされたファイル名（大文字小文字は任意）
/// * `dataset` - ロード済みデータセット
/// * `fallback_index` - 要素数を受け取りインデックスを返すクロージャ
///
/// # Returns
/// 検出レコード。データセットが空の場合のみ`None`
pub fn detect_item<'a, F>(
    file_name: &str,
    dataset: &'a Dataset,
    fallback_index: F,
) -> Option<&'a WaterFootprintRecord>
where
    F: FnOnce(usize) -> usize,
{
    if dataset.is_empty() {
        return None;
    }

    match_keywords(file_name, dataset)
        .or_else(|| dataset.items.get(fallback_index(dataset.len()) % dataset.len()))
}
