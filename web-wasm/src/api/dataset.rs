//! 水フットプリントデータセットの取得
//!
//! 静的JSON（config::DATASET_PATH）をfetchしてDatasetにデコードする。
//! ネットワーク・HTTPステータス・デコードのどの失敗も
//! DatasetUnavailableに畳む（フェイルソフト、リトライなし）。

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use water_wise_common::{config::DATASET_PATH, Dataset, Error};
use web_sys::{Request, Response};

/// データセットを取得する
///
/// セッション中は呼び出し側（ダッシュボード）が結果をキャッシュし、
/// 初回アップロード時に一度だけ呼ばれる。
pub async fn fetch_dataset() -> Result<Dataset, Error> {
    let request = Request::new_with_str(DATASET_PATH)
        .map_err(|e| Error::DatasetUnavailable(format!("{:?}", e)))?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| Error::DatasetUnavailable(format!("{:?}", e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| Error::DatasetUnavailable(format!("{:?}", e)))?;

    if !resp.ok() {
        return Err(Error::DatasetUnavailable(format!("HTTP {}", resp.status())));
    }

    let json = JsFuture::from(
        resp.json()
            .map_err(|e| Error::DatasetUnavailable(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| Error::DatasetUnavailable(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| Error::DatasetUnavailable(e.to_string()))
}
