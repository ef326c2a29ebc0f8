//! ダッシュボードのセッション状態
//!
//! ログイン成功からページリロードまでのメモリ内状態。
//! データセットのキャッシュと現在のアップロード・解析結果を持つ。
//! 永続化はしない。

use crate::types::{Dataset, WaterFootprintRecord};

/// ダッシュボード画面が所有するセッション状態
#[derive(Debug, Clone, Default)]
pub struct DashboardSession {
    /// ロード済みデータセット（初回アップロード時にロード）
    pub dataset: Option<Dataset>,

    /// 選択中の画像（データURL）
    pub selected_image: Option<String>,

    /// 解析中フラグ
    pub is_analyzing: bool,

    /// 検出されたレコード（解析完了ごとに丸ごと置き換え）
    pub detected: Option<WaterFootprintRecord>,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// データセットをキャッシュする（セッション中に一度だけ呼ばれる）
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
    }

    /// プレビュー画像をセットする
    pub fn set_preview(&mut self, data_url: String) {
        self.selected_image = Some(data_url);
    }

    /// 解析開始。前回の結果はここで破棄する
    pub fn begin_analysis(&mut self) {
        self.is_analyzing = true;
        self.detected = None;
    }

    /// 解析完了。結果なし（データセット未ロード等）もそのまま保持する
    pub fn complete_analysis(&mut self, record: Option<WaterFootprintRecord>) {
        self.detected = record;
        self.is_analyzing = false;
    }

    /// アップロード前の状態に戻す
    ///
    /// プレビュー・結果・解析中フラグを無条件でクリアする。
    /// キャッシュ済みデータセットは保持する。
    pub fn reset(&mut self) {
        self.selected_image = None;
        self.detected = None;
        self.is_analyzing = false;
    }
}
