//! データセットの型定義
//!
//! 静的JSON（/water_footprint.json）とメモリ内で共有される型:
//! - WaterFootprintRecord: 1アイテムの水フットプリント
//! - Dataset: レコードの順序付きコレクション
//!
//! ワイヤ上のフィールド名はsnake_case。値と配列順はそのまま保持する。

use serde::{Deserialize, Serialize};

/// 水フットプリントレコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterFootprintRecord {
    /// 表示名
    pub name: String,

    /// マッチング用キーワード（小文字比較、順序あり、空も可）
    pub keywords: Vec<String>,

    /// 水消費量（非負）
    pub water_consumption: f64,

    /// 単位の表示テキスト
    pub unit: String,

    /// 豆知識
    pub fun_fact: String,
}

impl WaterFootprintRecord {
    /// 表示用の消費量（3桁区切り）
    pub fn formatted_consumption(&self) -> String {
        format_quantity(self.water_consumption)
    }
}

/// データセット全体
///
/// セッション中に一度だけロードされ、以後不変。
/// nameやkeywordsの重複は許容される（先勝ち）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub items: Vec<WaterFootprintRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 数量を3桁区切りでフォーマット
///
/// 小数部は最大3桁、末尾の0は落とす。
pub fn format_quantity(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let int_part = rounded.trunc() as u64;
    let frac_part = rounded.fract();

    let digits = int_part.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if frac_part > 0.0 {
        let frac_str = format!("{:.3}", frac_part);
        let trimmed = frac_str.trim_start_matches("0.").trim_end_matches('0');
        format!("{}.{}", grouped, trimmed)
    } else {
        grouped
    }
}
