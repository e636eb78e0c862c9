//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ShippingOption: 配送オプション（キャリア・サービス・料金・日数）
//! - PackageEstimate: 画像解析の最終出力（寸法・重量・説明・配送オプション）

use serde::{Deserialize, Serialize};

/// 配送オプション
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub carrier: String,
    pub name: String,
    /// 料金（USD）
    pub price: f64,
    /// 配達日数
    pub days: f64,
}

/// 荷物の推定結果
///
/// 数値の妥当性は検証しない（ゼロや負の寸法もそのまま受け入れる）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageEstimate {
    pub length: f64,              // cm
    pub width: f64,               // cm
    pub height: f64,              // cm
    pub weight: f64,              // kg
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,  // 0-100

    /// 先頭要素が「ベスト」。並べ替えは行わない
    pub shipping_options: Vec<ShippingOption>,
}

impl PackageEstimate {
    /// 推奨オプション（常にインデックス0）
    pub fn best_option(&self) -> Option<&ShippingOption> {
        self.shipping_options.first()
    }

    pub fn is_best(&self, index: usize) -> bool {
        index == 0 && !self.shipping_options.is_empty()
    }
}
