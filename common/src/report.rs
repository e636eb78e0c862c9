//! 共有用テキスト
//!
//! 共有シート（またはクリップボード）に渡すプレーンテキストを組み立てる。

use crate::metrics::format_fixed2;
use crate::types::PackageEstimate;

pub const SHARE_TITLE: &str = "SmartSend Analysis";

/// 推定結果の共有テキスト
///
/// 説明文はユーザー編集後のものを使う。配送オプションが無い場合は
/// ベストレート行を省略する。
pub fn share_text(estimate: &PackageEstimate) -> String {
    let mut text = format!(
        "📦 SmartSend Logistics Analysis\n\n📝 {}\n📏 Dims: {} x {} x {} cm\n⚖️ Phys. Weight: {} kg\n🧊 Vol. Weight: {} kg\n\n",
        estimate.description,
        estimate.length,
        estimate.width,
        estimate.height,
        estimate.weight,
        format_fixed2(estimate.volumetric_weight_kg()),
    );

    if let Some(best) = estimate.best_option() {
        text.push_str(&format!(
            "🚚 Best Rate: {} (${} - {} days)\n\n",
            best.carrier, best.price, best.days
        ));
    }

    text.push_str("Measured with SmartSend AI");
    text
}
