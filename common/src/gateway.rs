//! 解析ゲートウェイ
//!
//! 画像1枚を受け取り PackageEstimate を返すか失敗する。
//! 実装はCLI（reqwest）とWeb（fetch）にあり、ここでは契約だけを定める。
//! リトライ・キャッシュは行わない。

use crate::controller::Event;
use crate::error::Result;
use crate::image::CapturedImage;
use crate::types::PackageEstimate;
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait AnalysisGateway {
    async fn analyze(&self, image: &CapturedImage) -> Result<PackageEstimate>;
}

/// ゲートウェイを1回呼び、結果を完了イベントに変換する
///
/// 失敗の詳細はログにのみ残す（画面には固定メッセージを出す）。
pub async fn run_analysis<G>(gateway: &G, attempt: u64, image: &CapturedImage) -> Event
where
    G: AnalysisGateway + ?Sized,
{
    match gateway.analyze(image).await {
        Ok(estimate) => Event::AnalysisSucceeded { attempt, estimate },
        Err(e) => {
            if e.is_transport() {
                log::error!("analysis request failed (attempt {}): {}", attempt, e);
            } else {
                log::error!("analysis response rejected (attempt {}): {}", attempt, e);
            }
            Event::AnalysisFailed { attempt, reason: e.to_string() }
        }
    }
}
