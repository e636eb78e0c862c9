//! 解析結果の表示・保存

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smartsend_common::metrics::format_fixed2;
use smartsend_common::PackageEstimate;
use std::path::Path;

/// `analyze --output` で保存するJSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedReport {
    /// 元画像のパス
    pub source: String,
    pub analyzed_at: DateTime<Utc>,
    pub estimate: PackageEstimate,
}

/// 保存形式と、推定結果単体のJSONのどちらも読めるようにする
#[derive(Deserialize)]
#[serde(untagged)]
enum ReportFile {
    Saved(SavedReport),
    Bare(PackageEstimate),
}

impl SavedReport {
    pub fn new(source: &Path, estimate: PackageEstimate) -> Self {
        Self {
            source: source.display().to_string(),
            analyzed_at: Utc::now(),
            estimate,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// JSONファイルから推定結果を読み込む
pub fn load_estimate(path: &Path) -> Result<PackageEstimate> {
    let content = std::fs::read_to_string(path)?;
    let file: ReportFile = serde_json::from_str(&content)?;
    Ok(match file {
        ReportFile::Saved(report) => report.estimate,
        ReportFile::Bare(estimate) => estimate,
    })
}

/// ターミナル表示用テキスト
pub fn format_estimate(estimate: &PackageEstimate) -> String {
    let mut lines = vec![
        format!("  説明: {}", estimate.description),
        format!(
            "  寸法: {} x {} x {} cm",
            estimate.length, estimate.width, estimate.height
        ),
        format!("  重量: {} kg", estimate.weight),
        format!("  体積: {} L", format_fixed2(estimate.volume_liters())),
        format!("  容積重量: {} kg", format_fixed2(estimate.volumetric_weight_kg())),
    ];

    if let Some(confidence) = estimate.confidence {
        lines.push(format!("  信頼度: {:.0}%", confidence));
    }

    lines.push("  配送オプション:".to_string());
    if estimate.shipping_options.is_empty() {
        lines.push("    (なし)".to_string());
    }
    for (i, option) in estimate.shipping_options.iter().enumerate() {
        let mark = if estimate.is_best(i) { "★" } else { " " };
        lines.push(format!(
            "   {} {} {} - ${} / {}日",
            mark, option.carrier, option.name, option.price, option.days
        ));
    }

    lines.join("\n")
}
