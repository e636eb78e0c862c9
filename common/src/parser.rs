//! APIレスポンスパーサー
//!
//! Gemini の応答テキストから JSON を取り出し、PackageEstimate として解釈する。
//! responseMimeType を指定していても前後に説明文や ```json フェンスが付くことがあるため、
//! 抽出してからパースする。

use crate::error::{Error, Result};
use crate::types::PackageEstimate;

/// 応答テキストからJSONオブジェクト部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 最初の `{` から最後の `}` まで
/// 3. エラー
///
/// # Examples
/// ```
/// use smartsend_common::extract_json;
///
/// let response = "Result: {\"length\": 30}";
/// assert_eq!(extract_json(response).unwrap(), "{\"length\": 30}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + "```json".len();
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let (Some(start), Some(end)) = (response.find('{'), response.rfind('}')) {
        if end > start {
            return Ok(&response[start..=end]);
        }
    }

    Err(Error::Parse("JSON object not found".into()))
}

/// 応答テキストを PackageEstimate にパース
///
/// # Returns
/// * `Err(Error::EmptyResponse)` - テキストが空
/// * `Err(Error::Contract)` - JSONでない、またはスキーマ不一致
pub fn parse_estimate(response: &str) -> Result<PackageEstimate> {
    if response.trim().is_empty() {
        return Err(Error::EmptyResponse);
    }

    let json_str = extract_json(response).map_err(|e| Error::Contract(e.to_string()))?;
    serde_json::from_str(json_str).map_err(|e| Error::Contract(e.to_string()))
}
