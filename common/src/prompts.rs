//! プロンプト・応答スキーマ
//!
//! CLIとWeb(WASM)で共有される:
//! - ANALYSIS_PROMPT: 荷物画像の解析指示
//! - response_schema: Gemini の responseSchema（PackageEstimate の形）

use serde_json::{json, Value};

/// 配送オプションの生成数
pub const SHIPPING_OPTION_COUNT: usize = 3;

/// 解析指示（固定文）
pub const ANALYSIS_PROMPT: &str = "Analyze this image of a package.
1. Estimate the physical dimensions (length, width, height) in centimeters based on standard box sizes or visual reference.
2. Estimate the weight in kg based on the likely contents and size.
3. Provide a brief description.
4. Generate 3 realistic shipping options with costs and delivery times.

Return the result strictly as JSON matching the schema.";

/// PackageEstimate に対応する responseSchema
///
/// フィールド名は `PackageEstimate` のシリアライズ名と一致させること。
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "length": { "type": "NUMBER", "description": "Estimated length of the package in cm" },
            "width": { "type": "NUMBER", "description": "Estimated width of the package in cm" },
            "height": { "type": "NUMBER", "description": "Estimated height of the package in cm" },
            "weight": { "type": "NUMBER", "description": "Estimated weight of the package in kg" },
            "description": {
                "type": "STRING",
                "description": "Short visual description of the package content or box type"
            },
            "confidence": {
                "type": "NUMBER",
                "description": "Confidence score of the estimation between 0 and 100"
            },
            "shippingOptions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "carrier": {
                            "type": "STRING",
                            "description": "Name of the shipping carrier (e.g., DHL, FedEx, UPS)"
                        },
                        "name": { "type": "STRING", "description": "Service name (e.g. Express, Standard)" },
                        "price": { "type": "NUMBER", "description": "Estimated cost in USD" },
                        "days": { "type": "INTEGER", "description": "Estimated delivery days" }
                    },
                    "required": ["carrier", "name", "price", "days"]
                }
            }
        },
        "required": ["length", "width", "height", "weight", "description", "shippingOptions"]
    })
}
