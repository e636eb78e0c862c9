//! CLI終了時の表示テスト
//!
//! 失敗時は Display 形式の1行を stderr に出し、終了コード1で終わる

use smartsend::error::SmartSendError;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

/// 設定ファイル・APIキーを持たない環境で実行
fn smartsend(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_smartsend"))
        .args(args)
        .env("HOME", home)
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .output()
        .unwrap()
}

#[test]
fn test_missing_api_key_prints_plain_message() {
    let home = tempdir().unwrap();
    let output = smartsend(home.path(), &["analyze", "box.jpg"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim_end(), format!("Error: {}", SmartSendError::MissingApiKey));
    assert!(!stderr.contains("MissingApiKey"));
}

#[test]
fn test_share_missing_file_prints_plain_message() {
    let home = tempdir().unwrap();
    let missing = home.path().join("missing.json");
    let output = smartsend(home.path(), &["share", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: IOエラー"), "stderr: {}", stderr);
    assert!(!stderr.contains("Io("));
}

#[test]
fn test_share_bare_estimate() {
    let home = tempdir().unwrap();
    let path = home.path().join("estimate.json");
    std::fs::write(
        &path,
        r#"{"length": 32, "width": 24, "height": 18, "weight": 2.4,
            "description": "Shoe box",
            "shippingOptions": [{"carrier": "UPS", "name": "Ground", "price": 12.1, "days": 5}]}"#,
    )
    .unwrap();

    let output = smartsend(home.path(), &["share", path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("📦 SmartSend Logistics Analysis"));
    assert!(stdout.contains("🚚 Best Rate: UPS ($12.1 - 5 days)"));
}
