//! SmartSend CLI
//!
//! 画像ファイルを「アップロード」として状態機械に流し、Gemini で解析する。

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod loader;
pub mod report;
