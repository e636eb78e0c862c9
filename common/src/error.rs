//! エラー型定義

use crate::controller::{AppState, EventKind};
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// ネットワーク障害・HTTPエラー・タイムアウト
    #[error("Transport error: {0}")]
    Transport(String),

    /// 候補テキストが返ってこなかった
    #[error("No data returned from AI")]
    EmptyResponse,

    /// 応答がスキーマに合致しない
    #[error("Response violates the estimate contract: {0}")]
    Contract(String),

    #[error("Event {event:?} is not accepted in state {state:?}")]
    InvalidTransition { state: AppState, event: EventKind },
}

impl Error {
    /// 通信レイヤーの失敗かどうか（契約違反と区別する）
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("APIキーがありません".to_string());
        assert_eq!(format!("{}", error), "Config error: APIキーがありません");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_transport_is_distinguished_from_contract() {
        assert!(Error::Transport("timeout".into()).is_transport());
        assert!(!Error::Contract("missing field `weight`".into()).is_transport());
        assert!(!Error::EmptyResponse.is_transport());
    }

    #[test]
    fn test_invalid_transition_display() {
        let error = Error::InvalidTransition {
            state: AppState::Analyzing,
            event: EventKind::StartScan,
        };
        let display = format!("{}", error);
        assert!(display.contains("StartScan"));
        assert!(display.contains("Analyzing"));
    }
}
