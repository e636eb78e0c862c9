//! 画面遷移ステートマシン
//!
//! 画面（Idle / Capturing / Analyzing / Results / Error）と、画面間で受け渡す
//! データ（撮影画像・推定結果・エラーメッセージ）を一元管理する。
//! 遷移関数は純粋で、I/O は `Command` として呼び出し側へ返す。

use crate::error::{Error, Result};
use crate::image::CapturedImage;
use crate::types::PackageEstimate;
use serde::{Deserialize, Serialize};

/// 解析失敗時にユーザーへ表示する固定メッセージ
pub const GENERIC_ERROR_MESSAGE: &str =
    "Failed to analyze package. Please ensure the image is clear and try again.";

/// 画面状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppState {
    Idle,
    Capturing,
    Analyzing,
    Results,
    Error,
}

/// 状態と、その状態でのみ存在するデータ
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Idle,
    Capturing,
    Analyzing {
        image: CapturedImage,
        attempt: u64,
    },
    Results {
        image: CapturedImage,
        estimate: PackageEstimate,
    },
    Error {
        message: String,
    },
}

impl Screen {
    pub fn state(&self) -> AppState {
        match self {
            Screen::Idle => AppState::Idle,
            Screen::Capturing => AppState::Capturing,
            Screen::Analyzing { .. } => AppState::Analyzing,
            Screen::Results { .. } => AppState::Results,
            Screen::Error { .. } => AppState::Error,
        }
    }
}

/// 入力イベント
#[derive(Debug, Clone)]
pub enum Event {
    /// スキャン開始（カメラ画面へ）
    StartScan,
    /// Idle からのファイルアップロード（Capturing を経由しない）
    Upload(CapturedImage),
    /// シャッター、または撮影画面でのアップロード
    Acquire(CapturedImage),
    /// 撮影画面を閉じる
    Close,
    AnalysisSucceeded {
        attempt: u64,
        estimate: PackageEstimate,
    },
    /// `reason` は診断用。ユーザーには表示しない
    AnalysisFailed {
        attempt: u64,
        reason: String,
    },
    /// 結果画面で説明文を編集
    EditDescription(String),
    Reset,
    Retry,
}

/// エラー報告用のペイロードなしイベント種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    StartScan,
    Upload,
    Acquire,
    Close,
    AnalysisSucceeded,
    AnalysisFailed,
    EditDescription,
    Reset,
    Retry,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::StartScan => EventKind::StartScan,
            Event::Upload(_) => EventKind::Upload,
            Event::Acquire(_) => EventKind::Acquire,
            Event::Close => EventKind::Close,
            Event::AnalysisSucceeded { .. } => EventKind::AnalysisSucceeded,
            Event::AnalysisFailed { .. } => EventKind::AnalysisFailed,
            Event::EditDescription(_) => EventKind::EditDescription,
            Event::Reset => EventKind::Reset,
            Event::Retry => EventKind::Retry,
        }
    }
}

/// 遷移に伴って実行すべき副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 解析ゲートウェイを1回呼び、結果を同じ attempt のイベントで返す
    Analyze { attempt: u64, image: CapturedImage },
}

/// 遷移結果
#[derive(Debug, Clone)]
pub struct Transition {
    pub controller: Controller,
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    screen: Screen,
    next_attempt: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn state(&self) -> AppState {
        self.screen.state()
    }

    /// Analyzing / Results 中の撮影画像
    pub fn captured_image(&self) -> Option<&CapturedImage> {
        match &self.screen {
            Screen::Analyzing { image, .. } | Screen::Results { image, .. } => Some(image),
            _ => None,
        }
    }

    pub fn estimate(&self) -> Option<&PackageEstimate> {
        match &self.screen {
            Screen::Results { estimate, .. } => Some(estimate),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.screen {
            Screen::Error { message } => Some(message),
            _ => None,
        }
    }

    /// 解析中の attempt 番号
    pub fn pending_attempt(&self) -> Option<u64> {
        match &self.screen {
            Screen::Analyzing { attempt, .. } => Some(*attempt),
            _ => None,
        }
    }

    /// 遷移関数（純粋）
    ///
    /// 受け付けない組み合わせは `Error::InvalidTransition` を返し、状態は変えない。
    /// 解析完了イベントは、現在待っている attempt と一致する場合のみ受け付ける。
    pub fn handle(&self, event: Event) -> Result<Transition> {
        let kind = event.kind();
        let mut next_attempt = self.next_attempt;

        let (screen, command) = match (&self.screen, event) {
            (_, Event::Reset) => (Screen::Idle, None),

            (Screen::Idle, Event::StartScan) => (Screen::Capturing, None),

            (Screen::Idle, Event::Upload(image)) | (Screen::Capturing, Event::Acquire(image)) => {
                let attempt = next_attempt;
                next_attempt += 1;
                (
                    Screen::Analyzing { image: image.clone(), attempt },
                    Some(Command::Analyze { attempt, image }),
                )
            }

            (Screen::Capturing, Event::Close) => (Screen::Idle, None),

            (
                Screen::Analyzing { image, attempt },
                Event::AnalysisSucceeded { attempt: answered, estimate },
            ) if *attempt == answered => (
                Screen::Results { image: image.clone(), estimate },
                None,
            ),

            (Screen::Analyzing { attempt, .. }, Event::AnalysisFailed { attempt: answered, .. })
                if *attempt == answered =>
            {
                (
                    Screen::Error { message: GENERIC_ERROR_MESSAGE.to_string() },
                    None,
                )
            }

            (Screen::Results { image, estimate }, Event::EditDescription(text)) => {
                let estimate = PackageEstimate {
                    description: text,
                    ..estimate.clone()
                };
                (Screen::Results { image: image.clone(), estimate }, None)
            }

            (Screen::Error { .. }, Event::Retry) => (Screen::Idle, None),

            (screen, _) => {
                return Err(Error::InvalidTransition {
                    state: screen.state(),
                    event: kind,
                })
            }
        };

        Ok(Transition {
            controller: Controller { screen, next_attempt },
            command,
        })
    }

    /// `handle` の結果で自身を置き換える
    pub fn apply(&mut self, event: Event) -> Result<Option<Command>> {
        let from = self.state();
        let Transition { controller, command } = self.handle(event)?;
        *self = controller;
        log::debug!("state {:?} -> {:?}", from, self.state());
        Ok(command)
    }
}
