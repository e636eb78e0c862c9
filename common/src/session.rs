//! 状態遷移と副作用の結合
//!
//! Controller が返した Command を実行し、結果を次のイベントとして戻す。
//! 解析中に別の Command は発生しない（状態機械が受け付けない）。

use crate::controller::{AppState, Command, Controller, Event};
use crate::error::Result;
use crate::gateway::{run_analysis, AnalysisGateway};

pub struct Session<G> {
    controller: Controller,
    gateway: G,
}

impl<G: AnalysisGateway> Session<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            controller: Controller::new(),
            gateway,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// イベントを適用し、必要なら解析の完了まで待つ
    pub async fn dispatch(&mut self, event: Event) -> Result<AppState> {
        if let Some(command) = self.controller.apply(event)? {
            self.execute(command).await?;
        }
        Ok(self.controller.state())
    }

    async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Analyze { attempt, image } => {
                let outcome = run_analysis(&self.gateway, attempt, &image).await;
                self.controller.apply(outcome)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::GENERIC_ERROR_MESSAGE;
    use crate::error::Error;
    use crate::image::CapturedImage;
    use crate::types::{PackageEstimate, ShippingOption};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn image() -> CapturedImage {
        CapturedImage::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap()
    }

    fn fixed_estimate() -> PackageEstimate {
        PackageEstimate {
            length: 32.0,
            width: 24.0,
            height: 18.0,
            weight: 2.4,
            description: "Cardboard box".to_string(),
            confidence: Some(90.0),
            shipping_options: vec![ShippingOption {
                carrier: "UPS".to_string(),
                name: "Ground".to_string(),
                price: 11.5,
                days: 4.0,
            }],
        }
    }

    /// 常に同じ結果を返す
    struct FixedGateway {
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl AnalysisGateway for FixedGateway {
        async fn analyze(&self, _image: &CapturedImage) -> crate::error::Result<PackageEstimate> {
            self.calls.set(self.calls.get() + 1);
            Ok(fixed_estimate())
        }
    }

    /// 常に指定のエラーで失敗する
    struct FailingGateway {
        make_error: fn() -> Error,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl AnalysisGateway for FailingGateway {
        async fn analyze(&self, _image: &CapturedImage) -> crate::error::Result<PackageEstimate> {
            self.calls.set(self.calls.get() + 1);
            Err((self.make_error)())
        }
    }

    #[test]
    fn test_capture_then_wait_ends_in_results() {
        let mut session = Session::new(FixedGateway { calls: Cell::new(0) });

        assert_eq!(block_on(session.dispatch(Event::StartScan)).unwrap(), AppState::Capturing);
        let state = block_on(session.dispatch(Event::Acquire(image()))).unwrap();

        assert_eq!(state, AppState::Results);
        assert_eq!(session.controller().estimate(), Some(&fixed_estimate()));
        assert_eq!(session.controller().captured_image(), Some(&image()));
        assert_eq!(session.gateway.calls.get(), 1);
    }

    #[test]
    fn test_upload_ends_in_results() {
        let mut session = Session::new(FixedGateway { calls: Cell::new(0) });
        let state = block_on(session.dispatch(Event::Upload(image()))).unwrap();
        assert_eq!(state, AppState::Results);
    }

    #[test]
    fn test_rejection_ends_in_generic_error_regardless_of_cause() {
        let causes: [fn() -> Error; 3] = [
            || Error::Transport("connection reset".into()),
            || Error::EmptyResponse,
            || Error::Contract("missing field `weight`".into()),
        ];

        for make_error in causes {
            let mut session = Session::new(FailingGateway {
                make_error,
                calls: Cell::new(0),
            });
            block_on(session.dispatch(Event::StartScan)).unwrap();
            let state = block_on(session.dispatch(Event::Acquire(image()))).unwrap();

            assert_eq!(state, AppState::Error);
            assert_eq!(session.controller().error_message(), Some(GENERIC_ERROR_MESSAGE));
            assert!(session.controller().captured_image().is_none());
            // 自動リトライしない
            assert_eq!(session.gateway.calls.get(), 1);
        }
    }

    #[test]
    fn test_retry_then_reset_clears_everything() {
        let mut session = Session::new(FailingGateway {
            make_error: || Error::Transport("timeout".into()),
            calls: Cell::new(0),
        });
        block_on(session.dispatch(Event::Upload(image()))).unwrap();
        assert_eq!(block_on(session.dispatch(Event::Retry)).unwrap(), AppState::Idle);
        assert!(session.controller().error_message().is_none());
    }

    #[test]
    fn test_invalid_event_is_reported() {
        let mut session = Session::new(FixedGateway { calls: Cell::new(0) });
        let err = block_on(session.dispatch(Event::Close)).unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { .. }));
        assert_eq!(session.controller().state(), AppState::Idle);
        assert_eq!(session.gateway.calls.get(), 0);
    }
}
