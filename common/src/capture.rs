//! カメラ取得まわりの状態

/// カメラ取得に失敗した時に撮影画面へ表示するメッセージ
pub const CAMERA_UNAVAILABLE_MESSAGE: &str =
    "Unable to access camera. Please allow permissions or use file upload.";

/// フレーム取得時のJPEG品質
pub const FRAME_JPEG_QUALITY: f64 = 0.8;

/// カメラの向き
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    /// 背面
    #[default]
    Environment,
    /// 前面
    User,
}

impl FacingMode {
    pub fn toggle(self) -> Self {
        match self {
            FacingMode::Environment => FacingMode::User,
            FacingMode::User => FacingMode::Environment,
        }
    }

    /// getUserMedia の facingMode 制約値
    pub fn as_constraint(&self) -> &'static str {
        match self {
            FacingMode::Environment => "environment",
            FacingMode::User => "user",
        }
    }
}

/// カメラの状態（画面状態には影響しない）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CameraStatus {
    #[default]
    Starting,
    Live,
    Unavailable(String),
}

impl CameraStatus {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            CameraStatus::Unavailable(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_toggle() {
        let facing = FacingMode::default();
        assert_eq!(facing, FacingMode::Environment);
        assert_eq!(facing.toggle(), FacingMode::User);
        assert_eq!(facing.toggle().toggle(), FacingMode::Environment);
        assert_eq!(facing.toggle().as_constraint(), "user");
    }

    #[test]
    fn test_camera_status_message() {
        assert_eq!(CameraStatus::Live.error_message(), None);
        let status = CameraStatus::Unavailable(CAMERA_UNAVAILABLE_MESSAGE.to_string());
        assert!(status.error_message().unwrap().contains("file upload"));
    }
}
