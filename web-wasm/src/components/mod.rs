//! 画面コンポーネント

pub mod header;
pub mod upload_button;
pub mod landing;
pub mod camera_view;
pub mod analyzing_view;
pub mod results_view;
pub mod error_view;
