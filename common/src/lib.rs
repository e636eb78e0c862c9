//! SmartSend Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態機械・Gemini契約

pub mod types;
pub mod error;
pub mod image;
pub mod prompts;
pub mod parser;
pub mod gemini;
pub mod controller;
pub mod gateway;
pub mod session;
pub mod metrics;
pub mod report;
pub mod overlay;
pub mod capture;

pub use types::{PackageEstimate, ShippingOption};
pub use error::{Error, Result};
pub use image::CapturedImage;
pub use parser::{extract_json, parse_estimate};
pub use controller::{AppState, Command, Controller, Event, Screen, GENERIC_ERROR_MESSAGE};
pub use gateway::{run_analysis, AnalysisGateway};
pub use session::Session;
pub use report::share_text;
