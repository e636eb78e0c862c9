//! API連携

pub mod gemini;
