//! 体積・容積重量の計算

use crate::types::PackageEstimate;

/// cm³ → L
pub const CM3_PER_LITER: f64 = 1000.0;
/// 容積重量の係数（cm³ / kg）
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

impl PackageEstimate {
    pub fn volume_cm3(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// 体積（L）
    pub fn volume_liters(&self) -> f64 {
        self.volume_cm3() / CM3_PER_LITER
    }

    /// 容積重量（kg）
    pub fn volumetric_weight_kg(&self) -> f64 {
        self.volume_cm3() / VOLUMETRIC_DIVISOR
    }
}

/// 表示用（小数2桁）
pub fn format_fixed2(value: f64) -> String {
    format!("{:.2}", value)
}
