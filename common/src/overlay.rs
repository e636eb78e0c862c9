//! 撮影画面の演出用オーバーレイ値
//!
//! 実測ではない。タイマーで一定間隔ごとに再生成し、画面表示にのみ使う。

/// 再生成間隔（10回/秒）
pub const TICK_INTERVAL_MS: u32 = 100;

/// 距離メーターの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStatus {
    TooClose,
    Optimal,
    TooFar,
}

impl RangeStatus {
    pub fn from_range(range: f64) -> Self {
        if range <= 30.0 {
            RangeStatus::TooClose
        } else if range >= 70.0 {
            RangeStatus::TooFar
        } else {
            RangeStatus::Optimal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangeStatus::TooClose => "TOO CLOSE",
            RangeStatus::Optimal => "OPTIMAL RANGE",
            RangeStatus::TooFar => "TOO FAR",
        }
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            RangeStatus::TooClose => "close",
            RangeStatus::Optimal => "optimal",
            RangeStatus::TooFar => "far",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayReading {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub weight: f64,
    /// 0-100、50が最適
    pub range: f64,
}

impl Default for OverlayReading {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            length: 0.0,
            weight: 0.0,
            range: 50.0,
        }
    }
}

impl OverlayReading {
    /// `random` は [0, 1) の乱数源、`now_ms` は経過ミリ秒
    pub fn sample(mut random: impl FnMut() -> f64, now_ms: f64) -> Self {
        Self {
            width: 24.0 + (random() * 0.8 - 0.4),
            height: 18.0 + (random() * 0.8 - 0.4),
            length: 32.0 + (random() * 0.8 - 0.4),
            weight: 2.4 + (random() * 0.2 - 0.1),
            range: 50.0 + (now_ms / 1500.0).sin() * 35.0,
        }
    }

    pub fn range_status(&self) -> RangeStatus {
        RangeStatus::from_range(self.range)
    }
}
