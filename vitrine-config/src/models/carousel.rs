use std::time::Duration;

use serde::{Deserialize, Serialize};
use vitrine_model::LoopMode;

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 3_000;

/// Carousel defaults. Pages can still override individual carousels (the
/// home page hero runs on a slower 5s cadence with wrap-around).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Start in the playing state when mounted with more than one slide.
    pub autoplay: bool,
    /// Period between automatic advances while playing.
    pub autoplay_interval_ms: u64,
    /// Wrap past either end instead of saturating.
    pub infinite_loop: bool,
    pub show_indicators: bool,
    pub show_arrows: bool,
    /// CSS height of the slide viewport.
    pub height: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            infinite_loop: false,
            show_indicators: true,
            show_arrows: true,
            height: "400px".to_string(),
        }
    }
}

impl CarouselConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn loop_mode(&self) -> LoopMode {
        LoopMode::from_flag(self.infinite_loop)
    }
}
