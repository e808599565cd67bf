use serde::Serialize;
use vitrine_model::SlideKey;

pub const EMPTY_PLACEHOLDER: &str = "No items to display";

const INDICATOR_WIDTH: u16 = 8;
const ACTIVE_INDICATOR_WIDTH: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    pub width: u16,
}

impl Indicator {
    pub fn new(index: usize, active: bool) -> Self {
        Self {
            index,
            active,
            width: if active {
                ACTIVE_INDICATOR_WIDTH
            } else {
                INDICATOR_WIDTH
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arrows {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayPauseButton {
    pub playing: bool,
    /// Accessible label: the action the button performs.
    pub label: &'static str,
}

impl PlayPauseButton {
    pub fn new(playing: bool) -> Self {
        Self {
            playing,
            label: if playing { "Pause" } else { "Play" },
        }
    }
}

/// Render-ready snapshot of a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselView {
    pub height: String,
    pub slide_keys: Vec<SlideKey>,
    pub current_index: usize,
    /// Set instead of the track when there are no slides.
    pub placeholder: Option<&'static str>,
    pub arrows: Option<Arrows>,
    pub indicators: Vec<Indicator>,
    pub play_pause: Option<PlayPauseButton>,
}

impl CarouselView {
    /// Horizontal track offset in percent of the viewport width.
    pub fn track_offset_percent(&self) -> i64 {
        -(self.current_index as i64).saturating_mul(100)
    }

    /// CSS transform for the slide track.
    pub fn track_transform(&self) -> String {
        format!("translateX({}%)", self.track_offset_percent())
    }

    pub fn current_key(&self) -> Option<&SlideKey> {
        self.slide_keys.get(self.current_index)
    }

    /// Compact text form: `‹ ○ ● ○ › ⏸`.
    pub fn to_text(&self) -> String {
        if let Some(placeholder) = self.placeholder {
            return placeholder.to_string();
        }

        let mut parts = Vec::new();
        if let Some(arrows) = self.arrows {
            parts.push(if arrows.previous_enabled { "‹" } else { "·" });
        }
        for indicator in &self.indicators {
            parts.push(if indicator.active { "●" } else { "○" });
        }
        if let Some(arrows) = self.arrows {
            parts.push(if arrows.next_enabled { "›" } else { "·" });
        }
        if let Some(button) = self.play_pause {
            parts.push(if button.playing { "⏸" } else { "▶" });
        }
        parts.join(" ")
    }
}
