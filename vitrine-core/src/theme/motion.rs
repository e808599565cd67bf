//! Transition duration tokens.
//!
//! Durations scale by the square root of the preset factor so interactions
//! neither snap at small scales nor drag at large ones.

use std::time::Duration;

use serde::Serialize;

/// | Token     | Base  |
/// |-----------|-------|
/// | `quick`   | 100ms |
/// | `regular` | 250ms |
/// | `slow`    | 500ms |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionTokens {
    pub quick: u64,
    pub regular: u64,
    pub slow: u64,
}

impl TransitionTokens {
    pub const BASE: Self = Self {
        quick: 100,
        regular: 250,
        slow: 500,
    };

    pub const MIN_DURATION: u64 = 50;
    pub const MAX_DURATION: u64 = 2000;

    pub fn scaled(scale: f32) -> Self {
        let factor = scale.max(0.0).sqrt();
        Self {
            quick: Self::scale_duration(Self::BASE.quick, factor),
            regular: Self::scale_duration(Self::BASE.regular, factor),
            slow: Self::scale_duration(Self::BASE.slow, factor),
        }
    }

    #[inline]
    fn scale_duration(base: u64, factor: f32) -> u64 {
        let scaled = ((base as f32) * factor).round() as u64;
        scaled.clamp(Self::MIN_DURATION, Self::MAX_DURATION)
    }

    pub fn get(&self, speed: TransitionSpeed) -> u64 {
        match speed {
            TransitionSpeed::Quick => self.quick,
            TransitionSpeed::Regular => self.regular,
            TransitionSpeed::Slow => self.slow,
        }
    }

    pub fn duration(&self, speed: TransitionSpeed) -> Duration {
        Duration::from_millis(self.get(speed))
    }

    /// CSS time value, e.g. `0.1s`.
    pub fn css(&self, speed: TransitionSpeed) -> String {
        format!("{}s", self.get(speed) as f64 / 1000.0)
    }
}

impl Default for TransitionTokens {
    fn default() -> Self {
        Self::BASE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionSpeed {
    Quick,
    Regular,
    Slow,
}
