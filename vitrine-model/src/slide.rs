//! Carousel slide types

use std::fmt::{self, Display, Formatter};

/// Identity key of a slide. Slides coming from data sources are keyed by
/// name, generated slides by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SlideKey {
    Index(usize),
    Name(String),
}

impl Display for SlideKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SlideKey::Index(index) => write!(f, "{index}"),
            SlideKey::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<usize> for SlideKey {
    fn from(value: usize) -> Self {
        SlideKey::Index(value)
    }
}

impl From<&str> for SlideKey {
    fn from(value: &str) -> Self {
        SlideKey::Name(value.to_string())
    }
}

/// One item of a carousel: an identity key plus whatever the renderer needs
/// to draw it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide<C> {
    pub key: SlideKey,
    pub content: C,
}

impl<C> Slide<C> {
    pub fn new(key: impl Into<SlideKey>, content: C) -> Self {
        Self {
            key: key.into(),
            content,
        }
    }
}

/// Boundary behavior when stepping past either end of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LoopMode {
    /// Saturate at the first and last slide.
    #[default]
    Finite,
    /// Wrap around with modulo arithmetic.
    Infinite,
}

impl LoopMode {
    pub fn from_flag(infinite_loop: bool) -> Self {
        if infinite_loop {
            LoopMode::Infinite
        } else {
            LoopMode::Finite
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, LoopMode::Infinite)
    }
}

/// Autoplay state of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing)
    }
}
