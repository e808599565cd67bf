//! Carousel: slide index state, the autoplay timer and the mounted
//! component tying both to a slide collection.

pub mod autoplay;
pub mod controller;
pub mod view;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tracing::debug;
use vitrine_config::CarouselConfig;
use vitrine_model::{LoopMode, Slide};

pub use autoplay::AutoplayTimer;
pub use controller::{SlideIndexController, SlideObserver};
pub use view::{
    Arrows, CarouselView, EMPTY_PLACEHOLDER, Indicator, PlayPauseButton,
};

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselOptions {
    pub autoplay: bool,
    pub autoplay_interval: Duration,
    pub show_indicators: bool,
    pub show_arrows: bool,
    pub loop_mode: LoopMode,
    pub height: String,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::from(&CarouselConfig::default())
    }
}

impl From<&CarouselConfig> for CarouselOptions {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            autoplay: config.autoplay,
            autoplay_interval: config.autoplay_interval(),
            show_indicators: config.show_indicators,
            show_arrows: config.show_arrows,
            loop_mode: config.loop_mode(),
            height: config.height.clone(),
        }
    }
}

impl CarouselOptions {
    #[must_use]
    pub fn autoplay(mut self, interval: Duration) -> Self {
        self.autoplay = true;
        self.autoplay_interval = interval;
        self
    }

    #[must_use]
    pub fn loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }
}

/// A mounted carousel.
///
/// Owns the slides and the autoplay timer; the index state is shared with
/// the timer task. Dropping the carousel releases the timer.
#[derive(Debug)]
pub struct Carousel<C> {
    slides: Vec<Slide<C>>,
    options: CarouselOptions,
    state: Arc<Mutex<SlideIndexController>>,
    timer: Option<AutoplayTimer>,
    runtime: Option<Handle>,
}

impl<C> Carousel<C> {
    /// Mount with the index at zero. Starting in the playing state needs a
    /// tokio runtime; without one this fails with [`CoreError::NoRuntime`].
    pub fn mount(
        slides: Vec<Slide<C>>,
        options: CarouselOptions,
    ) -> Result<Self> {
        Self::mount_inner(slides, options, None)
    }

    /// Mount and report every index change to `observer`.
    ///
    /// The observer runs while the index state is locked and must not call
    /// back into the carousel.
    pub fn mount_with_observer<F>(
        slides: Vec<Slide<C>>,
        options: CarouselOptions,
        observer: F,
    ) -> Result<Self>
    where
        F: FnMut(usize) + Send + 'static,
    {
        Self::mount_inner(slides, options, Some(Box::new(observer)))
    }

    fn mount_inner(
        slides: Vec<Slide<C>>,
        options: CarouselOptions,
        observer: Option<SlideObserver>,
    ) -> Result<Self> {
        let mut controller =
            SlideIndexController::new(slides.len(), options.loop_mode);
        controller.set_observer(observer);

        let mut carousel = Self {
            slides,
            state: Arc::new(Mutex::new(controller)),
            timer: None,
            runtime: Handle::try_current().ok(),
            options,
        };

        debug!(
            slides = carousel.slides.len(),
            autoplay = carousel.options.autoplay,
            "carousel mounted"
        );

        if carousel.options.autoplay {
            carousel.play()?;
        }
        Ok(carousel)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn slides(&self) -> &[Slide<C>] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.state.lock().current_index()
    }

    pub fn current_slide(&self) -> Option<&Slide<C>> {
        self.slides.get(self.current_index())
    }

    pub fn is_playing(&self) -> bool {
        self.state.lock().is_playing()
    }

    /// Whether an autoplay timer task is currently held.
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.lock().can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.state.lock().can_go_next()
    }

    pub fn next(&mut self) -> Option<usize> {
        self.state.lock().advance()
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.state.lock().retreat()
    }

    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        self.state.lock().go_to(index)
    }

    /// Start autoplay. Returns `Ok(false)` when there is nothing to do
    /// (already playing, or fewer than two slides).
    pub fn play(&mut self) -> Result<bool> {
        {
            let state = self.state.lock();
            if state.is_playing() || !state.can_autoplay() {
                return Ok(false);
            }
        }

        let runtime = match &self.runtime {
            Some(handle) => handle.clone(),
            None => {
                let handle =
                    Handle::try_current().map_err(|_| CoreError::NoRuntime)?;
                self.runtime = Some(handle.clone());
                handle
            }
        };

        let Some(epoch) = self.state.lock().play() else {
            return Ok(false);
        };
        self.timer = Some(AutoplayTimer::spawn(
            &runtime,
            Arc::clone(&self.state),
            epoch,
            self.options.autoplay_interval,
        ));
        Ok(true)
    }

    /// Stop autoplay and release the timer. Returns whether it was playing.
    pub fn pause(&mut self) -> bool {
        let paused = self.state.lock().pause();
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
        paused
    }

    /// Flip between playing and paused; returns the new playing state.
    pub fn toggle_play_pause(&mut self) -> Result<bool> {
        if self.is_playing() {
            self.pause();
            Ok(false)
        } else {
            self.play()
        }
    }

    /// Swap the slide collection. The index is pulled back into range and
    /// autoplay stops when fewer than two slides remain.
    pub fn set_slides(&mut self, slides: Vec<Slide<C>>) {
        let still_playing = {
            let mut state = self.state.lock();
            state.set_len(slides.len());
            state.is_playing()
        };
        self.slides = slides;
        if !still_playing {
            self.timer = None;
        }
    }

    pub fn view(&self) -> CarouselView {
        let state = self.state.lock();
        let len = self.slides.len();
        let current = state.current_index();
        let multiple = len > 1;

        CarouselView {
            height: self.options.height.clone(),
            slide_keys: self.slides.iter().map(|s| s.key.clone()).collect(),
            current_index: current,
            placeholder: (len == 0).then_some(EMPTY_PLACEHOLDER),
            arrows: (self.options.show_arrows && multiple).then(|| Arrows {
                previous_enabled: state.can_go_previous(),
                next_enabled: state.can_go_next(),
            }),
            indicators: if self.options.show_indicators && multiple {
                (0..len).map(|i| Indicator::new(i, i == current)).collect()
            } else {
                Vec::new()
            },
            play_pause: (self.options.autoplay && multiple)
                .then(|| PlayPauseButton::new(state.is_playing())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<Slide<String>> {
        (0..n).map(|i| Slide::new(i, format!("slide {i}"))).collect()
    }

    #[test]
    fn mount_without_autoplay_needs_no_runtime() {
        let mut carousel =
            Carousel::mount(slides(3), CarouselOptions::default()).unwrap();
        assert!(!carousel.is_playing());
        assert_eq!(carousel.next(), Some(1));
        assert_eq!(carousel.current_slide().unwrap().content, "slide 1");
    }

    #[test]
    fn autoplay_outside_a_runtime_is_an_error() {
        let options =
            CarouselOptions::default().autoplay(Duration::from_millis(500));
        let err = Carousel::mount(slides(3), options).unwrap_err();
        assert!(matches!(err, CoreError::NoRuntime));
    }

    #[test]
    fn single_slide_autoplay_is_ignored_even_without_runtime() {
        let options =
            CarouselOptions::default().autoplay(Duration::from_millis(500));
        let carousel = Carousel::mount(slides(1), options).unwrap();
        assert!(!carousel.is_playing());
        assert!(!carousel.has_timer());
        assert!(carousel.view().play_pause.is_none());
    }

    #[test]
    fn empty_carousel_renders_placeholder() {
        let carousel =
            Carousel::<String>::mount(Vec::new(), CarouselOptions::default())
                .unwrap();
        let view = carousel.view();
        assert_eq!(view.placeholder, Some(EMPTY_PLACEHOLDER));
        assert!(view.arrows.is_none());
        assert!(view.indicators.is_empty());
        assert_eq!(view.to_text(), "No items to display");
    }

    #[test]
    fn view_reflects_navigation() {
        let mut carousel =
            Carousel::mount(slides(3), CarouselOptions::default()).unwrap();
        carousel.go_to(2);
        let view = carousel.view();
        assert_eq!(view.current_index, 2);
        assert_eq!(
            view.arrows,
            Some(Arrows {
                previous_enabled: true,
                next_enabled: false
            })
        );
        assert_eq!(view.indicators.iter().filter(|i| i.active).count(), 1);
        assert!(view.indicators[2].active);
        assert_eq!(view.to_text(), "‹ ○ ○ ● ·");
    }
}
