use std::fmt;

use tracing::{debug, warn};
use vitrine_model::{LoopMode, PlaybackState};

/// Receives the slide index after every navigation call.
pub type SlideObserver = Box<dyn FnMut(usize) + Send>;

/// Index and playback state of a carousel.
///
/// Pure state: the recurring timer lives in [`super::autoplay`] and drives
/// this controller through [`SlideIndexController::tick`]. Every transition
/// into or out of `Playing` bumps the playback epoch, and ticks carrying an
/// older epoch are dropped, so a cancelled timer can never move the index.
pub struct SlideIndexController {
    len: usize,
    current_index: usize,
    loop_mode: LoopMode,
    playback: PlaybackState,
    epoch: u64,
    observer: Option<SlideObserver>,
}

impl fmt::Debug for SlideIndexController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideIndexController")
            .field("len", &self.len)
            .field("current_index", &self.current_index)
            .field("loop_mode", &self.loop_mode)
            .field("playback", &self.playback)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl SlideIndexController {
    pub fn new(len: usize, loop_mode: LoopMode) -> Self {
        Self {
            len,
            current_index: 0,
            loop_mode,
            playback: PlaybackState::Stopped,
            epoch: 0,
            observer: None,
        }
    }

    #[must_use]
    pub fn on_slide_change<F>(mut self, observer: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn set_observer(&mut self, observer: Option<SlideObserver>) {
        self.observer = observer;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Generation of the current playback period.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Autoplay only makes sense with something to move between.
    pub fn can_autoplay(&self) -> bool {
        self.len > 1
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_empty()
            && (self.loop_mode.is_infinite() || self.current_index > 0)
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_empty()
            && (self.loop_mode.is_infinite()
                || self.current_index < self.len - 1)
    }

    /// Step forward: wraps in infinite mode, saturates at the last slide
    /// otherwise.
    pub fn advance(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let next = match self.loop_mode {
            LoopMode::Infinite => {
                (self.current_index % self.len + 1) % self.len
            }
            LoopMode::Finite => {
                (self.len - 1).min(self.current_index.saturating_add(1))
            }
        };
        Some(self.set_index(next))
    }

    /// Step back: wraps in infinite mode, saturates at the first slide
    /// otherwise.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let previous = match self.loop_mode {
            LoopMode::Infinite => {
                (self.current_index % self.len + self.len - 1) % self.len
            }
            LoopMode::Finite => self.current_index.saturating_sub(1),
        };
        Some(self.set_index(previous))
    }

    /// Jump straight to `index`. The index is taken as given.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        if index >= self.len {
            warn!(index, len = self.len, "slide index out of range");
        }
        Some(self.set_index(index))
    }

    /// Enter `Playing`. Refused for fewer than two slides and when already
    /// playing. Returns the new epoch on success.
    pub fn play(&mut self) -> Option<u64> {
        if !self.can_autoplay() || self.is_playing() {
            return None;
        }
        self.playback = PlaybackState::Playing;
        self.epoch = self.epoch.wrapping_add(1);
        debug!(epoch = self.epoch, "carousel playing");
        Some(self.epoch)
    }

    /// Enter `Stopped`. Returns whether playback was running.
    pub fn pause(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.playback = PlaybackState::Stopped;
        self.epoch = self.epoch.wrapping_add(1);
        debug!(epoch = self.epoch, "carousel paused");
        true
    }

    /// Timer firing for playback period `epoch`. Advances only while that
    /// period is still current.
    pub fn tick(&mut self, epoch: u64) -> Option<usize> {
        if !self.is_playing() || epoch != self.epoch {
            return None;
        }
        self.advance()
    }

    /// Replace the slide count, pulling the index back into range. The
    /// observer hears about the move unless the collection is now empty.
    /// Playback stops when fewer than two slides remain.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.current_index = 0;
        } else if self.current_index >= len {
            self.set_index(len - 1);
        }
        if !self.can_autoplay() {
            self.pause();
        }
    }

    fn set_index(&mut self, index: usize) -> usize {
        if index != self.current_index {
            debug!(from = self.current_index, to = index, "slide changed");
        }
        self.current_index = index;
        if let Some(observer) = self.observer.as_mut() {
            observer(index);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    fn observed(
        len: usize,
        loop_mode: LoopMode,
    ) -> (SlideIndexController, Arc<Mutex<Vec<usize>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let controller = SlideIndexController::new(len, loop_mode)
            .on_slide_change(move |index| sink.lock().push(index));
        (controller, seen)
    }

    #[test]
    fn advance_wraps_or_saturates() {
        let mut infinite = SlideIndexController::new(3, LoopMode::Infinite);
        infinite.go_to(2);
        assert_eq!(infinite.advance(), Some(0));

        let mut finite = SlideIndexController::new(3, LoopMode::Finite);
        finite.go_to(2);
        assert_eq!(finite.advance(), Some(2));
    }

    #[test]
    fn retreat_wraps_or_saturates() {
        let mut infinite = SlideIndexController::new(3, LoopMode::Infinite);
        assert_eq!(infinite.retreat(), Some(2));

        let mut finite = SlideIndexController::new(3, LoopMode::Finite);
        assert_eq!(finite.retreat(), Some(0));
    }

    #[test]
    fn observer_fires_on_every_navigation_call() {
        let (mut controller, seen) = observed(3, LoopMode::Finite);
        controller.retreat();
        controller.advance();
        controller.go_to(2);
        controller.advance();
        assert_eq!(*seen.lock(), vec![0, 1, 2, 2]);
    }

    #[test]
    fn go_to_does_not_clamp() {
        let mut controller = SlideIndexController::new(3, LoopMode::Finite);
        assert_eq!(controller.go_to(7), Some(7));
        assert!(!controller.can_go_next());
        assert_eq!(controller.advance(), Some(2));
    }

    #[test]
    fn empty_collection_disables_everything() {
        let (mut controller, seen) = observed(0, LoopMode::Infinite);
        assert!(!controller.can_go_next());
        assert!(!controller.can_go_previous());
        assert_eq!(controller.advance(), None);
        assert_eq!(controller.retreat(), None);
        assert_eq!(controller.go_to(0), None);
        assert_eq!(controller.play(), None);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn enablement_follows_loop_mode() {
        let mut finite = SlideIndexController::new(2, LoopMode::Finite);
        assert!(!finite.can_go_previous());
        assert!(finite.can_go_next());
        finite.advance();
        assert!(finite.can_go_previous());
        assert!(!finite.can_go_next());

        let infinite = SlideIndexController::new(2, LoopMode::Infinite);
        assert!(infinite.can_go_previous());
        assert!(infinite.can_go_next());
    }

    #[test]
    fn single_slide_never_plays() {
        let mut controller = SlideIndexController::new(1, LoopMode::Infinite);
        assert_eq!(controller.play(), None);
        assert!(!controller.is_playing());
        assert_eq!(controller.tick(controller.epoch()), None);
    }

    #[test]
    fn stale_ticks_are_dropped() {
        let (mut controller, seen) = observed(4, LoopMode::Infinite);
        let first = controller.play().unwrap();
        assert_eq!(controller.tick(first), Some(1));

        assert!(controller.pause());
        assert_eq!(controller.tick(first), None);

        let second = controller.play().unwrap();
        assert_ne!(first, second);
        assert_eq!(controller.tick(first), None);
        assert_eq!(controller.tick(second), Some(2));
        assert_eq!(*seen.lock(), vec![1, 2]);
    }

    #[test]
    fn play_twice_keeps_the_same_period() {
        let mut controller = SlideIndexController::new(3, LoopMode::Finite);
        let epoch = controller.play().unwrap();
        assert_eq!(controller.play(), None);
        assert_eq!(controller.epoch(), epoch);
        assert!(!SlideIndexController::new(3, LoopMode::Finite).pause());
    }

    #[test]
    fn shrinking_below_two_slides_stops_playback() {
        let mut controller = SlideIndexController::new(5, LoopMode::Finite);
        controller.go_to(4);
        controller.play();
        controller.set_len(1);
        assert_eq!(controller.current_index(), 0);
        assert!(!controller.is_playing());
    }

    #[test]
    fn shrinking_reports_the_clamped_index() {
        let (mut controller, seen) = observed(5, LoopMode::Finite);
        controller.go_to(4);
        controller.set_len(3);
        assert_eq!(controller.current_index(), 2);
        assert_eq!(*seen.lock(), vec![4, 2]);

        controller.set_len(4);
        controller.set_len(0);
        assert_eq!(controller.current_index(), 0);
        assert_eq!(*seen.lock(), vec![4, 2]);
    }
}
