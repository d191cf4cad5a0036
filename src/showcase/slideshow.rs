// SPDX-License-Identifier: MPL-2.0
//! Slideshow position and autoplay timer state.

use crate::application::port::{Scheduler, TimerId};
use crate::domain::ui::AutoplayInterval;

/// Current position in an image set of fixed length.
///
/// Both directions wrap around: advancing past the last image returns to the
/// first, stepping back from the first goes to the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePosition {
    index: usize,
    len: usize,
}

impl SlidePosition {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Current 0-based index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advances by one and returns the new index.
    ///
    /// Returns `None` if there are no images.
    pub fn advance(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Steps back by one and returns the new index.
    ///
    /// Returns `None` if there are no images.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        Some(self.index)
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

/// The single repeating timer that drives automatic advancement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autoplay {
    interval: AutoplayInterval,
    timer: Option<TimerId>,
}

impl Autoplay {
    #[must_use]
    pub fn new(interval: AutoplayInterval) -> Self {
        Self {
            interval,
            timer: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> AutoplayInterval {
        self.interval
    }

    /// Starts a fresh timer, cancelling the running one first.
    pub fn start(&mut self, scheduler: &mut impl Scheduler) -> TimerId {
        self.stop(scheduler);
        let id = scheduler.start_interval(self.interval.as_duration());
        self.timer = Some(id);
        id
    }

    /// Cancels the running timer, if any.
    pub fn stop(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(id) = self.timer.take() {
            scheduler.cancel_interval(id);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Returns `true` if `id` is the timer this autoplay currently owns.
    #[must_use]
    pub fn owns(&self, id: TimerId) -> bool {
        self.timer == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::ManualScheduler;

    #[test]
    fn advance_wraps_to_first() {
        let mut position = SlidePosition::new(3);
        assert_eq!(position.advance(), Some(1));
        assert_eq!(position.advance(), Some(2));
        assert_eq!(position.advance(), Some(0));
    }

    #[test]
    fn retreat_wraps_to_last() {
        let mut position = SlidePosition::new(3);
        assert_eq!(position.retreat(), Some(2));
        assert_eq!(position.retreat(), Some(1));
    }

    #[test]
    fn empty_position_never_moves() {
        let mut position = SlidePosition::new(0);
        assert_eq!(position.advance(), None);
        assert_eq!(position.retreat(), None);
        assert!(!position.jump_to(0));
    }

    #[test]
    fn advancing_n_times_lands_on_start_plus_n_mod_len() {
        for len in 1..6 {
            for start in 0..len {
                for steps in 1..(3 * len) {
                    let mut position = SlidePosition::new(len);
                    assert!(position.jump_to(start));
                    for _ in 0..steps {
                        position.advance();
                    }
                    assert_eq!(position.index(), (start + steps) % len);
                }
            }
        }
    }

    #[test]
    fn start_replaces_running_timer() {
        let mut scheduler = ManualScheduler::new();
        let mut autoplay = Autoplay::new(AutoplayInterval::default());

        let first = autoplay.start(&mut scheduler);
        let second = autoplay.start(&mut scheduler);

        assert_ne!(first, second);
        assert_eq!(scheduler.active_timers(), vec![second]);
        assert!(autoplay.owns(second));
        assert!(!autoplay.owns(first));
    }

    #[test]
    fn stop_clears_handle() {
        let mut scheduler = ManualScheduler::new();
        let mut autoplay = Autoplay::new(AutoplayInterval::default());
        autoplay.start(&mut scheduler);

        autoplay.stop(&mut scheduler);

        assert!(!autoplay.is_running());
        assert!(scheduler.active_timers().is_empty());
        // Stopping again is harmless.
        autoplay.stop(&mut scheduler);
    }
}
