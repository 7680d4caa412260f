//! Step position and play/pause state for the guided story timeline.
//!
//! DESIGN
//! ======
//! The auto-advance timer lives in the page (`pages::story`), but its
//! correctness hinges on one invariant owned here: at most one pending
//! advance may ever take effect. Every transition bumps `timer_epoch`; a
//! timer task captures the epoch when it is armed and hands it back through
//! [`StoryState::advance_from_timer`], which rejects stale epochs. Under the
//! single-threaded browser event loop this is equivalent to cancelling the
//! outstanding timeout on every state change.

#[cfg(test)]
#[path = "story_test.rs"]
mod story_test;

/// Delay between automatic step advances while playing.
pub const AUTO_ADVANCE_MS: u64 = 5000;

/// Story timeline driver: 1-based step position plus play mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoryState {
    /// Current step position, always in `[1, step_count]`.
    pub current_step: usize,
    /// Whether auto-advance is active.
    pub playing: bool,
    /// Bumped on every transition; stale timers compare against it.
    pub timer_epoch: u64,
    step_count: usize,
}

impl StoryState {
    /// A fresh driver positioned on step 1, paused.
    ///
    /// # Panics
    ///
    /// Panics if `step_count` is zero; the step list is authored and
    /// statically non-empty.
    #[must_use]
    pub fn new(step_count: usize) -> Self {
        assert!(step_count > 0, "story requires at least one step");
        Self {
            current_step: 1,
            playing: false,
            timer_epoch: 0,
            step_count,
        }
    }

    /// Total number of steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Whether the driver sits on the final step.
    #[must_use]
    pub fn at_last_step(&self) -> bool {
        self.current_step == self.step_count
    }

    /// Jump directly to `step` and stop playback.
    ///
    /// Step indicators only ever offer valid positions, but the assignment
    /// saturates into `[1, step_count]` regardless.
    pub fn go_to_step(&mut self, step: usize) {
        self.current_step = step.clamp(1, self.step_count);
        self.playing = false;
        self.invalidate_timer();
    }

    /// Advance one step; no-op on the final step. Play mode is unchanged.
    pub fn next_step(&mut self) {
        if self.current_step < self.step_count {
            self.current_step += 1;
        }
        self.invalidate_timer();
    }

    /// Go back one step; no-op on the first step. Play mode is unchanged.
    pub fn prev_step(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
        self.invalidate_timer();
    }

    /// Flip play mode.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        self.invalidate_timer();
    }

    /// Apply a fired auto-advance timer that was armed at `epoch`.
    ///
    /// Returns `true` if the timer was current and state changed. A stale
    /// epoch (any transition happened since arming) or paused state makes
    /// the firing a no-op. On the final step, play mode switches off instead
    /// of wrapping around.
    pub fn advance_from_timer(&mut self, epoch: u64) -> bool {
        if epoch != self.timer_epoch || !self.playing {
            return false;
        }
        if self.current_step < self.step_count {
            self.current_step += 1;
        } else {
            self.playing = false;
        }
        self.invalidate_timer();
        true
    }

    /// Invalidate any in-flight timer. Also used by view teardown so an
    /// unmounted story page can never be advanced by a late firing.
    pub fn invalidate_timer(&mut self) {
        self.timer_epoch = self.timer_epoch.wrapping_add(1);
    }
}

impl Default for StoryState {
    fn default() -> Self {
        Self::new(crate::content::STORY_STEPS.len())
    }
}
