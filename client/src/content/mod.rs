//! Compiled-in authored content.
//!
//! The story steps are fixed editorial copy ordered by sequence position;
//! they ship inside the binary rather than behind a fetch because the
//! narrative and the driver that walks it version together.

mod story_steps;

#[cfg(test)]
#[path = "story_steps_test.rs"]
mod story_steps_test;

pub use story_steps::{STORY_STEPS, StepStat, StoryStep};
