use super::*;

// =============================================================
// Step arithmetic
// =============================================================

#[test]
fn next_step_saturates_at_final_step() {
    let mut state = StoryState::new(8);
    for expected in 2..=8 {
        state.next_step();
        assert_eq!(state.current_step, expected);
    }
    state.next_step();
    assert_eq!(state.current_step, 8);
}

#[test]
fn prev_step_saturates_at_first_step() {
    let mut state = StoryState::new(8);
    state.prev_step();
    assert_eq!(state.current_step, 1);

    state.go_to_step(3);
    state.prev_step();
    state.prev_step();
    state.prev_step();
    assert_eq!(state.current_step, 1);
}

#[test]
fn next_and_prev_leave_play_mode_alone() {
    let mut state = StoryState::new(8);
    state.toggle_play();
    assert!(state.playing);

    state.next_step();
    assert!(state.playing);
    state.prev_step();
    assert!(state.playing);
}

// =============================================================
// go_to_step
// =============================================================

#[test]
fn go_to_step_is_idempotent_and_stops_playback() {
    let mut state = StoryState::new(8);
    state.toggle_play();

    state.go_to_step(5);
    assert_eq!(state.current_step, 5);
    assert!(!state.playing);

    let step_after_once = state.current_step;
    state.go_to_step(5);
    assert_eq!(state.current_step, step_after_once);
    assert!(!state.playing);
}

#[test]
fn go_to_step_saturates_out_of_range_positions() {
    let mut state = StoryState::new(8);
    state.go_to_step(0);
    assert_eq!(state.current_step, 1);
    state.go_to_step(99);
    assert_eq!(state.current_step, 8);
}

// =============================================================
// Auto-advance
// =============================================================

#[test]
fn timer_advances_while_playing_before_final_step() {
    let mut state = StoryState::new(8);
    state.go_to_step(3);
    state.toggle_play();

    let epoch = state.timer_epoch;
    assert!(state.advance_from_timer(epoch));
    assert_eq!(state.current_step, 4);
    assert!(state.playing);
}

#[test]
fn timer_at_final_step_stops_playback_without_wraparound() {
    let mut state = StoryState::new(8);
    state.go_to_step(8);
    state.toggle_play();

    let epoch = state.timer_epoch;
    assert!(state.advance_from_timer(epoch));
    assert_eq!(state.current_step, 8);
    assert!(!state.playing);
}

#[test]
fn stale_timer_is_a_no_op() {
    let mut state = StoryState::new(8);
    state.go_to_step(3);
    state.toggle_play();
    let armed_epoch = state.timer_epoch;

    // User jumps back to step 1 while the timer is pending.
    state.go_to_step(1);
    assert!(!state.advance_from_timer(armed_epoch));
    assert_eq!(state.current_step, 1);
    assert!(!state.playing);
}

#[test]
fn timer_ignored_when_paused() {
    let mut state = StoryState::new(8);
    let epoch = state.timer_epoch;
    assert!(!state.advance_from_timer(epoch));
    assert_eq!(state.current_step, 1);
}

#[test]
fn every_transition_invalidates_pending_timers() {
    let mut state = StoryState::new(8);
    state.toggle_play();

    for mutate in [
        StoryState::next_step,
        StoryState::prev_step,
        StoryState::toggle_play,
    ] {
        let armed_epoch = state.timer_epoch;
        mutate(&mut state);
        assert_ne!(state.timer_epoch, armed_epoch);
    }
}

#[test]
fn teardown_invalidation_blocks_late_firing() {
    let mut state = StoryState::new(8);
    state.toggle_play();
    let armed_epoch = state.timer_epoch;

    state.invalidate_timer();
    assert!(!state.advance_from_timer(armed_epoch));
}

// =============================================================
// Full-run scenario
// =============================================================

#[test]
fn seven_next_calls_reach_step_eight_then_hold() {
    let mut state = StoryState::new(8);
    for _ in 0..7 {
        state.next_step();
    }
    assert_eq!(state.current_step, 8);
    state.next_step();
    assert_eq!(state.current_step, 8);
}

#[test]
fn played_to_completion_walks_every_step_then_stops() {
    let mut state = StoryState::new(8);
    state.toggle_play();

    let mut visited = vec![state.current_step];
    loop {
        let epoch = state.timer_epoch;
        assert!(state.advance_from_timer(epoch));
        visited.push(state.current_step);
        if !state.playing {
            break;
        }
    }
    assert_eq!(visited, vec![1, 2, 3, 4, 5, 6, 7, 8, 8]);
    assert!(state.at_last_step());
}

#[test]
#[should_panic(expected = "at least one step")]
fn zero_steps_is_rejected() {
    let _ = StoryState::new(0);
}
