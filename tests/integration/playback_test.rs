//! End-to-end playback scenarios against the library API

use std::time::Duration;

use super::helpers::fixtures_dir;
use itv::player::PlaybackState;
use itv::Trace;

fn load_fib() -> Trace {
    Trace::load(fixtures_dir().join("fib.json")).expect("should load fib.json")
}

#[test]
fn session_starts_at_frame_one_paused() {
    let mut state = PlaybackState::new(load_fib(), 50);

    let update = state.take_update().expect("initial update pending");
    assert_eq!(update.position, "Frame 1/8");
    assert_eq!(update.function_name, "main");
    assert_eq!(update.instruction, "PushConst(Number(10.0))");
    assert!(!state.is_playing());
}

#[test]
fn stepping_walks_the_fixture_in_order() {
    let mut state = PlaybackState::new(load_fib(), 50);
    state.take_update();

    state.step_forward();
    let update = state.take_update().unwrap();
    assert_eq!(update.position, "Frame 2/8");
    assert_eq!(update.instruction, "Store(\"n\")");

    state.step_back();
    let update = state.take_update().unwrap();
    assert_eq!(update.position, "Frame 1/8");
}

#[test]
fn display_reverses_stack_and_sorts_locals() {
    let mut state = PlaybackState::new(load_fib(), 50);
    for _ in 0..6 {
        state.step_forward();
    }

    let update = state.take_update().unwrap();
    // Storage is bottom-first; display shows the most recent push first
    assert_eq!(update.stack, vec!["Number(1.0)", "Number(10.0)"]);
    assert_eq!(
        update.locals,
        vec![("n".to_string(), "Number(10.0)".to_string())]
    );
}

#[test]
fn auto_play_runs_to_the_end_and_stops() {
    let mut state = PlaybackState::new(load_fib(), 100);
    state.toggle_play();
    assert_eq!(state.tick_interval(), Some(Duration::from_millis(10)));

    let mut ticks = 0;
    while state.is_playing() {
        state.on_tick();
        ticks += 1;
        assert!(ticks <= 100, "auto-play must terminate");
    }

    // 7 advancing ticks plus the one that auto-stops
    assert_eq!(ticks, 8);
    assert_eq!(state.cursor(), 7);
    assert_eq!(state.tick_interval(), None);

    // A further tick changes nothing
    state.on_tick();
    assert_eq!(state.cursor(), 7);
}

#[test]
fn rate_change_during_play_waits_for_next_cycle() {
    let mut state = PlaybackState::new(load_fib(), 50);
    state.toggle_play();

    state.set_rate(100);
    assert_eq!(state.tick_interval(), Some(Duration::from_millis(20)));

    // Pause/resume reschedules with the new rate
    state.toggle_play();
    state.toggle_play();
    assert_eq!(state.tick_interval(), Some(Duration::from_millis(10)));
}

#[test]
fn empty_trace_is_an_inert_viewer() {
    let trace = Trace::load(fixtures_dir().join("empty.json")).unwrap();
    let mut state = PlaybackState::new(trace, 50);

    let update = state.take_update().unwrap();
    assert_eq!(update.position, "Frame 0/0");

    assert!(state.step_forward().is_none());
    assert!(state.step_back().is_none());
    assert!(state.take_update().is_none());

    state.toggle_play();
    state.on_tick();
    assert!(!state.is_playing());
    assert_eq!(state.cursor(), 0);
}
