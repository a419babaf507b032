//! End-to-end countdown scenarios: IR edges and ticks in, display and
//! indicator calls out.

use irtimer::app::commands::TimerCommand;
use irtimer::app::events::AppEvent;
use irtimer::countdown::TimerState;
use irtimer::events::Event;
use irtimer::nec::NecFrame;
use irtimer::nec::encode::frame_edges;

use crate::mock_hw::{Harness, OutputCall};

// ── Boot ──────────────────────────────────────────────────────

#[test]
fn boot_shows_zero_with_indicator_off() {
    let mut app = irtimer::app::service::AppService::new(&Default::default());
    let mut hw = crate::mock_hw::MockHardware::new();
    let mut sink = crate::mock_hw::RecordingSink::default();
    app.start(&mut hw, &mut sink);

    assert_eq!(
        hw.calls,
        vec![OutputCall::Expired(false), OutputCall::render(0)]
    );
    assert_eq!(app.timer_state(), TimerState::default());
}

// ── Increment via full pulse train ───────────────────────────

#[test]
fn increment_frame_adds_one_and_refreshes_once() {
    let mut h = Harness::new();
    h.send_word(NecFrame::from_parts(0x00, 0x46, 0xB9).word());

    assert_eq!(h.app.timer_state().remaining_seconds, 1);
    assert_eq!(h.hw.calls, vec![OutputCall::render(1)]);
    assert!(h.sink.events.contains(&AppEvent::CommandAccepted {
        code: 0x46,
        command: TimerCommand::Increment,
    }));
}

// ── Countdown expiry ──────────────────────────────────────────

#[test]
fn final_tick_expires_and_lights_indicator() {
    let mut h = Harness::new();
    h.press(0x17); // digit 1
    h.press(0x40); // start
    h.hw.clear();

    h.tick();

    assert_eq!(
        h.app.timer_state(),
        TimerState {
            remaining_seconds: 0,
            running: false,
        }
    );
    assert!(h.app.is_expired());
    assert_eq!(
        h.hw.calls,
        vec![OutputCall::render(0), OutputCall::Expired(true)]
    );
    assert_eq!(h.sink.events.last(), Some(&AppEvent::Expired));
}

#[test]
fn full_countdown_from_five() {
    let mut h = Harness::new();
    h.press(0x1B); // digit 5
    h.press(0x40);
    for _ in 0..8 {
        h.tick();
    }
    assert_eq!(h.hw.renders(), vec![5, 4, 3, 2, 1, 0]);
    assert!(h.hw.expired_on());
    assert_eq!(h.app.tick_count(), 8);
}

#[test]
fn paused_timer_ignores_ticks() {
    let mut h = Harness::new();
    h.press(0x1A); // digit 4
    h.hw.clear();
    h.tick();
    h.tick();
    assert_eq!(h.app.timer_state().remaining_seconds, 4);
    assert!(h.hw.calls.is_empty());
}

#[test]
fn start_stop_does_not_refresh() {
    let mut h = Harness::new();
    h.press(0x40);
    assert!(h.app.timer_state().running);
    assert!(h.hw.calls.is_empty());
    assert!(h.sink.events.contains(&AppEvent::RunningChanged(true)));
}

// ── Rejected and ignored frames ───────────────────────────────

#[test]
fn non_complementary_frame_changes_nothing() {
    let mut h = Harness::new();
    h.press(0x19); // digit 3
    let before = h.app.timer_state();
    h.hw.clear();

    h.send_word(NecFrame::from_parts(0x00, 0x40, 0x40).word());

    assert_eq!(h.app.timer_state(), before);
    assert!(h.hw.calls.is_empty());
    assert_eq!(h.app.dispatch_stats().rejected, 1);
}

#[test]
fn rejected_frame_keeps_indicator_lit() {
    let mut h = Harness::new();
    h.press(0x17);
    h.press(0x40);
    h.tick();
    h.hw.clear();

    h.send_word(NecFrame::from_parts(0x00, 0x46, 0x00).word());
    h.press(0x2A); // valid but unmapped

    assert!(h.app.is_expired());
    assert!(h.hw.calls.is_empty());
}

#[test]
fn start_stop_after_expiry_clears_indicator_without_redraw() {
    let mut h = Harness::new();
    h.press(0x17);
    h.press(0x40);
    h.tick();
    h.hw.clear();

    h.press(0x40);

    assert!(!h.app.is_expired());
    assert!(h.app.timer_state().running);
    assert_eq!(h.hw.calls, vec![OutputCall::Expired(false)]);
}

#[test]
fn increment_after_expiry_clears_indicator() {
    let mut h = Harness::new();
    h.press(0x17);
    h.press(0x40);
    h.tick();
    h.hw.clear();

    h.press(0x46);

    assert!(!h.app.is_expired());
    assert_eq!(
        h.hw.calls,
        vec![OutputCall::Expired(false), OutputCall::render(1)]
    );
}

// ── Digit and decrement semantics ─────────────────────────────

#[test]
fn setting_same_digit_twice_is_idempotent() {
    let mut h = Harness::new();
    h.press(0x1C); // digit 6
    assert_eq!(h.app.timer_state().remaining_seconds, 6);
    h.press(0x1C);
    assert_eq!(h.app.timer_state().remaining_seconds, 6);
    assert_eq!(h.hw.renders(), vec![6, 6]);
}

#[test]
fn decrement_at_zero_stays_zero_but_redraws() {
    let mut h = Harness::new();
    h.press(0x15);
    assert_eq!(h.app.timer_state().remaining_seconds, 0);
    assert_eq!(h.hw.renders(), vec![0]);
}

#[test]
fn tick_interleaved_with_frame_is_processed_in_order() {
    let mut h = Harness::new();
    h.press(0x18); // digit 2
    h.press(0x40);
    h.hw.clear();

    // A tick lands in the queue halfway through the next frame.
    let word = NecFrame::for_command(0, 0x46).word();
    let edges: Vec<_> = frame_edges(word, &h.config.timings).collect();
    let (first, second) = edges.split_at(edges.len() / 2);
    for e in first {
        h.queue.push(Event::Edge(*e)).unwrap();
        h.drain();
    }
    h.tick();
    assert!(
        h.app.decode_state().bits > 0,
        "tick must not disturb the frame in progress"
    );
    for e in second {
        h.queue.push(Event::Edge(*e)).unwrap();
        h.drain();
    }

    assert_eq!(h.hw.renders(), vec![1, 2]);
    assert_eq!(h.app.timer_state().remaining_seconds, 2);
}
