//! Decoder pipeline: timestamps → edge timer → queue → decoder → dispatcher.

use irtimer::app::events::AppEvent;
use irtimer::drivers::edge_timer::IsrEdgeTimer;
use irtimer::drivers::ir_input::{edge_event, ir_edge_isr};
use irtimer::events::{EdgeEvent, Event, EventQueue, Polarity};
use irtimer::nec::encode::frame_edges;
use irtimer::nec::{DecodePhase, NecFrame};

use crate::mock_hw::Harness;

/// Turn an edge list into absolute timestamps, as the ISR would see them.
fn timestamps(edges: impl Iterator<Item = EdgeEvent>, start_us: u32) -> Vec<(u32, bool)> {
    let mut now = start_us;
    edges
        .map(|e| {
            now = now.wrapping_add(e.width_us);
            (now, e.polarity == Polarity::Rising)
        })
        .collect()
}

#[test]
fn timestamps_through_edge_timer_decode() {
    let mut h = Harness::new();
    let timer = IsrEdgeTimer::new();
    // Prime the timer as if the line had been idle since boot.
    timer.on_edge(5_000_000);

    let word = NecFrame::for_command(0x00, 0x46).word();
    for (now, level_high) in timestamps(frame_edges(word, &h.config.timings), 5_000_000) {
        h.queue
            .push(Event::Edge(edge_event(&timer, now, level_high)))
            .unwrap();
        h.drain();
    }

    assert_eq!(h.app.timer_state().remaining_seconds, 1);
}

#[test]
fn frame_spanning_timestamp_wrap_decodes() {
    let mut h = Harness::new();
    let timer = IsrEdgeTimer::new();
    let start = u32::MAX - 30_000;
    timer.on_edge(start);

    let word = NecFrame::for_command(0x00, 0x1B).word();
    for (now, level_high) in timestamps(frame_edges(word, &h.config.timings), start) {
        h.queue
            .push(Event::Edge(edge_event(&timer, now, level_high)))
            .unwrap();
        h.drain();
    }

    assert_eq!(h.app.timer_state().remaining_seconds, 5);
}

#[test]
fn isr_entry_point_feeds_queue() {
    let q = EventQueue::new();
    ir_edge_isr(&q, 1_000, true);
    ir_edge_isr(&q, 2_000, false);
    assert_eq!(q.len(), 2);
    assert!(matches!(q.pop(), Some(Event::Edge(e)) if e.polarity == Polarity::Rising));
    assert!(matches!(q.pop(), Some(Event::Edge(e)) if e.polarity == Polarity::Falling));
}

#[test]
fn start_pulse_after_twelve_bits_resets_decoder() {
    let mut h = Harness::new();
    let edges: Vec<_> = frame_edges(0xFFFF_FFFF, &h.config.timings).collect();

    // Leader + 12 bits.
    for e in &edges[..2 + 2 * 12] {
        h.queue.push(Event::Edge(*e)).unwrap();
    }
    h.drain();
    assert_eq!(h.app.decode_state().bits, 12);

    h.queue.push(Event::Edge(EdgeEvent::rising(9_000))).unwrap();
    h.queue.push(Event::Edge(EdgeEvent::falling(560))).unwrap();
    h.drain();

    let state = h.app.decode_state();
    assert_eq!(state.phase, DecodePhase::Decoding);
    assert_eq!(state.bits, 0);
    assert_eq!(state.word, 0);
    assert_eq!(h.app.decoder_stats().restarts, 1);
}

#[test]
fn restarted_frame_still_completes() {
    let mut h = Harness::new();
    let word = NecFrame::for_command(0x00, 0x46).word();
    let edges: Vec<_> = frame_edges(word, &h.config.timings).collect();

    // A remote that re-sends: half a frame, then the complete frame.
    for e in edges[..20].iter().chain(edges.iter()) {
        h.queue.push(Event::Edge(*e)).unwrap();
        h.drain();
    }

    assert_eq!(h.app.timer_state().remaining_seconds, 1);
    assert_eq!(h.app.decoder_stats().frames, 1);
}

#[test]
fn glitch_mid_frame_aborts_without_dispatch() {
    let mut h = Harness::new();
    let word = NecFrame::for_command(0x00, 0x46).word();
    let mut edges: Vec<_> = frame_edges(word, &h.config.timings).collect();
    // Corrupt the width of bit 10.
    edges[2 + 2 * 10] = EdgeEvent::rising(1_750);

    for e in edges {
        h.queue.push(Event::Edge(e)).unwrap();
        h.drain();
    }

    assert_eq!(h.app.timer_state().remaining_seconds, 0);
    assert!(h.hw.calls.is_empty());
    assert!(h.sink.events.contains(&AppEvent::DecodeAborted { bits: 10 }));
    assert_eq!(h.app.decode_state().phase, DecodePhase::Idle);
}

#[test]
fn noise_between_frames_is_ignored() {
    let mut h = Harness::new();
    for w in [50, 300, 1_125, 2_250, 12_000, 70_000] {
        h.queue.push(Event::Edge(EdgeEvent::rising(w))).unwrap();
        h.queue.push(Event::Edge(EdgeEvent::falling(w))).unwrap();
    }
    h.drain();
    assert_eq!(h.app.decode_state().phase, DecodePhase::Idle);

    h.press(0x46);
    assert_eq!(h.app.timer_state().remaining_seconds, 1);
}

#[test]
fn address_filter_applies_end_to_end() {
    let config = irtimer::config::SystemConfig {
        address_filter: Some(0x04),
        ..Default::default()
    };
    let mut h = Harness::with_config(config);

    h.press(0x46); // address 0x00
    assert_eq!(h.app.timer_state().remaining_seconds, 0);

    h.send_word(NecFrame::for_command(0x04, 0x46).word());
    assert_eq!(h.app.timer_state().remaining_seconds, 1);
}
