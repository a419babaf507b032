//! IR receiver input driver.
//!
//! ## Hardware
//!
//! 38 kHz demodulating receiver (VS1838B / TSOP-style) on
//! [`IR_RECEIVER_GPIO`](crate::pins::IR_RECEIVER_GPIO), pull-up enabled,
//! interrupt on any edge. The ISR reads the pin level to learn the edge's
//! polarity, measures the pulse with the [`IsrEdgeTimer`], and pushes an
//! [`Event::Edge`] onto the event queue. Everything else (classification,
//! bit accumulation, dispatch) happens in the main loop.

use core::sync::atomic::{AtomicU32, Ordering};

use super::edge_timer::IsrEdgeTimer;
use crate::events::{EdgeEvent, Event, EventQueue, Polarity};

static IR_EDGE_TIMER: IsrEdgeTimer = IsrEdgeTimer::new();

/// Edges lost because the event queue was full.
static IR_EDGES_DROPPED: AtomicU32 = AtomicU32::new(0);

/// Build the event for one edge. `level_high` is the pin level *after*
/// the edge, so high means a rising edge.
pub fn edge_event(timer: &IsrEdgeTimer, now_us: u32, level_high: bool) -> EdgeEvent {
    let sample = timer.on_edge(now_us);
    EdgeEvent {
        width_us: sample.width_us,
        polarity: if level_high {
            Polarity::Rising
        } else {
            Polarity::Falling
        },
    }
}

/// ISR body: measure the edge and queue it. Lock-free end to end; never
/// waits on a mutex or critical section.
pub fn ir_edge_isr(queue: &EventQueue, now_us: u32, level_high: bool) {
    let edge = edge_event(&IR_EDGE_TIMER, now_us, level_high);
    if queue.push(Event::Edge(edge)).is_err() {
        IR_EDGES_DROPPED.fetch_add(1, Ordering::Relaxed);
    }
}

/// Edges dropped since boot.
pub fn dropped_edges() -> u32 {
    IR_EDGES_DROPPED.load(Ordering::Relaxed)
}
