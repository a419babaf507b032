//! Interrupt-driven event system.
//!
//! Events are produced by:
//! - the IR input GPIO ISR (one [`Event::Edge`] per edge, width already
//!   measured by the edge timer)
//! - the periodic countdown timer callback ([`Event::Tick`])
//!
//! Events are consumed by the main loop, which hands them to
//! [`AppService::handle_event`](crate::app::service::AppService::handle_event)
//! one at a time. Because every input goes through this single queue, the
//! decoder and countdown state are only ever touched by the consumer and
//! need no lock of their own.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ IR edge ISR │────▶│  Event Queue │────▶│  Main Loop   │
//! │ Tick timer  │────▶│ (lock-free)  │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```

use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use heapless::mpmc::MpMcQueue;

use crate::error::{Error, Result};

/// Maximum number of pending events. Must be a power of two.
///
/// A full NEC frame is 66 edges spread over ~67 ms; the main loop drains
/// every few milliseconds, so 32 slots leave ample headroom.
pub const EVENT_QUEUE_CAP: usize = 32;

/// Which way the IR input line moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Rising,
    Falling,
}

/// One measured edge: its polarity and the width of the pulse it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEvent {
    /// Microseconds since the previous edge of either polarity.
    pub width_us: u32,
    pub polarity: Polarity,
}

impl EdgeEvent {
    pub const fn rising(width_us: u32) -> Self {
        Self {
            width_us,
            polarity: Polarity::Rising,
        }
    }

    pub const fn falling(width_us: u32) -> Self {
        Self {
            width_us,
            polarity: Polarity::Falling,
        }
    }
}

/// System events, processed strictly in FIFO order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// An edge on the IR receiver input.
    Edge(EdgeEvent),
    /// Periodic countdown tick.
    Tick,
}

// ── Bounded queue ─────────────────────────────────────────────

/// Bounded, lock-free event queue.
///
/// Producers (GPIO ISR / timer task) call [`push`](Self::push); the main
/// loop calls [`drain`](Self::drain). Backed by a `heapless` MPMC queue:
/// both ends are a handful of atomic CAS operations, never a lock, so an
/// interrupt can push while the main loop is mid-drain.
pub struct EventQueue {
    queue: MpMcQueue<Event, EVENT_QUEUE_CAP>,
    /// May briefly run ahead of the queue while a push is in flight.
    pending: AtomicUsize,
    dropped: AtomicU32,
}

impl EventQueue {
    pub const fn new() -> Self {
        Self {
            queue: MpMcQueue::new(),
            pending: AtomicUsize::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Enqueue an event. Safe to call from ISR context.
    ///
    /// When the queue is full the event is dropped and counted.
    pub fn push(&self, event: Event) -> Result<()> {
        // Count first so `pending` never trails a dequeue of this event.
        self.pending.fetch_add(1, Ordering::AcqRel);
        match self.queue.enqueue(event) {
            Ok(()) => Ok(()),
            Err(_) => {
                self.pending.fetch_sub(1, Ordering::AcqRel);
                self.dropped.fetch_add(1, Ordering::Relaxed);
                Err(Error::QueueFull)
            }
        }
    }

    /// Dequeue the oldest event, if any.
    pub fn pop(&self) -> Option<Event> {
        let event = self.queue.dequeue()?;
        self.pending.fetch_sub(1, Ordering::AcqRel);
        Some(event)
    }

    /// Hand every pending event to `handler`, oldest first.
    pub fn drain(&self, mut handler: impl FnMut(Event)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events dropped because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

// ── Process-wide queue ────────────────────────────────────────
//
// ISR callbacks cannot capture state, so the hardware producers share one
// static queue.  Tests construct their own `EventQueue` instead.

pub static EVENTS: EventQueue = EventQueue::new();

/// Push an event into the process-wide queue.
/// Returns `false` if the queue is full (event dropped).
pub fn push_event(event: Event) -> bool {
    EVENTS.push(event).is_ok()
}

/// Drain the process-wide queue into a callback, in FIFO order.
pub fn drain_events(handler: impl FnMut(Event)) {
    EVENTS.drain(handler);
}
