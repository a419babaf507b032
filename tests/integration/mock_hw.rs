//! Mock hardware adapter for integration tests.
//!
//! Records every display and indicator call so tests can assert on the
//! full output history without touching real GPIO or an LCD.

use irtimer::app::events::AppEvent;
use irtimer::app::ports::{DisplayPort, EventSink, IndicatorPort};
use irtimer::app::service::AppService;
use irtimer::config::SystemConfig;
use irtimer::events::{Event, EventQueue};
use irtimer::nec::NecFrame;
use irtimer::nec::encode::frame_edges;

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCall {
    Render { value: u16, row: u8, col: u8 },
    Expired(bool),
}

impl OutputCall {
    /// A render at the default display position.
    pub const fn render(value: u16) -> Self {
        Self::Render {
            value,
            row: 0,
            col: 0,
        }
    }
}

// ── MockHardware ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockHardware {
    pub calls: Vec<OutputCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values rendered, in order.
    pub fn renders(&self) -> Vec<u16> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                OutputCall::Render { value, .. } => Some(*value),
                OutputCall::Expired(_) => None,
            })
            .collect()
    }

    /// Current level of the expired output (off until first written).
    pub fn expired_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                OutputCall::Expired(on) => Some(*on),
                OutputCall::Render { .. } => None,
            })
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DisplayPort for MockHardware {
    fn render_decimal(&mut self, value: u16, row: u8, col: u8) {
        self.calls.push(OutputCall::Render { value, row, col });
    }
}

impl IndicatorPort for MockHardware {
    fn set_expired(&mut self, on: bool) {
        self.calls.push(OutputCall::Expired(on));
    }
}

// ── Recording event sink ──────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── Harness ───────────────────────────────────────────────────

/// A started service wired to mocks, fed through a private event queue
/// the same way the firmware's main loop drains the static one.
pub struct Harness {
    pub app: AppService,
    pub hw: MockHardware,
    pub sink: RecordingSink,
    pub config: SystemConfig,
    pub queue: EventQueue,
}

#[allow(dead_code)]
impl Harness {
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Start the service, then forget the boot-time output so tests only
    /// see what their own inputs cause.
    pub fn with_config(config: SystemConfig) -> Self {
        let mut app = AppService::new(&config);
        let mut hw = MockHardware::new();
        let mut sink = RecordingSink::default();
        app.start(&mut hw, &mut sink);
        hw.clear();
        sink.events.clear();
        Self {
            app,
            hw,
            sink,
            config,
            queue: EventQueue::new(),
        }
    }

    /// Queue the edges of one transmitted word and drain them.
    pub fn send_word(&mut self, word: u32) {
        for edge in frame_edges(word, &self.config.timings) {
            self.queue.push(Event::Edge(edge)).unwrap();
            self.drain();
        }
    }

    pub fn press(&mut self, command: u8) {
        self.send_word(NecFrame::for_command(0x00, command).word());
    }

    pub fn tick(&mut self) {
        self.queue.push(Event::Tick).unwrap();
        self.drain();
    }

    pub fn drain(&mut self) {
        let Self { app, hw, sink, queue, .. } = self;
        queue.drain(|event| app.handle_event(event, hw, sink));
    }
}
