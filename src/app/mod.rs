//! Application core: pure domain logic, zero I/O.
//!
//! Decoded IR frames are validated and mapped to countdown commands here,
//! and periodic ticks drive the countdown. All interaction with the
//! display, the expired output and diagnostics happens through the
//! **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
