//! IrTimer firmware library.
//!
//! Exposes the pure-logic modules (NEC decoder, countdown timer, event
//! queue, application service) for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod countdown;
pub mod error;
pub mod events;
pub mod nec;
pub mod pins;

pub mod adapters;
pub mod drivers;
