//! Unified error types for the IrTimer firmware.
//!
//! A single `Error` enum that every subsystem converts into, so the boot
//! path in `main` handles failures uniformly. All variants are `Copy`.
//!
//! Nothing on the runtime path is fatal: malformed IR frames are dropped
//! by the decoder/dispatcher without surfacing an error at all. These
//! types cover boot-time validation and peripheral setup.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration failed validation.
    Config(ConfigError),
    /// Peripheral initialisation failed.
    Hardware(HwInitError),
    /// Generic initialisation failure.
    Init(&'static str),
    /// The ISR → main-loop event queue is full; the event was dropped.
    QueueFull,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Hardware(e) => write!(f, "hardware: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::QueueFull => write!(f, "event queue full"),
        }
    }
}

impl core::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Hardware(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Reasons a [`SystemConfig`](crate::config::SystemConfig) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A pulse window has `min_us >= max_us`.
    EmptyWindow(&'static str),
    /// Two pulse windows overlap, so a width could classify two ways.
    OverlappingWindows(&'static str, &'static str),
    /// The same IR command code is mapped to two actions.
    DuplicateCode(u8),
    /// The countdown tick period must be non-zero.
    ZeroTickPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWindow(name) => write!(f, "{name} window is empty"),
            Self::OverlappingWindows(a, b) => write!(f, "{a} and {b} windows overlap"),
            Self::DuplicateCode(code) => write!(f, "command code 0x{code:02X} mapped twice"),
            Self::ZeroTickPeriod => write!(f, "tick period is zero"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
