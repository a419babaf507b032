//! Countdown timer state.
//!
//! Pure state machine: no display, no pins. [`CountdownTimer::apply`] and
//! [`CountdownTimer::tick`] report what changed and the
//! [`AppService`](crate::app::service::AppService) turns that into port
//! calls.
//!
//! ```text
//!   remaining > 0, running          remaining hits 0
//!  ─────────── tick: remaining -= 1 ───────────────▶ running = false, expired
//! ```
//!
//! `remaining_seconds` is unsigned and every decrement is guarded, so it
//! can never wrap below zero.

use log::info;

use crate::app::commands::TimerCommand;

/// The user-visible countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerState {
    pub remaining_seconds: u16,
    pub running: bool,
}

/// What [`CountdownTimer::apply`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandEffect {
    /// The display must be redrawn with the new remaining value.
    pub refresh: bool,
    /// `running` flipped.
    pub running_changed: bool,
    /// The expired indicator was asserted and is now cleared.
    pub expired_cleared: bool,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or already at zero.
    Idle,
    /// Counted down; carries the new remaining value (> 0).
    Counted(u16),
    /// Reached zero on this tick; the timer stopped.
    Expired,
}

#[derive(Debug, Clone, Default)]
pub struct CountdownTimer {
    state: TimerState,
    expired: bool,
}

impl CountdownTimer {
    /// `{ remaining: 0, running: false }`, indicator off.
    pub const fn new() -> Self {
        Self {
            state: TimerState {
                remaining_seconds: 0,
                running: false,
            },
            expired: false,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining(&self) -> u16 {
        self.state.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Whether the expired indicator should currently be asserted.
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Apply one accepted remote command.
    pub fn apply(&mut self, cmd: TimerCommand) -> CommandEffect {
        let s = &mut self.state;
        let mut effect = CommandEffect::default();

        let mutated = match cmd {
            TimerCommand::StartStop => {
                s.running = !s.running;
                effect.running_changed = true;
                true
            }
            TimerCommand::Increment => {
                s.remaining_seconds = s.remaining_seconds.saturating_add(1);
                effect.refresh = true;
                true
            }
            TimerCommand::Decrement => {
                // Redraw even at zero.
                effect.refresh = true;
                if s.remaining_seconds > 0 {
                    s.remaining_seconds -= 1;
                    true
                } else {
                    false
                }
            }
            TimerCommand::SetDigit(n) => {
                s.remaining_seconds = u16::from(n);
                effect.refresh = true;
                true
            }
        };

        if mutated && self.expired {
            self.expired = false;
            effect.expired_cleared = true;
        }
        effect
    }

    /// Advance the countdown by one period.
    pub fn tick(&mut self) -> TickOutcome {
        let s = &mut self.state;
        if !s.running || s.remaining_seconds == 0 {
            return TickOutcome::Idle;
        }

        s.remaining_seconds -= 1;
        if s.remaining_seconds > 0 {
            return TickOutcome::Counted(s.remaining_seconds);
        }

        s.running = false;
        self.expired = true;
        info!("Countdown expired");
        TickOutcome::Expired
    }
}
