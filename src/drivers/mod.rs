//! Input drivers, hardware initialisation, and the countdown tick source.

pub mod edge_timer;
pub mod hw_init;
pub mod hw_timer;
pub mod ir_input;
